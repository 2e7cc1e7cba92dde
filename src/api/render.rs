//! Текст ответов для чата. Каждый элемент результата — отдельное сообщение.

use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::domain::card::{format_card, format_cards};
use crate::domain::FULL_DECK_SIZE;
use crate::engine::{HoldChange, InitiativeView};

const EMPTY_INITIATIVE: &str = "Инициатива пуста. Используйте !f и !di";

/// Таблица инициативы моноширинным блоком.
///
/// Колонки: имя, черты, активная карта, все карты, отметка холда.
pub fn render_view(view: &InitiativeView) -> String {
    if view.is_empty() {
        return EMPTY_INITIATIVE.to_string();
    }

    let header = format!(
        "Раунд {}  |  Осталось карт: {}",
        view.round_number, view.remaining
    );
    let mut lines = vec![
        header.clone(),
        "-".repeat(header.chars().count()),
        format!("{:<20} {:<28} {:<12} Все карты", "Имя", "Черты", "Карта"),
    ];

    for row in &view.rows {
        let hold = if row.on_hold { " (на холде)" } else { "" };
        lines.push(format!(
            "{:<20} {:<28} {:<12} {}{}",
            row.name,
            row.traits.display_names(),
            format_card(&row.active),
            format_cards(&row.drawn),
            hold
        ));
    }

    format!("```\n{}\n```", lines.join("\n"))
}

pub fn render_response(response: &CommandResponse) -> Vec<String> {
    match response {
        CommandResponse::FightStarted { deck_size } => vec![format!(
            "Бой начат. Новая колода ({deck_size} карты). Раунд 1."
        )],

        CommandResponse::Dealt { report, view } => {
            let dealt: Vec<String> = report
                .dealt
                .iter()
                .map(|e| {
                    format!(
                        "{} [{}]: {}",
                        e.name,
                        e.traits.display_names(),
                        format_card(&e.active)
                    )
                })
                .collect();
            vec![
                format!(
                    "Карты розданы:\n{}\n\nОсталось в колоде: **{}** карт",
                    dealt.join("\n"),
                    report.remaining
                ),
                render_view(view),
            ]
        }

        CommandResponse::Initiative(view) => vec![render_view(view)],

        CommandResponse::NewRound { report, view } => {
            let mut msg = format!("Новый раунд {}", report.round_number);
            if report.carried_over {
                msg.push_str(" (персонажи сохранены кроме удалённых)");
            }
            let tail = if view.is_empty() {
                format!("Инициатива пуста. Осталось карт: {}", view.remaining)
            } else {
                render_view(view)
            };
            vec![msg, tail]
        }

        CommandResponse::Redrawn { report, view } => vec![
            format!(
                "{} тянет новую карту: {}",
                report.name,
                format_card(&report.card)
            ),
            render_view(view),
        ],

        CommandResponse::Dropped { report, view } => {
            let mut out = Vec::new();
            if !report.removed.is_empty() {
                out.push(format!("Удалены: {}", report.removed.join(", ")));
            }
            if !report.unknown.is_empty() {
                out.push(format!("Не найдены: {}", report.unknown.join(", ")));
            }
            if !view.is_empty() {
                out.push(render_view(view));
            }
            out
        }

        CommandResponse::Held { report, view } => {
            let mut out = Vec::new();
            let changes: Vec<String> = report
                .changes
                .iter()
                .map(|c| match c {
                    HoldChange::Held(name) => format!("Ожидает: {name}"),
                    HoldChange::Released(name) => format!("Действует: {name}"),
                })
                .collect();
            if !changes.is_empty() {
                out.push(changes.join("\n"));
            }
            if !view.is_empty() {
                out.push(render_view(view));
            }
            out
        }

        CommandResponse::CardsDrawn { cards } => {
            let parts: Vec<String> = cards.iter().map(format_card).collect();
            vec![format!(
                "Вытянуто карт ({}): {}",
                cards.len(),
                parts.join(", ")
            )]
        }
    }
}

pub fn render_error(err: &ApiError) -> Vec<String> {
    let msg = match err {
        ApiError::UnknownCommand(name) => format!("Неизвестная команда: {name}"),
        ApiError::MissingArgument { command } if command == "deal" => {
            "Укажите хотя бы одно имя.".to_string()
        }
        ApiError::MissingArgument { command } => {
            format!("Команде {command} нужен хотя бы один аргумент.")
        }
        ApiError::BadArgument(msg) => msg.clone(),
        ApiError::ParticipantNotFound(name) => format!("Персонаж {name} не найден"),
        ApiError::EngineError(msg) => format!("Ошибка: {msg}"),
    };
    vec![msg]
}

/// Справка по командам.
pub fn render_help() -> String {
    [
        "!f — начать бой (новая колода из 54 карт)".to_string(),
        "!di Имя[-q|-l|-i|-h] ... — раздать карты".to_string(),
        "!init — показать инициативу".to_string(),
        "!rd [+] [-Имя] — новый раунд (+ перенести участников, -Имя исключить)".to_string(),
        "!card Имя — новая карта персонажу".to_string(),
        "!drop Имя ... — убрать из раунда".to_string(),
        "!hold Имя | -Имя — поставить / снять с холда".to_string(),
        format!("!drawcard [N] — вытянуть N карт из отдельной колоды ({FULL_DECK_SIZE} карты)"),
    ]
    .join("\n")
}
