use std::collections::HashSet;

use tracing::warn;

use crate::api::commands::Command;
use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::api::render::{render_error, render_response};
use crate::domain::{SessionId, FULL_DECK_SIZE};
use crate::engine::{RandomSource, SessionRegistry};

/// Выполнить команду в сессии `session`. Сессия создаётся при первом обращении.
///
/// `max_draw_cards` — верхняя граница для `DrawCards`.
pub fn execute<R: RandomSource>(
    registry: &mut SessionRegistry<R>,
    session: SessionId,
    command: Command,
    max_draw_cards: usize,
) -> Result<CommandResponse, ApiError> {
    let state = registry.session_mut(session);

    match command {
        Command::StartFight => {
            state.start_fight();
            Ok(CommandResponse::FightStarted {
                deck_size: state.deck().remaining(),
            })
        }

        Command::Deal { tokens } => {
            let report = state.deal(tokens.as_slice())?;
            Ok(CommandResponse::Dealt {
                report,
                view: state.show(),
            })
        }

        Command::ShowInitiative => Ok(CommandResponse::Initiative(state.show())),

        Command::NewRound(cmd) => {
            let exclusions: HashSet<String> = cmd.exclusions.into_iter().collect();
            let report = state.advance_round(cmd.carry_over, &exclusions)?;
            Ok(CommandResponse::NewRound {
                report,
                view: state.show(),
            })
        }

        Command::Redraw { name } => {
            let report = state.redraw(&name).inspect_err(|_| {
                warn!(session, name = %name, "redraw for unknown participant");
            })?;
            Ok(CommandResponse::Redrawn {
                report,
                view: state.show(),
            })
        }

        Command::Drop { names } => {
            let report = state.drop_participants(names.as_slice());
            Ok(CommandResponse::Dropped {
                report,
                view: state.show(),
            })
        }

        Command::Hold { tokens } => {
            let report = state.hold(tokens.as_slice());
            Ok(CommandResponse::Held {
                report,
                view: state.show(),
            })
        }

        Command::DrawCards { count } => {
            let max = max_draw_cards.min(FULL_DECK_SIZE);
            if count == 0 || count > max {
                return Err(ApiError::BadArgument(format!(
                    "Количество карт: от 1 до {max}"
                )));
            }
            let cards = state.draw_from_fresh_deck(count)?;
            Ok(CommandResponse::CardsDrawn { cards })
        }
    }
}

/// Полный путь «имя команды + строка аргументов → строки ответа».
///
/// Каждая строка результата — отдельное сообщение в чат.
pub fn handle_command<R: RandomSource>(
    registry: &mut SessionRegistry<R>,
    session: SessionId,
    name: &str,
    args: &str,
    max_draw_cards: usize,
) -> Vec<String> {
    let result = Command::parse(name, args)
        .and_then(|command| execute(registry, session, command, max_draw_cards));

    match result {
        Ok(response) => render_response(&response),
        Err(err) => render_error(&err),
    }
}
