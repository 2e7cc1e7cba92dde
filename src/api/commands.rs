use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::traits::parse_participant;

/// Команда верхнего уровня, собранная из имени команды и строки аргументов.
///
/// Префикс (`!`) и разбиение строки на имя/аргументы делает транспорт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать бой: новая колода, раунд 1.
    StartFight,

    /// Раздать карты: токены `Имя[-флаг]*`.
    Deal { tokens: Vec<String> },

    /// Показать порядок хода.
    ShowInitiative,

    /// Следующий раунд.
    NewRound(NewRoundCommand),

    /// Одна новая карта персонажу.
    Redraw { name: String },

    /// Убрать персонажей из раунда.
    Drop { names: Vec<String> },

    /// `Имя` — на холд, `-Имя` — снять с холда.
    Hold { tokens: Vec<String> },

    /// Разово вытянуть карты из отдельной колоды.
    DrawCards { count: usize },
}

/// Аргументы нового раунда: `+` — перенести участников, `-Имя` — кроме этого.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRoundCommand {
    pub carry_over: bool,
    pub exclusions: Vec<String>,
}

impl Command {
    /// Разобрать имя команды (канон или алиас) и сырую строку аргументов.
    pub fn parse(name: &str, args: &str) -> Result<Command, ApiError> {
        let tokens = split_tokens(args);

        match name {
            "start-fight" | "f" | "fight" => Ok(Command::StartFight),

            "deal" | "di" => {
                require_tokens("deal", &tokens)?;
                Ok(Command::Deal { tokens })
            }

            "show-initiative" | "init" | "initiative" => Ok(Command::ShowInitiative),

            "new-round" | "rd" | "round" => Ok(Command::NewRound(NewRoundCommand::parse(args))),

            "redraw" | "card" => {
                let (name, _) = parse_participant(args.trim());
                if name.is_empty() {
                    return Err(ApiError::MissingArgument {
                        command: "redraw".to_string(),
                    });
                }
                Ok(Command::Redraw { name })
            }

            "drop" => {
                require_tokens("drop", &tokens)?;
                Ok(Command::Drop { names: tokens })
            }

            "hold" => {
                require_tokens("hold", &tokens)?;
                Ok(Command::Hold { tokens })
            }

            "draw-cards" | "drawcard" => {
                let count = match tokens.first() {
                    None => 1,
                    Some(raw) => raw
                        .parse::<usize>()
                        .map_err(|_| ApiError::BadArgument(format!("Не число: {raw}")))?,
                };
                Ok(Command::DrawCards { count })
            }

            other => Err(ApiError::UnknownCommand(other.to_string())),
        }
    }
}

impl NewRoundCommand {
    /// `+` где угодно включает перенос; каждое `-слово` исключает имя.
    pub fn parse(args: &str) -> Self {
        NewRoundCommand {
            carry_over: args.contains('+'),
            exclusions: scan_exclusions(args),
        }
    }
}

fn split_tokens(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}

fn require_tokens(command: &str, tokens: &[String]) -> Result<(), ApiError> {
    if tokens.is_empty() {
        return Err(ApiError::MissingArgument {
            command: command.to_string(),
        });
    }
    Ok(())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Все вхождения `-<буквы/цифры/_>+`, без дефиса. `+-Bob-Eve` → `[Bob, Eve]`.
fn scan_exclusions(args: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut chars = args.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '-' {
            continue;
        }
        let mut word = String::new();
        while let Some(&next) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            word.push(next);
            chars.next();
        }
        if !word.is_empty() {
            found.push(word);
        }
    }

    found
}
