// src/bin/initiative_cli.rs
//
// Построчный dev-транспорт: читает команды из stdin, ответы пишет в stdout.
//
//   !f
//   !di Alice Bob-q Eve-l-h
//   @42 !init          <- команда в сессии 42
//
// Логи идут в stderr (уровень через RUST_LOG).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use initiative_engine::api::{handle_command, render_help};
use initiative_engine::domain::SessionId;
use initiative_engine::infra::{registry_from_config, EngineConfig};

#[derive(Debug, Parser)]
#[command(name = "initiative_cli", about = "Трекер инициативы на картах (stdin → stdout)")]
struct Args {
    /// JSON-конфиг движка.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для воспроизводимых колод (перекрывает конфиг).
    #[arg(long)]
    seed: Option<u64>,

    /// Сессия по умолчанию (0 — личные сообщения).
    #[arg(long, default_value_t = 0)]
    session: SessionId,

    /// Префикс команд.
    #[arg(long, default_value = "!")]
    prefix: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("{e}");
                std::process::exit(2);
            }
        },
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    info!(?config, "initiative_cli started");
    let mut registry = registry_from_config(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin: {e}");
                break;
            }
        };

        let Some((session, name, rest)) = split_line(&line, &args.prefix, args.session) else {
            continue;
        };

        let replies = if name == "help" {
            vec![render_help()]
        } else {
            handle_command(&mut registry, session, name, rest, config.max_draw_cards)
        };

        for reply in replies {
            if writeln!(stdout, "{reply}").is_err() {
                return;
            }
        }
    }

    info!(sessions = registry.len(), "initiative_cli finished");
}

/// `[@сессия] <префикс>команда аргументы` → (сессия, команда, аргументы).
fn split_line<'a>(
    line: &'a str,
    prefix: &str,
    default_session: SessionId,
) -> Option<(SessionId, &'a str, &'a str)> {
    let mut line = line.trim();
    let mut session = default_session;

    if let Some(rest) = line.strip_prefix('@') {
        let (id, tail) = rest.split_once(char::is_whitespace)?;
        session = id.parse().ok()?;
        line = tail.trim_start();
    }

    let body = line.strip_prefix(prefix)?;
    let (name, args) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
    if name.is_empty() {
        return None;
    }
    Some((session, name, args.trim()))
}
