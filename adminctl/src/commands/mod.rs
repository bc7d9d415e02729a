pub mod directory;
pub mod pending;
pub mod session;
pub mod vendors;

use anyhow::{bail, Context as _, Result};
use moderation::{
    ActivationState, Console, ConsoleConfig, ListRender, ListView, Notice, NoticeLevel, Notifier,
    Row,
};
use owo_colors::OwoColorize;
use serde::Serialize;
use session_store::{EnvSessionCredentialProvider, SessionStore};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{settings::style::Style, Table, Tabled};
use thiserror::Error;

/// A failure the operator has already been shown; exit without repeating it.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Reported(pub String);

/// Resolved configuration shared by every subcommand.
pub struct Context {
    pub config: ConsoleConfig,
}

impl Context {
    pub fn new(api_url: Option<String>, session_file: Option<PathBuf>) -> Result<Self> {
        let config =
            ConsoleConfig::new(api_url, session_file).context("Invalid console configuration")?;
        Ok(Self { config })
    }

    pub fn store(&self) -> SessionStore {
        self.config.session_store()
    }

    pub fn console(&self) -> Result<Console> {
        let credentials = Arc::new(EnvSessionCredentialProvider::new(self.store()));
        Console::new(&self.config, credentials, Arc::new(ConsoleNotifier))
            .context("Failed to initialise admin API client")
    }
}

/// Prints confirmations to stdout and alerts to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Alert => eprintln!("Error: {}", notice.message),
        }
    }
}

pub(crate) fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

pub(crate) fn colorize_state(state: ActivationState) -> String {
    let text = state.to_string();
    if !should_use_color() {
        return text;
    }
    match state {
        ActivationState::Active => text.green().to_string(),
        ActivationState::Deactivated => text.red().to_string(),
        ActivationState::Deleted => text.dimmed().to_string(),
    }
}

/// RFC 3339 timestamps as `YYYY-MM-DD HH:MM` UTC; anything else verbatim.
pub(crate) fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&chrono::Utc)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Prints a mounted list: its rows as a table or JSON, its empty message,
/// or its error (which fails the command).
pub(crate) fn print_list<T, R>(
    view: &ListView<T>,
    json: bool,
    to_row: impl Fn(&T) -> R,
) -> Result<()>
where
    T: Row + Serialize,
    R: Tabled,
{
    match view.render() {
        ListRender::Loading => bail!("List did not finish loading"),
        ListRender::Error(message) => {
            eprintln!("Error: {}", message);
            Err(Reported(message.to_string()).into())
        }
        ListRender::Empty(message) => {
            if json {
                println!("[]");
            } else {
                println!("{}", message);
            }
            Ok(())
        }
        ListRender::Rows(rows) => {
            if json {
                println!("{}", serde_json::to_string_pretty(rows)?);
                return Ok(());
            }
            let mut table = Table::new(rows.iter().map(to_row).collect::<Vec<_>>());
            table.with(Style::rounded());
            println!("{}", table);
            Ok(())
        }
    }
}

/// Fails a command whose list could not be loaded before acting on it.
pub(crate) fn require_loaded<T: Row>(view: &ListView<T>) -> Result<()> {
    if let ListRender::Error(message) = view.render() {
        eprintln!("Error: {}", message);
        return Err(Reported(message.to_string()).into());
    }
    Ok(())
}
