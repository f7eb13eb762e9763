//! Host backed by a terminal and the system browser.

use super::{Editor, Host};
use crate::config::Config;
use async_trait::async_trait;
use colored::Colorize;
use std::time::Duration;
use tokio::process::Command;

/// Runs docs commands from the command line.
///
/// The "active editor" is the file named on the command line, if any.
/// Status messages go to stdout and errors to stderr.
pub struct TerminalHost {
    editor: Option<Editor>,
    browser: Option<(String, Vec<String>)>,
    colored: bool,
}

impl TerminalHost {
    /// Create a host for an optional editor using the given configuration.
    #[must_use]
    pub fn new(editor: Option<Editor>, config: &Config) -> Self {
        Self {
            editor,
            browser: config.browser.command_parts(),
            colored: config.output.colored,
        }
    }

    /// Build the process that opens `url`.
    fn opener(&self, url: &str) -> Command {
        if let Some((program, args)) = &self.browser {
            let mut command = Command::new(program);
            command.args(args).arg(url);
            return command;
        }
        platform_opener(url)
    }
}

#[cfg(target_os = "macos")]
fn platform_opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn platform_opener(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(url);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Only web URLs are handed to the browser.
fn is_web_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Refusing to open malformed URL");
            false
        }
    }
}

#[async_trait]
impl Host for TerminalHost {
    fn active_editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    async fn open_external(&self, url: &str) -> bool {
        if !is_web_url(url) {
            return false;
        }

        let mut command = self.opener(url);
        let file = self.editor.as_ref().and_then(|editor| editor.document().path());
        tracing::debug!(command = ?command, file = ?file, "Opening URL");

        match command.status().await {
            Ok(status) if status.success() => true,
            Ok(status) => {
                tracing::warn!(url = %url, status = %status, "Browser command failed");
                false
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to launch browser command");
                false
            }
        }
    }

    fn set_status_bar_message(&self, message: &str, duration: Duration) {
        tracing::debug!(duration = ?duration, "Status message");
        if self.colored {
            println!("{}", message.green());
        } else {
            println!("{message}");
        }
    }

    fn show_error_message(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "error:".red().bold(), message);
        } else {
            eprintln!("error: {message}");
        }
    }
}
