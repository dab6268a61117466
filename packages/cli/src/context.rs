//! Application context with shared state and utilities

use anyhow::Result;
use auth_core::session::FileStorage;
use auth_core::{Config, SessionStore};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

/// Application context passed to all commands
pub struct AppContext {
    pub config: Config,
    pub quiet: bool,
}

impl AppContext {
    pub fn new(
        api_url: Option<String>,
        session_file: Option<PathBuf>,
        quiet: bool,
    ) -> Result<Self> {
        let mut config = Config::from_env()?;
        if let Some(url) = api_url {
            config.api_url = url;
        }
        if let Some(path) = session_file {
            config.session_file = path;
        }
        Ok(Self { config, quiet })
    }

    pub fn session_store(&self) -> SessionStore<FileStorage> {
        self.config.session_store()
    }

    pub fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.quiet {
            return Ok(default);
        }
        Ok(Confirm::with_theme(&self.theme())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    pub fn print_header(&self, msg: &str) {
        if !self.quiet {
            println!();
            println!("{}", style(msg).bold());
        }
    }

    pub fn print_success(&self, msg: &str) {
        println!("{}", style(msg).green());
    }

    pub fn print_warning(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).yellow());
        }
    }

    pub fn print_info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).cyan());
        }
    }

    pub fn print_error(&self, msg: &str) {
        eprintln!("{}", style(msg).red());
    }
}
