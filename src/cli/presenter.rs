//! Terminal output for the CLI
//!
//! Status lines go to stderr so stdout stays scriptable (the invoked
//! action id, config values, capability lists).

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    fn status(&self, glyph: ColoredString, message: &str) {
        eprintln!("{} {}", glyph, message);
    }

    pub fn info(&self, message: &str) {
        self.status("ℹ".cyan(), message);
    }

    pub fn success(&self, message: &str) {
        self.status("✓".green(), message);
    }

    pub fn warn(&self, message: &str) {
        self.status("⚠".yellow(), message);
    }

    pub fn error(&self, message: &str) {
        self.status("✗".red(), message);
    }

    /// Spin on stderr while waiting for the notification to resolve
    pub fn start_spinner(&mut self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let spinner = ProgressBar::new_spinner().with_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Scriptable output line on stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Key-value line on stdout, used by `config list` and `server-info`
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
