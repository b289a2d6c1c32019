use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr, eyre};

use movieform::{
    DEFAULT_TITLE, DocumentFormat, MovieFormUI, OutputOptions, UiOptions, emit, init_tracing,
};

#[derive(Debug, Parser)]
#[command(
    name = "movieform",
    version,
    about = "Enter movie metadata in a terminal form and print the saved entries on exit"
)]
struct Cli {
    /// Title shown on the form panel
    #[arg(long = "title", value_name = "TEXT", default_value = DEFAULT_TITLE)]
    title: String,

    /// Output format for the saved movies (json, yaml, toml depending on build features)
    #[arg(long = "format", value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Print an empty list when nothing was saved
    #[arg(long = "emit-empty")]
    emit_empty: bool,

    /// Hide the key binding help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Quit immediately even when the form holds unsaved input
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Keep the entered values after a movie is saved
    #[arg(long = "keep-values")]
    keep_values: bool,

    /// JSON keymap replacing the built-in key bindings
    #[arg(long = "keymap", value_name = "PATH")]
    keymap: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();

    let mut diagnostics = DiagnosticCollector::default();

    let format = match cli.format.parse::<DocumentFormat>() {
        Ok(format) => Some(format),
        Err(message) => {
            diagnostics.push("format", message);
            None
        }
    };

    let mut options = UiOptions::default()
        .with_help(!cli.no_help)
        .with_confirm_exit(!cli.no_confirm_exit)
        .with_reset_after_submit(!cli.keep_values);
    if let Some(path) = cli.keymap.as_deref() {
        match load_keymap(options.clone(), path) {
            Ok(updated) => options = updated,
            Err(err) => diagnostics.push("keymap", format!("{err:#}")),
        }
    }

    diagnostics.into_result()?;
    let format = format.ok_or_else(|| eyre!("output format was not resolved"))?;

    let output = OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_emit_empty(cli.emit_empty);

    let collection = MovieFormUI::new()
        .with_title(cli.title)
        .with_options(options)
        .run()
        .map_err(Report::msg)?;

    emit(&collection, &output).map_err(Report::msg)?;
    Ok(())
}

fn load_keymap(options: UiOptions, path: &Path) -> Result<UiOptions> {
    let source = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read keymap {}", path.display()))?;
    options
        .with_keymap_json(&source)
        .map_err(Report::msg)
        .wrap_err_with(|| format!("invalid keymap {}", path.display()))
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push(&mut self, label: &str, message: impl Into<String>) {
        self.messages.push(format!("{label}: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("invalid arguments:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_numbered() {
        let mut diagnostics = DiagnosticCollector::default();
        diagnostics.push("format", "unsupported format 'xml'");
        diagnostics.push("keymap", "missing file");
        let err = diagnostics.into_result().unwrap_err().to_string();
        assert!(err.contains("1. format: unsupported format 'xml'"));
        assert!(err.contains("2. keymap: missing file"));
    }

    #[test]
    fn empty_diagnostics_pass() {
        assert!(DiagnosticCollector::default().into_result().is_ok());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["movieform"]);
        assert_eq!(cli.title, DEFAULT_TITLE);
        assert_eq!(cli.format, "json");
        assert!(!cli.keep_values);
    }
}
