//! Command-line interface for bujomark.
//!
//! Provides argument parsing for the document driver.

use clap::Parser;
use std::path::PathBuf;

use bujomark_config::Config;

/// Bujomark - a bullet-journal markup transcoder.
///
/// Finds `<bujo>` blocks in plain-text documents and renders them as
/// nested markup; text outside blocks is escaped and passed through.
#[derive(Parser, Debug)]
#[command(
    name = "bjm",
    author = "Bujomark Contributors",
    version,
    about = "A bullet-journal markup transcoder",
    after_help = "Examples:\n  \
                  cat journal.txt | bjm\n  \
                  bjm notes.txt\n  \
                  bjm -c custom.toml journal.txt\n  \
                  bjm --bullets '* >' --indent '  ' journal.txt"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the bullet table (one "marker glyph" pair per line)
    #[arg(long = "bullets", value_name = "TABLE")]
    pub bullets: Option<String>,

    /// Override the indent-marker literal
    #[arg(long = "indent", value_name = "STR")]
    pub indent: Option<String>,

    /// Do not forward paragraph breaks; render them as plain line breaks
    #[arg(long = "no-paragraphs")]
    pub no_paragraphs: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply CLI overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref bullets) = self.bullets {
            config.bujo.bullets = bullets.clone();
        }
        if let Some(ref indent) = self.indent {
            config.bujo.indent = indent.clone();
        }
        if self.no_paragraphs {
            config.render.forward_paragraphs = false;
        }
    }
}

/// Print configuration paths.
pub fn show_paths() {
    match Config::config_path() {
        Some(path) => println!("config: {}", path.display()),
        None => println!("config: <no platform config directory>"),
    }
}
