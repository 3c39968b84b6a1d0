//! Bujomark - a bullet-journal markup transcoder.
//!
//! This binary provides the document driver around the bujomark library
//! crates: it scans input for `<bujo>` blocks, transcodes them to markup,
//! escapes and passes through the surrounding text, and maps
//! paragraph-boundary signals to genuine paragraph splits.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use bujomark_config::Config;
use bujomark_core::Token;
use bujomark_parser::Tokenizer;
use bujomark_render::Transcoder;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Bujomark v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> io::Result<()> {
    // Load and merge configuration
    let config = load_config(cli);
    debug!(
        "Loaded config: {} bullet markers, indent {:?}",
        config.bullet_table().len(),
        config.bujo.indent
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        writeln!(out, "{}", render_document(&input, &config))?;
    } else {
        for path in &cli.files {
            debug!("Processing file: {}", path.display());
            let input = fs::read_to_string(path)?;
            writeln!(out, "{}", render_document(&input, &config))?;
        }
    }

    out.flush()
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Config {
    let mut config = match Config::load_with_override(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            Config::default()
        }
    };
    cli.apply_overrides(&mut config);
    config
}

/// Render a whole document.
///
/// Bujo blocks are transcoded; text outside blocks is escaped and passed
/// through. The output is wrapped in a paragraph, and paragraph-boundary
/// signals (two per paragraph break) split it into separate paragraphs.
fn render_document(input: &str, config: &Config) -> String {
    let tokenizer = Tokenizer::from_config(config);
    let mut output = String::from("<p>");
    let mut transcoder = Transcoder::from_config(config);

    for spanned in tokenizer.tokenize(input) {
        trace!(
            "token {} at offset {}",
            spanned.token,
            spanned.span.start.offset
        );
        match &spanned.token {
            Token::Raw(text) => {
                flush_block(&mut transcoder, config, &mut output);
                output.push_str(&html_escape::encode_safe(text));
            }
            token => {
                transcoder.push(token);
                // One transcoder instance per block
                if *token == Token::BlockClose {
                    flush_block(&mut transcoder, config, &mut output);
                }
            }
        }
    }
    flush_block(&mut transcoder, config, &mut output);

    output.push_str("</p>");
    output
}

/// Flush the current block's markup into the output, replacing the
/// transcoder with a fresh one for the next block.
fn flush_block(transcoder: &mut Transcoder, config: &Config, output: &mut String) {
    let done = std::mem::replace(transcoder, Transcoder::from_config(config)).finish();
    if done.markup.is_empty() {
        return;
    }
    output.push_str(&split_paragraphs(&done.markup, &done.boundaries));
}

/// Insert a paragraph split at every offset where at least two boundary
/// signals were raised. A lone signal is not enough to split, matching
/// how a host pipeline treats a single line terminator.
fn split_paragraphs(markup: &str, boundaries: &[usize]) -> String {
    let mut output = String::with_capacity(markup.len());
    let mut last = 0;
    let mut i = 0;
    while i < boundaries.len() {
        let offset = boundaries[i];
        let mut signals = 1;
        while i + signals < boundaries.len() && boundaries[i + signals] == offset {
            signals += 1;
        }
        if signals >= 2 && offset >= last {
            output.push_str(&markup[last..offset]);
            output.push_str("</p>\n<p>");
            last = offset;
        }
        i += signals;
    }
    output.push_str(&markup[last..]);
    output
}
