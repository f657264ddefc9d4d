//! statement2ofx CLI
//!
//! Converts an extracted bank-statement text file into an OFX document
//! written next to the input.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- extrato.txt
//! ```
//!
//! The input is the plain-text artifact of the PDF extraction stage, with
//! pages separated by form-feed characters. On success the generated `.ofx`
//! path is printed to stdout.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use statement2ofx::{ofx, ConvertConfig, ConvertError, Result, StatementConverter};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    env_logger::init();

    match run() {
        Ok(output_path) => println!("{}", output_path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<PathBuf> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ConvertError::MissingArgument);
    }

    let input_path = PathBuf::from(&args[1]);
    if !input_path.is_file() {
        return Err(ConvertError::InputNotFound(input_path));
    }
    if !has_txt_extension(&input_path) {
        return Err(ConvertError::UnsupportedExtension(input_path));
    }

    let config = ConvertConfig::default();
    let text = fs::read_to_string(&input_path)?;

    // Form feed is the page separator emitted by the extraction stage.
    let pages: Vec<&str> = text.split('\u{0c}').collect();
    if pages.len() > config.max_pages {
        return Err(ConvertError::TooManyPages {
            found: pages.len(),
            limit: config.max_pages,
        });
    }

    let mut converter = StatementConverter::new(config);
    converter.process_pages(pages);

    if converter.transactions().is_empty() {
        return Err(ConvertError::NoTransactions);
    }

    let document = converter.build_document();
    let output_path = input_path.with_extension("ofx");
    fs::write(&output_path, ofx::to_ascii_lossy(&document))?;

    Ok(output_path)
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
