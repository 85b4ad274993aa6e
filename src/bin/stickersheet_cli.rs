//! CLI tool for stickersheet - turns a job list into a printable PDF
//!
//! Usage:
//!   stickersheet_cli <jobs.csv>                         # Writes sticker_sheet.pdf
//!   stickersheet_cli <jobs.json> -o out.pdf             # Custom output path
//!   stickersheet_cli <jobs.tsv> --spec page.json        # Page geometry from JSON
//!   stickersheet_cli <jobs.csv> --config look.json      # Render settings from JSON
//!
//! The generation summary is printed to stdout as JSON. Set `RUST_LOG=debug`
//! for diagnostics on stderr.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use stickersheet::csv::read_jobs_file;
use stickersheet::{generate_sheet, GeneratedSheet, PageSpec, RenderConfig, StickerError};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: stickersheet_cli <jobs.csv|jobs.tsv|jobs.json> [-o output.pdf] [--spec page.json] [--config config.json]";
const DEFAULT_OUTPUT: &str = "sticker_sheet.pdf";

struct Args {
    input: String,
    output: String,
    spec: Option<String>,
    config: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut input = None;
    let mut output = None;
    let mut spec = None;
    let mut config = None;

    while let Some(arg) = args.next() {
        if !arg.starts_with('-') {
            if input.replace(arg).is_some() {
                return Err("Only one input file may be given".to_string());
            }
            continue;
        }
        let slot = match arg.as_str() {
            "-o" | "--output" => &mut output,
            "--spec" => &mut spec,
            "--config" => &mut config,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag => return Err(format!("Unknown option: {flag}")),
        };
        match args.next() {
            Some(value) => *slot = Some(value),
            None => return Err(format!("Missing value for {arg}")),
        }
    }

    Ok(Args {
        input: input.ok_or_else(|| USAGE.to_string())?,
        output: output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        spec,
        config,
    })
}

fn load_json<T: DeserializeOwned + Default>(path: Option<&str>) -> Result<T, StickerError> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

fn write_outputs(output: &str, sheet: &GeneratedSheet) -> Result<(), StickerError> {
    fs::write(output, &sheet.pdf)?;
    eprintln!("Written: {output}");

    let json = serde_json::to_string_pretty(&sheet.summary)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn run(args: &Args) -> Result<(), String> {
    let spec: PageSpec = load_json(args.spec.as_deref())
        .map_err(|e| format!("Error loading {}: {e}", args.spec.as_deref().unwrap_or("spec")))?;
    let config: RenderConfig = load_json(args.config.as_deref()).map_err(|e| {
        format!("Error loading {}: {e}", args.config.as_deref().unwrap_or("config"))
    })?;

    let raw = read_jobs_file(Path::new(&args.input))
        .map_err(|e| format!("Error reading {}: {e}", args.input))?;
    tracing::debug!(rows = raw.len(), "read job file");

    let sheet = generate_sheet(&raw, &spec, &config).map_err(|e| e.to_string())?;
    write_outputs(&args.output, &sheet).map_err(|e| format!("Error writing {}: {e}", args.output))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    if let Err(msg) = run(&args) {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}
