// Content table command-line tool
//
// Reads a content table (JSON) or clipboard HTML from a file or stdin and
// validates, normalizes, renders or exports it. Output goes to stdout.

#![forbid(unsafe_code)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use kodegen_tools_content_table::{
    ExportConfig, ExportRequest, Exporter, Renderer, Validator, extract_from_html, normalize,
};

/// Content table tool: validate, normalize, render and export
#[derive(Parser, Debug)]
#[command(name = "kodegen-content-table")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "CONTENT_TABLE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a table against the schema and list every problem
    Validate {
        /// Input JSON file, `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Repair a table into a schema-valid one
    Normalize {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Render a table as HTML, TSV or JSON
    Render {
        #[arg(default_value = "-")]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Column preset; the configured default when omitted
        #[arg(short, long)]
        preset: Option<String>,
    },
    /// Build the XHTML document body sent to the document API
    Export {
        #[arg(default_value = "-")]
        input: PathBuf,
        #[arg(short, long)]
        preset: Option<String>,
    },
    /// Recover the embedded table from copied HTML
    Extract {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// List the available presets
    Presets,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Html,
    Tsv,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match args.config.as_deref() {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    let catalogue = config
        .load_catalogue()
        .context("Failed to load preset catalogue")?;

    match args.command {
        Command::Validate { input } => {
            let value = read_json(&input)?;
            let report = Validator::new(&config).validate(&value);
            for error in &report.errors {
                println!("{error}");
            }
            if !report.ok {
                bail!("{} validation error(s)", report.errors.len());
            }
            println!("ok");
        }
        Command::Normalize { input } => {
            let table = normalize(&read_json(&input)?);
            println!("{}", Renderer::new(&catalogue).to_json(&table));
        }
        Command::Render {
            input,
            format,
            preset,
        } => {
            let table = normalize(&read_json(&input)?);
            let preset = preset.unwrap_or_else(|| config.default_preset().to_string());
            let renderer = Renderer::new(&catalogue);
            let output = match format {
                Format::Html => renderer.to_html_with(&table, &preset, &config.view_html_options()),
                Format::Tsv => renderer.to_tsv(&table, &preset),
                Format::Json => renderer.to_json(&table),
            };
            println!("{output}");
        }
        Command::Export { input, preset } => {
            let table = normalize(&read_json(&input)?);
            let mut request = ExportRequest::new(table);
            if let Some(preset) = preset {
                request = request.preset(preset);
            }
            let exporter = Exporter::new(config, Arc::new(catalogue));
            let export = exporter.build_export_document(request).await;
            println!("{}", export.document);
        }
        Command::Extract { input } => {
            let html = read_input(&input)?;
            let Some(table) = extract_from_html(&html) else {
                bail!("No embedded content table found in {}", input.display());
            };
            println!("{}", Renderer::new(&catalogue).to_json(&table));
        }
        Command::Presets => {
            for preset in catalogue.list() {
                let status = if preset.is_usable() { "" } else { " (disabled)" };
                println!(
                    "{}\t{}\t{} column(s){status}",
                    preset.id,
                    preset.label,
                    preset.columns.len()
                );
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = read_input(path)?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
