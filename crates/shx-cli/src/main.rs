use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use shx_core::{Diagnostic, Page, parse, translate_or_fallback};
use shx_renderer::Renderer;

/// Translate SHX markup into an HTML page.
#[derive(Debug, Parser)]
#[command(name = "shx", version)]
struct Cli {
    /// SHX source file; stdin when omitted.
    input: Option<PathBuf>,

    /// Print only the page fragment instead of a full document.
    #[arg(long, conflicts_with = "json")]
    raw: bool,

    /// Print `{"html": ..., "title": ...}` as JSON.
    #[arg(long)]
    json: bool,

    /// Leave the reset stylesheet out of the document.
    #[arg(long)]
    no_reset_css: bool,

    /// Value of the document's `lang` attribute.
    #[arg(long, default_value = "en")]
    lang: String,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report diagnostics on stderr.
    #[arg(long, value_enum)]
    diagnostics: Option<DiagnosticsMode>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DiagnosticsMode {
    Json,
    Pretty,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    html: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'a str,
    severity: &'a str,
    message: &'a str,
    line: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let source = read_source(cli.input.as_ref())?;
    log::debug!("read {} bytes of source", source.len());

    if let Some(mode) = cli.diagnostics {
        let parsed = parse(&source);
        emit_diagnostics(&parsed.diagnostics, mode)?;
    }

    let page = translate_or_fallback(&source);
    if cli.json || cli.raw {
        let output = if cli.json {
            page_to_json(&page)?
        } else {
            page.html.clone()
        };
        return write_output(cli.output.as_deref(), &output);
    }

    let renderer = Renderer::new()
        .with_lang(cli.lang.as_str())
        .with_reset_css(!cli.no_reset_css);
    match &cli.output {
        Some(path) => {
            renderer
                .write_document(&page, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => write_output(None, &renderer.embed_page(&page))?,
    }
    Ok(())
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write stdout")?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n").context("failed to write stdout")?;
            }
        }
    }
    Ok(())
}

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn page_to_json(page: &Page) -> Result<String> {
    let json = JsonPage {
        html: &page.html,
        title: &page.title,
    };
    serde_json::to_string_pretty(&json).context("failed to encode page as JSON")
}

fn emit_diagnostics(diagnostics: &[Diagnostic], mode: DiagnosticsMode) -> Result<()> {
    match mode {
        DiagnosticsMode::Json => {
            let entries: Vec<JsonDiagnostic<'_>> = diagnostics
                .iter()
                .map(|diag| JsonDiagnostic {
                    code: diag.code,
                    severity: diag.severity.label(),
                    message: &diag.message,
                    line: diag.line,
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries)
                .context("failed to encode diagnostics as JSON")?;
            eprintln!("{}", json);
        }
        DiagnosticsMode::Pretty => {
            for diag in diagnostics {
                eprintln!(
                    "{}: {} {} {}",
                    diag.line,
                    diag.severity.label(),
                    diag.code,
                    diag.message
                );
            }
        }
    }
    Ok(())
}
