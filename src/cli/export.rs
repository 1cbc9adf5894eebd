//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::utils::{GlobalArgs, Session};
use crate::config::CliOverrides;
use crate::domain::ExportFormat;
use crate::render::render_export;

#[derive(Args)]
pub struct ExportArgs {
    /// Output format: 'txt', 'csv' or 'paged'
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Task lines per page for the paged format
    #[arg(long, value_name = "LINES")]
    pub page_lines: Option<usize>,
}

pub fn run(args: ExportArgs, global: &GlobalArgs) -> Result<()> {
    let format = match args.format.as_deref() {
        Some(raw) => Some(parse_format(raw)?),
        None => None,
    };
    let overrides =
        CliOverrides { page_lines: args.page_lines, export_format: format, ..CliOverrides::default() };
    let session = Session::open(global, overrides)?;
    let list = session.load()?;

    let document =
        render_export(list.as_slice(), session.config.export_format, session.config.page_lines);

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, document)
                .with_context(|| format!("Failed writing export to {}", path.display()))?;
            eprintln!(
                "Exported {} task(s) as {} to {}",
                list.len(),
                session.config.export_format.as_str(),
                path.display()
            );
        }
        None => print!("{}", document),
    }
    Ok(())
}

fn parse_format(raw: &str) -> Result<ExportFormat> {
    ExportFormat::parse(raw).ok_or_else(|| {
        anyhow::anyhow!("Invalid export format '{}': expected 'txt', 'csv' or 'paged'", raw)
    })
}
