use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tpv_cli::config::{Settings, load_settings, resolve_config_path, resolve_max_width};
use tpv_cli::input::{InputFormat, load_dataset};
use tpv_cli::render::{preview_json, preview_table};
use tpv_format::PreviewFormatter;

use crate::cli::{BudgetArgs, InputFormatArg, OutputFormatArg, PreviewArgs};

pub fn load_cli_settings(config: Option<&Path>) -> Result<Settings> {
    let path = resolve_config_path(config);
    load_settings(path.as_deref()).context("load settings")
}

pub fn run_preview(args: &PreviewArgs, settings: &Settings) -> Result<()> {
    let span = info_span!("preview", input = %args.input.display());
    let _guard = span.enter();

    let formatter =
        PreviewFormatter::new(settings.preview.clone()).context("invalid preview settings")?;
    let max_width = resolve_max_width(args.max_width, settings);

    let dataset = load_dataset(&args.input, input_format(args.format))
        .with_context(|| format!("load {}", args.input.display()))?;
    let preview = formatter
        .build(&dataset, max_width)
        .context("build preview")?;
    info!(
        rows = preview.row_count(),
        columns = preview.column_count(),
        max_characters = preview.max_characters,
        "preview ready"
    );

    match args.output {
        OutputFormatArg::Table => println!("{}", preview_table(&preview)),
        OutputFormatArg::Json => {
            println!("{}", preview_json(&preview).context("serialize preview")?);
        }
    }
    Ok(())
}

pub fn run_budget(args: &BudgetArgs, settings: &Settings) -> Result<()> {
    let formatter =
        PreviewFormatter::new(settings.preview.clone()).context("invalid preview settings")?;
    let max_width = resolve_max_width(args.max_width, settings);
    let columns = usize::try_from(args.columns).context("column count out of range")?;
    let budget = formatter
        .max_characters(columns, max_width)
        .context("compute budget")?;
    println!("{budget}");
    Ok(())
}

fn input_format(arg: InputFormatArg) -> InputFormat {
    match arg {
        InputFormatArg::Auto => InputFormat::Auto,
        InputFormatArg::Csv => InputFormat::Csv,
        InputFormatArg::Json => InputFormat::Json,
    }
}
