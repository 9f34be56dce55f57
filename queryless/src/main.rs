//! # queryless
//!
//! Preview the placeholder dataset a queryless data source produces.
//!
//! ## Overview
//!
//! queryless is built on top of querylesslib. Given a query descriptor in
//! JSON, it prints the two synthetic rows a report would see in queryless
//! mode, together with the column attributes (labels and numeric hints).
//!
//! ## Usage
//!
//! ```bash
//! # Preview a query
//! queryless preview query.json
//!
//! # Labels in German, with a custom message bundle
//! queryless preview query.json --locale de_DE --messages messages_de.properties
//!
//! # Machine readable output (outstanding adds --output)
//! queryless preview query.json --output json
//! ```

mod render;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Arg, ArgMatches, Command};
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use querylesslib::{
    FixedLocale, MessageCatalog, MetaTableModel, Query, QuerylessOptions, QuerylessTableModel,
    TableModel, DEFAULT_NUMBER,
};

use render::{create_theme, preview_context, Preview, PreviewColumn, PREVIEW_TEMPLATE};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("queryless")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Preview placeholder data for queryless report data sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("preview")
                .about("Show the placeholder rows and column attributes for a query")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .help("Path to a JSON query descriptor"),
                )
                .arg(
                    Arg::new("locale")
                        .short('l')
                        .long("locale")
                        .default_value("en_US")
                        .help("Locale used for column labels"),
                )
                .arg(
                    Arg::new("messages")
                        .short('m')
                        .long("messages")
                        .help("Message bundle (.properties) for text placeholders"),
                )
                .arg(
                    Arg::new("reference-date")
                        .short('d')
                        .long("reference-date")
                        .help("Reference date for date columns (YYYY-MM-DD)"),
                )
                .arg(
                    Arg::new("base-number")
                        .short('n')
                        .long("base-number")
                        .value_parser(clap::value_parser!(f64))
                        .help("Base value for numeric columns (default 123.45)"),
                ),
        )
}

/// Load a query descriptor from a JSON file
fn load_query(path: &Path) -> Result<Query, anyhow::Error> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read query '{}'", path.display()))?;
    let query = serde_json::from_str(&text).map_err(|e| {
        anyhow::anyhow!("invalid query descriptor '{}': {}", path.display(), e)
    })?;
    Ok(query)
}

/// Built-in messages, overridden by the bundle given with --messages
fn load_messages(matches: &ArgMatches) -> Result<MessageCatalog, anyhow::Error> {
    let mut catalog = MessageCatalog::builtin();
    if let Some(path) = matches.get_one::<String>("messages") {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read messages '{}'", path))?;
        let bundle = MessageCatalog::from_properties(&text)
            .map_err(|e| anyhow::anyhow!("invalid message bundle '{}': {}", path, e))?;
        catalog.extend(bundle);
    }
    Ok(catalog)
}

/// Build placeholder options from matches
fn build_options(matches: &ArgMatches) -> Result<QuerylessOptions, anyhow::Error> {
    let mut options = QuerylessOptions::new();

    if let Some(date) = matches.get_one::<String>("reference-date") {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid reference date '{}', expected YYYY-MM-DD", date))?;
        options = options.reference_date(date);
    }

    let base = matches
        .get_one::<f64>("base-number")
        .copied()
        .unwrap_or(DEFAULT_NUMBER);

    Ok(options.base_number(base))
}

/// Read every column and cell of the model into a preview
fn build_preview(model: &QuerylessTableModel) -> Result<Preview, anyhow::Error> {
    let column_count = model.column_count()?;

    let columns = (0..column_count)
        .map(|column| -> Result<PreviewColumn, anyhow::Error> {
            Ok(PreviewColumn {
                name: model.column_name(column)?,
                class: model.column_class(column)?,
                attributes: model.column_attributes(column)?.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rows = (0..model.row_count())
        .map(|row| {
            (0..column_count)
                .map(|column| model.value_at(row, column))
                .collect::<querylesslib::Result<Vec<_>>>()
        })
        .collect::<querylesslib::Result<Vec<_>>>()?;

    Ok(Preview { columns, rows })
}

/// Handler for preview command
fn preview_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let query_path = matches
        .get_one::<String>("query")
        .context("missing query path")?;
    let locale = matches
        .get_one::<String>("locale")
        .map(|s| s.as_str())
        .unwrap_or("en_US");

    let query = load_query(Path::new(query_path))?;
    let messages = load_messages(matches)?;
    let options = build_options(matches)?;

    let mut model = QuerylessTableModel::with_services(
        Arc::new(FixedLocale::new(locale)),
        Arc::new(messages),
    )
    .options(options);
    model.set_query(Arc::new(query));

    let preview = build_preview(&model)?;
    model.close();

    // For JSON mode, return raw data
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&preview)?));
    }

    Ok(Output::Render(serde_json::to_value(preview_context(&preview))?))
}

fn main() -> ExitCode {
    let result = App::builder()
        .theme(create_theme())
        .command("preview", preview_handler, PREVIEW_TEMPLATE)
        .run_to_string(build_command(), std::env::args());

    match result {
        RunResult::Handled(output) => {
            if output.starts_with("Error:") {
                eprintln!("{}", output.trim_end());
                return ExitCode::FAILURE;
            }
            print!("{}", output);
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => ExitCode::SUCCESS,
        RunResult::NoMatch(_) => {
            // preview is the only command; clap already rejects anything else
            eprintln!("Error: unknown command");
            ExitCode::FAILURE
        }
    }
}
