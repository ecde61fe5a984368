//! Truncate pipelines and execute them against PostgreSQL

use super::CliError;
use crate::render::{render_json, render_table};
use crate::{ArgValue, Database, Pipeline};

/// Options shared by the `show` and `run` subcommands
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Raw pipeline SQL
    pub pipeline: String,
    /// Positional argument values, as typed on the command line
    pub arguments: Vec<String>,
    /// Number of leading stages to keep (0 keeps the whole pipeline)
    pub stages: usize,
}

/// Truncate the pipeline and format it without executing.
pub fn execute_show(options: &RunOptions) -> Result<String, CliError> {
    let (sql, arguments) = truncate(options)?;

    let mut out = sql;
    if !arguments.is_empty() {
        let rendered: Vec<String> = arguments.iter().map(ToString::to_string).collect();
        out.push_str("\n-- arguments: ");
        out.push_str(&rendered.join(", "));
    }
    Ok(out)
}

/// Truncate the pipeline, run it, and format the result rows.
pub fn execute_run(options: &RunOptions, dsn: &str, json: bool) -> Result<String, CliError> {
    let (sql, arguments) = truncate(options)?;

    let mut db = Database::connect(dsn)?;
    let result = db.run(&sql, &arguments)?;

    Ok(if json {
        render_json(&result)
    } else {
        render_table(&result)
    })
}

fn truncate(options: &RunOptions) -> Result<(String, Vec<ArgValue>), CliError> {
    let arguments: Vec<ArgValue> = options
        .arguments
        .iter()
        .map(|raw| ArgValue::infer(raw))
        .collect();

    let pipeline = Pipeline::parse(&options.pipeline, &arguments)?;
    Ok(pipeline.prefix(options.stages)?)
}
