use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use epistats_cli::input::CaseInput;
use epistats_cli::logging::redact_value;
use epistats_export::{
    CaseExportRow, ExportAudience, column_names, project, visible_columns, write_csv,
};
use epistats_model::{
    CaseAttribute, ChartType, MapType, ModelError, SubAttribute, VisualizationType,
};
use epistats_viz::VisualizationConfig;

use crate::cli::{ColumnsArgs, ExportArgs, PlanArgs};
use crate::summary::{print_attributes, print_columns, print_export_summary, print_plan};
use crate::types::{ExportResult, PlanOutcome};

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let audience = args.audience.to_audience();
    let span = info_span!("export", audience = %audience, input = %args.input.display());
    let _guard = span.enter();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("read case file {}", args.input.display()))?;
    let inputs: Vec<CaseInput> = serde_json::from_str(&raw)
        .with_context(|| format!("parse case file {}", args.input.display()))?;
    info!(cases = inputs.len(), "case file loaded");

    let rows: Vec<CaseExportRow> = inputs
        .into_iter()
        .map(CaseInput::into_export_row)
        .collect();
    for row in &rows {
        debug!(case = %row.uuid, person = redact_value(&row.person), "case projected");
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, audience));
    let file = File::create(&output)
        .with_context(|| format!("create output file {}", output.display()))?;
    let records = write_csv(BufWriter::new(file), audience, &rows).context("write export csv")?;
    info!(records, output = %output.display(), "export written");

    let preview = if args.preview {
        rows.first().map(|row| project(row, audience))
    } else {
        None
    };
    let result = ExportResult {
        audience,
        records,
        columns: column_names(audience).len(),
        output,
    };
    print_export_summary(&result, preview.as_deref());
    Ok(result)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    match args.audience {
        Some(audience) => {
            let audience = audience.to_audience();
            print_columns(&visible_columns(audience), Some(audience));
        }
        None => {
            let all: Vec<_> = epistats_export::CASE_EXPORT_COLUMNS.iter().collect();
            print_columns(&all, None);
        }
    }
    Ok(())
}

pub fn run_attributes() -> Result<()> {
    print_attributes();
    Ok(())
}

pub fn run_plan(args: &PlanArgs) -> Result<()> {
    let mut config = VisualizationConfig::new();

    let visualization_type = VisualizationType::from_str(&args.visualization)?;
    config.set_visualization_type(visualization_type);
    if let Some(chart_type) = &args.chart_type {
        config.set_chart_type(ChartType::from_str(chart_type)?)?;
    }
    if let Some(map_type) = &args.map_type {
        config.set_map_type(MapType::from_str(map_type)?)?;
    }
    if let Some(rows) = &args.rows {
        let (attribute, sub_attribute) = parse_axis(rows)?;
        config.select_rows(attribute, sub_attribute)?;
    }
    if let Some(columns) = &args.columns {
        let (attribute, sub_attribute) = parse_axis(columns)?;
        config.select_columns(attribute, sub_attribute)?;
    }
    if args.no_stacked_column_and_pie {
        config.set_stacked_column_and_pie_enabled(false);
    }
    if args.swap {
        config.swap_rows_and_columns();
    }

    let outcome = PlanOutcome {
        visualization_type: config.visualization_type(),
        chart_type: config.chart_type(),
        map_type: config.map_type(),
        visibility: config.visibility(),
        query_spec: config.query_spec()?,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_plan(&outcome);
    }
    Ok(())
}

/// Parses an "ATTRIBUTE" or "ATTRIBUTE:SUB_ATTRIBUTE" axis selection.
fn parse_axis(value: &str) -> Result<(CaseAttribute, Option<SubAttribute>), ModelError> {
    match value.split_once(':') {
        Some((attribute, sub_attribute)) => Ok((
            CaseAttribute::from_str(attribute)?,
            Some(SubAttribute::from_str(sub_attribute)?),
        )),
        None => Ok((CaseAttribute::from_str(value)?, None)),
    }
}

fn default_output_path(input: &Path, audience: ExportAudience) -> std::path::PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("cases");
    let slug = match audience {
        ExportAudience::CaseSurveillance => "surveillance",
        ExportAudience::CaseManagement => "management",
    };
    input.with_file_name(format!("{stem}-{slug}.csv"))
}
