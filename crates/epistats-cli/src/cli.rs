//! CLI argument definitions for epistats.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use epistats_export::ExportAudience;

#[derive(Parser)]
#[command(
    name = "epistats",
    version,
    about = "Surveillance statistics configuration and case export",
    long_about = "Configure statistics visualizations and generate audience-filtered\n\
                  case exports for disease surveillance data.\n\n\
                  Exports are flat CSV files whose column set depends on the chosen\n\
                  audience (surveillance or case management)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow person-level values (names, phone numbers) in log output.
    ///
    /// Off by default: log lines redact anything that identifies a person.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export case records from a JSON file to an audience-filtered CSV.
    Export(ExportArgs),

    /// List the export columns and the audiences that receive them.
    Columns(ColumnsArgs),

    /// List the statistics grouping attributes and their sub-attributes.
    Attributes,

    /// Resolve a visualization configuration into a query specification.
    Plan(PlanArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the JSON file containing the case records.
    #[arg(value_name = "CASES_JSON")]
    pub input: PathBuf,

    /// Export audience deciding which columns are included.
    #[arg(long = "audience", value_enum, default_value = "surveillance")]
    pub audience: AudienceArg,

    /// Output CSV path (default: next to the input file).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the first exported record as a table after writing.
    #[arg(long = "preview")]
    pub preview: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Restrict the listing to one audience's visible columns, in final
    /// output order.
    #[arg(long = "audience", value_enum)]
    pub audience: Option<AudienceArg>,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Visualization type (table, chart, map).
    #[arg(long = "visualization", value_name = "TYPE", default_value = "table")]
    pub visualization: String,

    /// Chart sub-type (stacked-column, column, line, pie); chart mode only.
    #[arg(long = "chart-type", value_name = "TYPE")]
    pub chart_type: Option<String>,

    /// Map sub-type (regions, districts); map mode only.
    #[arg(long = "map-type", value_name = "TYPE")]
    pub map_type: Option<String>,

    /// Rows grouping, e.g. "REGION_DISTRICT:DISTRICT" or "SEX".
    #[arg(long = "rows", value_name = "ATTRIBUTE[:SUB]")]
    pub rows: Option<String>,

    /// Columns grouping, e.g. "REPORT_TIME:EPI_WEEK_OF_YEAR".
    #[arg(long = "columns", value_name = "ATTRIBUTE[:SUB]")]
    pub columns: Option<String>,

    /// Exchange rows and columns after applying the selections.
    #[arg(long = "swap")]
    pub swap: bool,

    /// Disable the stacked-column and pie chart sub-types, as when the
    /// selected groupings cannot feed them.
    #[arg(long = "no-stacked-column-and-pie")]
    pub no_stacked_column_and_pie: bool,

    /// Print the plan as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AudienceArg {
    Surveillance,
    Management,
}

impl AudienceArg {
    pub fn to_audience(self) -> ExportAudience {
        match self {
            AudienceArg::Surveillance => ExportAudience::CaseSurveillance,
            AudienceArg::Management => ExportAudience::CaseManagement,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
