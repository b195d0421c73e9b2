use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use epistats_export::{ExportAudience, ExportColumn};
use epistats_model::CaseAttribute;

use crate::types::{ExportResult, PlanOutcome};

pub fn print_export_summary(result: &ExportResult, preview: Option<&[(&'static str, String)]>) {
    println!("Audience: {}", result.audience);
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Records"), header_cell("Columns")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.records).add_attribute(Attribute::Bold),
        Cell::new(result.columns),
    ]);
    println!("{table}");

    if let Some(pairs) = preview {
        let mut preview_table = Table::new();
        preview_table.set_header(vec![header_cell("Column"), header_cell("Value")]);
        apply_table_style(&mut preview_table);
        for (name, value) in pairs {
            preview_table.add_row(vec![Cell::new(name), value_cell(value)]);
        }
        println!();
        println!("First record:");
        println!("{preview_table}");
    }
}

pub fn print_columns(columns: &[&ExportColumn], audience: Option<ExportAudience>) {
    match audience {
        Some(audience) => println!("Columns for {audience}:"),
        None => println!("All export columns:"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Order"),
        header_cell("Audiences"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for column in columns {
        let audiences = column
            .audiences
            .iter()
            .map(|audience| audience.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column.order),
            Cell::new(audiences),
        ]);
    }
    println!("{table}");
}

pub fn print_attributes() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Attribute"),
        header_cell("Sub-attributes"),
        header_cell("Age group"),
        header_cell("Map"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for attribute in CaseAttribute::ALL {
        let subs = attribute
            .sub_attributes()
            .iter()
            .map(|sub| sub.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(attribute)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            if subs.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(subs)
            },
            flag_cell(attribute.is_age_group()),
            flag_cell(attribute.is_valid_for(epistats_model::VisualizationType::Map)),
        ]);
    }
    println!("{table}");
}

pub fn print_plan(outcome: &PlanOutcome) {
    println!("Visualization: {}", outcome.visualization_type);
    if let Some(chart_type) = outcome.chart_type {
        println!("Chart type: {chart_type}");
    }
    if let Some(map_type) = outcome.map_type {
        println!("Map type: {map_type}");
    }

    let spec = &outcome.query_spec;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Axis"),
        header_cell("Attribute"),
        header_cell("Sub-attribute"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Rows").add_attribute(Attribute::Bold),
        Cell::new(spec.rows_attribute),
        option_cell(spec.rows_sub_attribute.map(|sub| sub.to_string())),
    ]);
    table.add_row(vec![
        Cell::new("Columns").add_attribute(Attribute::Bold),
        option_cell(spec.columns_attribute.map(|attribute| attribute.to_string())),
        option_cell(spec.columns_sub_attribute.map(|sub| sub.to_string())),
    ]);
    println!("{table}");
    println!(
        "Population data required: {}",
        if spec.needs_population_data { "yes" } else { "no" }
    );

    let visibility = &outcome.visibility;
    let mut shown = Vec::new();
    if visibility.chart_type_selector {
        shown.push("chart type selector");
    }
    if visibility.map_type_selector {
        shown.push("map type selector");
    }
    if visibility.rows_element {
        shown.push("rows");
    }
    if visibility.columns_element {
        shown.push("columns");
    }
    if visibility.swap_control {
        shown.push("swap");
    }
    println!("Visible controls: {}", shown.join(", "));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn option_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
