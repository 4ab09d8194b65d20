//! Text and JSON output for reports

use serde_json::{Value, json};

use crate::report::builder::{GroupSummary, PackageRow, Report};
use crate::version::cell::{Class, VersionCell};

/// Marks columns covered by the cell to their left
const CONTINUATION: &str = "\"";
/// Shown in place of an empty version
const MISSING: &str = "-";

fn cell_text(cell: &VersionCell) -> String {
    let version = if cell.version.is_empty() {
        MISSING
    } else {
        cell.version.as_str()
    };

    match cell.class() {
        Class::Upgrade => format!("{version} ↑"),
        Class::Downgrade => format!("{version} ↓"),
        Class::Unchanged => version.to_string(),
    }
}

fn row_fields(row: &PackageRow) -> Vec<String> {
    let mut fields = vec![row.name.clone(), cell_text(&row.bootstrap)];

    for cell in &row.releases {
        fields.push(cell_text(cell));
        fields.extend((1..cell.repeat).map(|_| CONTINUATION.to_string()));
    }

    let or_missing = |v: &str| (if v.is_empty() { MISSING } else { v }).to_string();
    if row.upstream.is_single() {
        fields.push(or_missing(&row.upstream.latest));
        fields.push(CONTINUATION.to_string());
    } else {
        fields.push(or_missing(&row.upstream.stable));
        fields.push(or_missing(&row.upstream.latest));
    }

    fields
}

/// Render the report as an aligned plain-text table.
pub fn render_text(report: &Report) -> String {
    let mut header = vec!["Package".to_string(), "Bootstrap".to_string()];
    header.extend(report.columns.iter().cloned());
    header.push("Stable".to_string());
    header.push("Latest".to_string());

    let mut table = vec![header];
    table.extend(report.rows.iter().map(row_fields));

    let width_count = table.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..width_count)
        .map(|i| {
            table
                .iter()
                .filter_map(|fields| fields.get(i))
                .map(|f| f.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = format!(
        "Based on data fetched at {} by {}\n\n",
        report.time_generated, report.hostname
    );

    for fields in &table {
        let line = fields
            .iter()
            .zip(&widths)
            .map(|(field, width)| format!("{field:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn cell_json(cell: &VersionCell) -> Value {
    json!({
        "repeat": cell.repeat,
        "version": cell.version,
        "base": cell.base,
        "class": cell.class(),
    })
}

/// Render the report as JSON with every cell's classification spelled out.
pub fn render_json(report: &Report) -> Value {
    let packages: Vec<Value> = report
        .rows
        .iter()
        .map(|row| {
            json!({
                "name": row.name,
                "bootstrap": cell_json(&row.bootstrap),
                "releases": row.releases.iter().map(cell_json).collect::<Vec<_>>(),
                "upstream": row.upstream,
            })
        })
        .collect();

    json!({
        "hostname": report.hostname,
        "time-generated": report.time_generated,
        "columns": report.columns,
        "packages": packages,
    })
}

/// Render the group list, one `name (count)` per line.
pub fn render_groups(groups: &[GroupSummary]) -> String {
    groups
        .iter()
        .map(|g| format!("{} ({})\n", g.name, g.packages))
        .collect()
}
