use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::types::ScoreRow;

const HEADERS: [&str; 11] = [
    "Hero",
    "Str",
    "Dex",
    "Con",
    "Gra",
    "Stats",
    "Affinities",
    "Unique",
    "Abilities",
    "Total",
    "Dots",
];

/// Render score rows as a right-aligned table with two-space gutters.
///
/// All computed fields are shown; the net-dot tie-breaker is internal and
/// never rendered.
pub fn render_table(rows: &[ScoreRow]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, HEADERS.iter().map(|h| h.to_string()));
    for row in cells {
        push_row(&mut out, &widths, row.into_iter());
    }
    out
}

fn row_cells(row: &ScoreRow) -> Vec<String> {
    vec![
        row.hero.clone(),
        row.stats[0].to_string(),
        row.stats[1].to_string(),
        row.stats[2].to_string(),
        row.stats[3].to_string(),
        row.stats_total.to_string(),
        row.affinities.to_string(),
        row.unique.to_string(),
        format!("{:.1}", row.abilities),
        format!("{:.1}", row.total),
        row.dots.clone(),
    ]
}

fn push_row(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    for (i, (width, cell)) in widths.iter().zip(cells).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
        out.push_str(&cell);
    }
    out.push('\n');
}

/// Write the score rows as a pretty-printed JSON report.
pub fn write_json_report(rows: &[ScoreRow], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, rows)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    debug!("Wrote {} score rows to {}", rows.len(), path.display());
    Ok(())
}
