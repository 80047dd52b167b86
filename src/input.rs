//! Column parsing for plain-text numeric input

use std::sync::Arc;

use crate::errors::{PlotError, Result};
use crate::plot::Plot;

/// Parse whitespace or comma separated numbers into columns
///
/// Blank lines and lines starting with `#` are skipped. Every data line must
/// have the same number of fields as the first one.
pub fn parse_columns(input: &str) -> Result<Vec<Vec<f64>>> {
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        if columns.is_empty() {
            columns = vec![Vec::new(); fields.len()];
        } else if fields.len() != columns.len() {
            return Err(PlotError::ParseError {
                line: idx + 1,
                message: Arc::new(format!(
                    "expected {} fields, found {}",
                    columns.len(),
                    fields.len()
                )),
            });
        }

        for (column, field) in columns.iter_mut().zip(fields) {
            let value = field.parse::<f64>().map_err(|e| PlotError::ParseError {
                line: idx + 1,
                message: Arc::new(format!("'{field}': {e}")),
            })?;
            column.push(value);
        }
    }

    Ok(columns)
}

/// Add parsed columns to `plot` as series
///
/// A single column is plotted against its indices. Otherwise the first column
/// holds the x values and every further column is one series. `styles[i]`
/// holds the options of series `i`; series without an entry use the defaults.
pub fn add_columns(plot: &mut Plot, columns: &[Vec<f64>], styles: &[String]) -> Result<()> {
    let opts = |i: usize| styles.get(i).map_or("", String::as_str);
    match columns {
        [] => return Err(PlotError::EmptyPlot),
        [ys] => {
            plot.add_y(ys, opts(0))?;
        }
        [xs, series @ ..] => {
            for (i, ys) in series.iter().enumerate() {
                plot.add(xs, ys, opts(i))?;
            }
        }
    }
    Ok(())
}
