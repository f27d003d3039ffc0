use crate::{
    error::{ChartError, Result},
    infer::positional_labels,
    model::{Dataset, LabeledValue},
    parse::parse_number,
};

/// Role of a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Label,
    Series,
    /// Non-numeric, but another column already supplies the labels.
    Ignored,
}

/// Classify every header column. A column is a series when each of its
/// non-blank cells is a number; the first other column holds the labels.
pub fn classify_columns(header: &[String], rows: &[Vec<String>]) -> Vec<ColumnRole> {
    let mut label_seen = false;
    (0..header.len())
        .map(|col| {
            let numeric = rows
                .iter()
                .filter_map(|row| row.get(col))
                .filter(|cell| !cell.trim().is_empty())
                .all(|cell| parse_number(cell).is_some());
            if numeric {
                ColumnRole::Series
            } else if !label_seen {
                label_seen = true;
                ColumnRole::Label
            } else {
                ColumnRole::Ignored
            }
        })
        .collect()
}

/// Build one dataset per numeric column of a parsed CSV table.
pub fn infer_table(header: &[String], rows: &[Vec<String>]) -> Result<Vec<Dataset>> {
    let roles = classify_columns(header, rows);
    let label_col = roles.iter().position(|role| *role == ColumnRole::Label);
    let series_cols: Vec<usize> = roles
        .iter()
        .enumerate()
        .filter(|(_, role)| **role == ColumnRole::Series)
        .map(|(col, _)| col)
        .collect();

    if series_cols.is_empty() {
        return Err(ChartError::NoNumericColumn);
    }

    tracing::debug!(
        label_column = ?label_col.map(|col| &header[col]),
        series = series_cols.len(),
        rows = rows.len(),
        "Inferred CSV columns"
    );

    let labels = match label_col {
        Some(col) => rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                row.get(col)
                    .map(|cell| cell.trim().to_string())
                    .unwrap_or_else(|| (idx + 1).to_string())
            })
            .collect(),
        None => positional_labels(rows.len()),
    };

    let datasets = series_cols
        .into_iter()
        .map(|col| {
            let values = rows
                .iter()
                .zip(&labels)
                .map(|(row, label)| {
                    let value = row.get(col).and_then(|cell| parse_number(cell)).unwrap_or(0.0);
                    LabeledValue::new(label.clone(), value)
                })
                .collect();
            Dataset::new(header[col].clone(), values)
        })
        .collect();

    Ok(datasets)
}
