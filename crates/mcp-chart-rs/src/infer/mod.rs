//! Column and field role inference.
//!
//! Both variants scan in declared order: the first non-numeric column (or the
//! first string field) becomes the label axis and every numeric one becomes a
//! series. Reordering the input therefore changes the chart.

pub mod records;
pub mod table;

pub use records::infer_records;
pub use table::infer_table;

/// 1-based row positions, used when no label column exists.
fn positional_labels(rows: usize) -> Vec<String> {
    (1..=rows).map(|n| n.to_string()).collect()
}
