use crate::model::Dataset;

/// Fallback colours, in legend order.
pub const PALETTE: [&str; 10] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#22c55e", // green
    "#f59e0b", // amber
    "#8b5cf6", // violet
    "#06b6d4", // cyan
    "#ec4899", // pink
    "#64748b", // slate
    "#14b8a6", // teal
    "#f97316", // orange
];

/// Give every uncoloured dataset the palette colour for its position.
///
/// The index is the dataset's position in the slice, not its rank among the
/// uncoloured ones, so an explicit colour never shifts its neighbours.
pub fn assign_colours(datasets: &mut [Dataset]) {
    for (idx, ds) in datasets.iter_mut().enumerate() {
        if ds.color.as_deref().is_none_or(str::is_empty) {
            ds.color = Some(PALETTE[idx % PALETTE.len()].to_string());
        }
    }
}
