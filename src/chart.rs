use crate::constants::Y_AXIS_STEP;
use crate::error::{DashError, Result};
use crate::types::{Revenue, YAxis};

/// Build the Y axis for the revenue chart.
///
/// The highest revenue is rounded up to the next multiple of 1000 and labelled
/// in thousands down to zero: a maximum of 2500 gives "$3K", "$2K", "$1K", "$0K".
/// Negative maxima are treated as zero.
pub fn generate_y_axis(revenue: &[Revenue]) -> Result<YAxis> {
    let max_revenue = revenue
        .iter()
        .map(|r| r.revenue)
        .max()
        .ok_or(DashError::EmptyRevenue)?;

    let ticks = max_revenue.max(0).unsigned_abs().div_ceil(Y_AXIS_STEP);
    let top_label = ticks * Y_AXIS_STEP;

    let y_axis_labels = (0..=ticks).rev().map(|k| format!("${}K", k)).collect();

    Ok(YAxis {
        top_label,
        y_axis_labels,
    })
}
