use serde::{Deserialize, Serialize};

/// Revenue total for one month, in whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}

impl Revenue {
    pub fn new(month: impl Into<String>, revenue: i64) -> Self {
        Self {
            month: month.into(),
            revenue,
        }
    }
}

/// Ceiling and tick labels for the revenue chart's vertical axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub top_label: u64,
    pub y_axis_labels: Vec<String>,
}
