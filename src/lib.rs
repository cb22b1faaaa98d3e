// Module declarations
pub mod chart;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod formatting;
pub mod loader;
pub mod pagination;
pub mod render;
pub mod types;

// Re-export commonly used items
pub use chart::generate_y_axis;
pub use error::{DashError, Result};
pub use formatting::{format_currency, format_date_to_local};
pub use pagination::generate_pagination;
pub use types::{Amount, Locale, PageItem, PagePosition, Revenue, YAxis};
