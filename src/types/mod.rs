pub mod amount;
pub mod locale;
pub mod page;
pub mod revenue;
pub mod snapshot;

pub use amount::Amount;
pub use locale::Locale;
pub use page::{PageItem, PagePosition};
pub use revenue::{Revenue, YAxis};
pub use snapshot::{DashboardSnapshot, Invoice, InvoiceStatus};
