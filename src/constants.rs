/// Distance between two Y-axis ticks, in whole currency units
pub const Y_AXIS_STEP: u64 = 1000;

/// Up to this many pages every page number is shown
pub const MAX_PAGES_WITHOUT_ELLIPSIS: u32 = 7;

/// Marker standing in for a run of omitted page numbers
pub const ELLIPSIS: &str = "...";

/// Locale used when a caller does not pick one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Snapshot location under the home directory when no path is given
pub const DEFAULT_SNAPSHOT_PATH: &str = ".dashfmt/snapshot.json";
