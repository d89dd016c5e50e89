// Namespace related constants
pub const NS0_INDEX: u16 = 0;

/// Namespace index assigned to the application namespace.
///
/// Index 0 is reserved for the standard namespace; the first namespace a
/// server registers for its own nodes always lands at index 1.
pub const APPLICATION_NAMESPACE_INDEX: u16 = 1;

pub const NS0_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

// Well-known namespace 0 node identifiers
pub const NS0_ID_ORGANIZES: u32 = 35;
pub const NS0_ID_HAS_COMPONENT: u32 = 47;
pub const NS0_ID_BASE_OBJECT_TYPE: u32 = 58;
pub const NS0_ID_FOLDER_TYPE: u32 = 61;
pub const NS0_ID_OBJECTS_FOLDER: u32 = 85;

/// Locale used for every localized text this crate family produces unless
/// configured otherwise.
pub const DEFAULT_LOCALE: &str = "en-US";

// DateTime constants

/// Number of 100 ns ticks in one second.
pub const DATE_TIME_TICKS_PER_SECOND: i64 = 10_000_000;

/// Seconds between 1601-01-01T00:00:00Z (the protocol epoch) and the UNIX
/// epoch.
pub const DATE_TIME_UNIX_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;
