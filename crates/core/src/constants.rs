//! Shared constants for the admin pages

/// Expiry cell text the admin page shows for tests without an end date
pub const NO_EXPIRY_MARKER: &str = "Без окончания";

/// Marker the presentation layer attaches to rows whose test has expired
pub const EXPIRED_ROW_MARKER: &str = "expired-test";

pub const ASCENDING_GLYPH: &str = "▲";
pub const DESCENDING_GLYPH: &str = "▼";
