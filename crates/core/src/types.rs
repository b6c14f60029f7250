/// Track identifiers are opaque strings (UUIDv7 text for new records).
pub type TrackId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
