/// Content platform document ids are opaque strings (e.g. `"drafts.product-bh1001"`).
pub type DocumentId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
