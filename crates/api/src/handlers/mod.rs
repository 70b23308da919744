pub mod documents;
pub mod functions;
pub mod sync_logs;
