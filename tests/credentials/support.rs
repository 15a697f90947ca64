#[path = "support/fixtures.rs"]
mod fixtures;

pub use fakes::RecordingDocumentStoreConnector;
pub use fixtures::*;
