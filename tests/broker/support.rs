#[path = "support/fakes.rs"]
mod fakes;
#[path = "support/harness.rs"]
mod harness;

pub use fakes::{FakeDocumentStoreConnector, FakeProvisioningClient};
pub use fixtures::*;
pub use harness::{BrokerTestHarness, create_harness, create_harness_with_settings};
