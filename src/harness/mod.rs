//! End-to-end test harness for the name service.
//!
//! A session starts from a [`ChainConfig`](config::ChainConfig) and a set of
//! [`TestUser`](context::TestUser)s with signing connections. It either
//! deploys the contracts ([`deploy`](deploy::deploy)) or loads the registry of
//! an earlier deployment, and then drives scenarios through the
//! [`TestContext`](context::TestContext).
pub mod checksum;
pub mod config;
pub mod context;
pub mod datetime;
pub mod deploy;
pub mod registry;

pub use context::{HarnessError, TestContext, TestUser};
pub use registry::{ContractRegistry, RegistryError, RegistryState};
