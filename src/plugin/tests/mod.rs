//! Plugin System Tests
//!
//! Chain, connector and registry behavior exercised with mock decorators
//! over in-memory models.

pub mod mock_plugins;

#[cfg(test)]
pub mod chain_tests;

#[cfg(test)]
pub mod connector_tests;
