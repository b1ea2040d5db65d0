//! Test utilities for Lumina library tests.
//!
//! This module provides mock implementations and test helpers.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockInsightDriver, MockResponse};
