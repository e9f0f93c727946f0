//! Test helpers module
//!
//! This module provides utilities and helpers for testing the event feed:
//! a mock Salesforce server and in-process HTTP request helpers.

pub mod salesforce_mock;
pub mod router;

pub use salesforce_mock::*;
pub use router::*;
