//! Data models

pub mod event;
pub mod salesforce;

pub use event::{EventOut, EventRecord, RelatedName};
pub use salesforce::{AccessToken, QueryPage};
