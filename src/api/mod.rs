//! jpdb.io API access
//!
//! - `transport`: authenticated JSON POST with retries
//! - `wire`: positional response rows to named records
//! - `client`: the endpoints the exporter calls

pub mod client;
pub mod transport;
pub mod wire;

pub use client::JpdbClient;
pub use transport::{HttpTransport, RetryPolicy, Transport};
pub use wire::VocabularyDetails;
