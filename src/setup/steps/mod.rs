//! Setup steps
//!
//! Individual questions asked before an export runs.

pub mod credentials;
pub mod filters;
pub mod output;

pub use credentials::CredentialsStep;
pub use filters::{FilterStep, ModeStep};
pub use output::OutputStep;
