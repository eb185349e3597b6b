//! # ytrans common
//!
//! Shared error type, logging bootstrap, and test fixtures used across the
//! ytrans workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, YtransError};
pub use logging::{init_logging, LogFormat, LoggingConfig};
