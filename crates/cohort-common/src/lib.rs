//! Cohort Tools Common Library
//!
//! Shared infrastructure for the cohort-tools workspace. Currently this
//! holds the logging configuration and initialization used by the server
//! binary.
//!
//! # Example
//!
//! ```no_run
//! use cohort_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod logging;
