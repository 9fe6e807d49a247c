#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tenk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod service;

// Re-export main types from sub-crates
pub use tenk_analytics as analytics;
pub use tenk_data as data;
pub use tenk_output as output;

pub use config::Settings;
pub use error::ServiceError;
pub use service::FinancialsService;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
