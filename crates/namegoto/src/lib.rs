//! # namegoto
//!
//! Command line front end for the namegoto search engine:
//! - **catalog**: JSON symbol catalogs loaded into an in-memory index
//! - **config**: `NAMEGOTO_*` environment configuration
//! - **output**: line-oriented result printing with an optional limit
//! - **error**: error type covering IO, parsing, configuration and search failures
//! - **tracing**: logging setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use namegoto::{catalog, config::CliConfig, output};
//!
//! let config = CliConfig::from_env()?;
//! let index = catalog::load(path, &config.search.separators)?;
//! output::write_results(&index, &config, "foo/index", &mut std::io::stdout())?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod output;
pub mod tracing;

pub use error::{Error, Result};
