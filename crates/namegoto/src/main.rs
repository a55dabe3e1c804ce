//! namegoto - ranked "go to symbol" search over a JSON catalog
//!
//! ## Usage
//!
//! ```bash
//! namegoto symbols.json foo/index
//! ```
//!
//! Prints one result per line, best first. A `--` line separates names matching at
//! their start from names matching in the middle.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `NAMEGOTO_SEPARATORS`: whitespace-separated separators (default: `/ .`)
//! - `NAMEGOTO_SEARCH_ANYWHERE`, `NAMEGOTO_INCLUDE_NON_PROJECT`, `NAMEGOTO_ALLOW_EMPTY`
//! - `NAMEGOTO_CASE`: `none`, `smart` or `exact` (default: none)
//! - `NAMEGOTO_MARKUP`: query prefix to strip, e.g. `@`
//! - `NAMEGOTO_LIMIT`: maximum number of results
//! - `RUST_LOG`: Logging level (default: info, written to stderr)

use std::path::Path;

use namegoto::config::CliConfig;
use namegoto::{catalog, output, Error, Result};
use tracing::debug;

fn main() -> Result<()> {
    namegoto::tracing::init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(pattern)) = (args.next(), args.next()) else {
        return Err(Error::Config(
            "usage: namegoto <catalog.json> <pattern>".to_string(),
        ));
    };

    let config = CliConfig::from_env()?;
    debug!(?config, "configuration");

    let index = catalog::load(Path::new(&path), &config.search.separators)?;
    let stdout = std::io::stdout();
    output::write_results(&index, &config, &pattern, &mut stdout.lock())?;
    Ok(())
}
