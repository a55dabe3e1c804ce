//! Writing search results as lines

use std::io::Write;

use namegoto_core::{Emitted, MemoryIndex, Never, Search, SearchOutcome, Symbol};
use tracing::info;

use crate::config::CliConfig;
use crate::error::{Error, Result};

/// Line printed for the start-match / middle-match boundary
pub const SEPARATOR_LINE: &str = "--";

/// Run `pattern` against `index`, writing one line per result to `out`.
///
/// Items print their full name, or the short name when none is known. Output stops at
/// `config.limit` items; a write failure stops the search and is returned as `Error::Io`.
pub fn write_results<W: Write>(
    index: &MemoryIndex,
    config: &CliConfig,
    pattern: &str,
    out: &mut W,
) -> Result<SearchOutcome> {
    if config.limit == Some(0) {
        return Ok(SearchOutcome::Stopped { emitted: 0 });
    }

    let mut written = 0;
    let mut failure = None;
    let mut consumer = |emitted: Emitted<Symbol>| {
        let line = match &emitted {
            Emitted::Item(symbol) => symbol.full_name.as_deref().unwrap_or(&symbol.short_name),
            Emitted::Separator => SEPARATOR_LINE,
        };
        if let Err(e) = writeln!(out, "{line}") {
            failure = Some(e);
            return false;
        }
        if emitted.is_separator() {
            return true;
        }
        written += 1;
        config.limit.map_or(true, |limit| written < limit)
    };

    let outcome = Search::new(index, &config.search).run(pattern, &Never, &mut consumer)?;
    if let Some(e) = failure {
        return Err(Error::Io(e));
    }
    out.flush()?;

    info!(pattern, emitted = outcome.emitted(), "search finished");
    Ok(outcome)
}
