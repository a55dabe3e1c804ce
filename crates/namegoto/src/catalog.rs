//! Symbol catalogs
//!
//! A catalog is a JSON array whose entries are either full symbol objects or bare
//! qualified names:
//!
//! ```json
//! [
//!   "src/io/Reader.java",
//!   { "short_name": "Writer", "full_name": "src/io/Writer.java", "in_project": false }
//! ]
//! ```

use std::path::Path;

use namegoto_core::{MemoryIndex, Symbol};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    FullName(String),
    Symbol(Symbol),
}

/// Parse a catalog; bare names take their short name from the last segment
pub fn parse<S: AsRef<str>>(json: &str, separators: &[S]) -> Result<MemoryIndex> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    Ok(MemoryIndex::with_symbols(entries.into_iter().map(
        |entry| match entry {
            Entry::FullName(full_name) => Symbol::from_full_name(&full_name, separators),
            Entry::Symbol(symbol) => symbol,
        },
    )))
}

/// Read and parse a catalog file
pub fn load<S: AsRef<str>>(path: &Path, separators: &[S]) -> Result<MemoryIndex> {
    let json = std::fs::read_to_string(path)?;
    let index = parse(&json, separators)?;
    debug!(path = %path.display(), symbols = index.len(), "loaded catalog");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use namegoto_core::Representation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_mixed_entries() {
        let index = parse(
            r#"[
                "src/io/Reader.java",
                {"short_name": "Writer", "full_name": "src/io/Writer.java", "in_project": false},
                {"short_name": "Writer", "full_name": "lib/Writer.class", "representation": "compiled_only"}
            ]"#,
            &["/"],
        )
        .unwrap();

        let symbols = index.symbols();
        assert_eq!(symbols.len(), 3);
        assert_eq!(symbols[0].short_name, "Reader.java");
        assert!(symbols[0].in_project);
        assert!(!symbols[1].in_project);
        assert_eq!(symbols[2].representation, Representation::CompiledOnly);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse(r#"{"short_name": "Foo"}"#, &["/"]),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/namegoto/catalog.json"), &["/"]);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
