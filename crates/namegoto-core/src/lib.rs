//! namegoto Core Engine
//!
//! Incremental fuzzy name matching and ranking for "go to symbol" style searches over
//! a large namespace of qualified names.
//!
//! # Pipeline
//!
//! - `matcher` - camel-hump pattern matching of short names
//! - `tokenize` - splitting qualified names on separators
//! - `qualifier` - splitting a query into name and qualifier parts
//! - `score` - match ordering and qualifier alignment scoring
//! - `proximity` - ordering of candidates sharing a short name
//! - `stream` - the search driver streaming ranked results to a consumer
//!
//! # Example
//!
//! ```rust
//! use namegoto_core::cancel::Never;
//! use namegoto_core::source::{Collect, Emitted, MemoryIndex, Symbol};
//! use namegoto_core::{Search, SearchConfig};
//!
//! let index = MemoryIndex::with_symbols(vec![
//!     Symbol::new("index.html", "foo/bar/index.html"),
//!     Symbol::new("index.html", "bar/foo/index.html"),
//! ]);
//! let config = SearchConfig::new().separators(["/"]);
//!
//! let mut results = Collect::new();
//! Search::new(&index, &config)
//!     .run("foo/index", &Never, &mut results)
//!     .unwrap();
//!
//! let first = results.items[0].item().unwrap();
//! assert_eq!(first.full_name.as_deref(), Some("bar/foo/index.html"));
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod matcher;
pub mod proximity;
pub mod qualifier;
pub mod score;
pub mod source;
pub mod stream;
pub mod tokenize;

// Re-export main types at crate root
pub use cancel::{Cancellation, Never};
pub use config::SearchConfig;
pub use error::{SearchError, SearchResult};
pub use matcher::{CaseSensitivity, Matcher, NameFilter};
pub use proximity::{Proximity, Representation};
pub use score::{MatchResult, ScoredCandidate};
pub use source::{Collect, Consumer, Emitted, MemoryIndex, NameSource, Symbol};
pub use stream::{filter_names, Search, SearchOutcome};
