//! Name sources and result consumers
//!
//! The engine is a pure computation over data supplied by collaborators:
//!
//! - **`NameSource`**: short names, candidates per short name, full names
//! - **`Consumer`**: receives the ranked stream and may stop it at any time
//! - **`MemoryIndex`**: in-memory `NameSource` for tests and small catalogs
//!
//! # Example
//!
//! ```rust
//! use namegoto_core::cancel::Never;
//! use namegoto_core::source::{MemoryIndex, NameSource, Symbol};
//!
//! let index = MemoryIndex::with_symbols(vec![Symbol::new("Reader", "io/Reader")]);
//! let names = index.all_short_names(false).unwrap();
//! assert_eq!(names, vec!["Reader"]);
//!
//! let candidates = index
//!     .candidates_for_short_name("Reader", false, "Rea", &Never)
//!     .unwrap();
//! assert_eq!(candidates.len(), 1);
//! ```

mod memory;
mod traits;

pub use memory::{MemoryIndex, Symbol};
pub use traits::{Collect, Consumer, Emitted, NameSource};
