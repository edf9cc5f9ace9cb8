//! Lumen: allocation-free boxing of numbers into interpreter runtime values.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Lumen sub-crates. For most users, adding `lumen` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lumen::prelude::*;
//!
//! // One arena per interpreter instance.
//! let mut arena = Arena::new(ArenaConfig::DEFAULT_PAGE_CAPACITY);
//!
//! // Small integers share one canonical value.
//! let a = box_number(&mut arena, 5.0).unwrap();
//! let b = box_number(&mut arena, 5.0).unwrap();
//! assert!(a.aliases(&b));
//!
//! // Everything else gets its own slot in the arena's current page.
//! let x = box_number(&mut arena, 2.5).unwrap();
//! let y = box_number(&mut arena, 2.5).unwrap();
//! assert!(!x.aliases(&y));
//! assert_eq!(x.as_number(), Some(2.5));
//! assert_eq!(arena.stats().slots_allocated, 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `lumen-arena` | Preload table, page arena, boxing entry point |
//! | [`types`] | `lumen-core` | `Value`, `NumberRef`, `Page` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Preload table, page arena and the boxing entry point (`lumen-arena`).
pub use lumen_arena as arena;

/// Runtime value types and page storage (`lumen-core`).
pub use lumen_core as types;

/// Common imports for typical Lumen usage.
///
/// ```rust
/// use lumen::prelude::*;
/// ```
pub mod prelude {
    // Boxing
    pub use lumen_arena::{box_number, Arena, ArenaConfig, ArenaStats, PreloadTable};

    // Errors
    pub use lumen_arena::ArenaError;

    // Values
    pub use lumen_core::{NumberRef, Value};
}
