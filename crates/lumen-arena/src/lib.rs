//! Allocation-free number boxing for Lumen runtime values.
//!
//! Turning an `f64` into a [`Value`](lumen_core::Value) goes through two
//! layers:
//!
//! ```text
//! box_number(arena, n)
//! ├── PreloadTable::lookup(n)     shared canonical values for -128..=255
//! └── Arena::allocate(n)          bump slot in the current Page
//!     └── Arc<Page> (capacity = ArenaConfig::page_capacity)
//! ```
//!
//! # Ownership
//!
//! - **PreloadTable:** built once per process, immutable, read from any
//!   thread.
//! - **Arena:** owned by one execution context; `allocate` takes
//!   `&mut self`. Contexts that box concurrently each own an arena.
//! - **Pages:** reference counted. A full page is dropped by the arena and
//!   lives on only as long as some value still points into it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod boxing;
pub mod config;
pub mod error;
pub mod preload;
pub mod stats;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use boxing::box_number;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use preload::PreloadTable;
pub use stats::ArenaStats;
