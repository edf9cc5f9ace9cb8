//! Core value types for the Lumen number boxing allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! runtime [`Value`] that an interpreter passes around, and the [`Page`]
//! storage that number values alias into:
//!
//! ```text
//! Value::Number(NumberRef) ──► Arc<Page> ──► [AtomicU64; capacity]
//!                                  ▲
//! Value::Number(NumberRef) ────────┘  (same page, different slot)
//!
//! Value::Number(NumberRef) ──► &'static Page   (canonical small integers)
//! ```
//!
//! A number value never embeds its `f64`. It holds a handle to the page
//! plus a slot index, so minting a value costs a reference-count bump
//! instead of a heap allocation. An arena page is freed as a unit once the
//! last value pointing into it is dropped; canonical pages live for the
//! whole process and are referenced without any counting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod page;
pub mod value;

pub use page::Page;
pub use value::{NumberRef, Value};
