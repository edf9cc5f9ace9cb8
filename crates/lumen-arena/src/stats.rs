//! Allocation counters for a single arena.
//!
//! [`ArenaStats`] is a point-in-time copy taken by
//! [`Arena::stats`](crate::Arena::stats). The arena does no logging; callers
//! that want telemetry poll this instead.

/// Counters for one [`Arena`](crate::Arena).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Pages allocated over the arena's lifetime, including the first.
    pub pages_allocated: u64,
    /// Numbers written into arena slots over the arena's lifetime.
    /// Preload hits never reach the arena and are not counted.
    pub slots_allocated: u64,
    /// Slots used in the current page.
    pub current_page_len: usize,
    /// Slots per page.
    pub page_capacity: usize,
}
