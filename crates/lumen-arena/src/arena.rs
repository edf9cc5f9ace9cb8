//! Bump-allocated number arena.
//!
//! [`Arena`] writes each number into the next free slot of its current
//! [`Page`] and returns a [`Value`] aliasing that slot. When the page
//! fills up, a fresh page of the same capacity replaces it. The full page
//! is not kept by the arena: it stays alive only through the values that
//! already point into it.

use std::collections::TryReserveError;
use std::sync::Arc;

use lumen_core::{NumberRef, Page, Value};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::stats::ArenaStats;

/// Page-based bump allocator for number values.
///
/// One arena belongs to one execution context. [`Arena::allocate`] takes
/// `&mut self`, so a single arena can never be driven from two threads at
/// once; contexts that box numbers concurrently each own their own arena.
/// The arena itself is `Send` and can be moved into the thread that will
/// own it.
#[derive(Debug)]
pub struct Arena {
    config: ArenaConfig,
    /// Page currently receiving writes.
    current: Arc<Page>,
    pages_allocated: u64,
    slots_allocated: u64,
    /// Makes the next page reservation fail.
    #[cfg(test)]
    refuse_pages: bool,
}

impl Arena {
    /// Create an arena whose pages hold `page_capacity` numbers each.
    ///
    /// # Panics
    ///
    /// Panics if `page_capacity` is zero or exceeds `u32::MAX`. Use
    /// [`Arena::with_config`] to get an error instead.
    pub fn new(page_capacity: usize) -> Self {
        let config = ArenaConfig::new(page_capacity);
        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        let first = Page::new(page_capacity as u32);
        Self::from_first_page(config, first)
    }

    /// Create an arena from a validated config.
    ///
    /// Returns [`ArenaError::InvalidConfig`] if the config is rejected, or
    /// [`ArenaError::ResourceExhausted`] if the first page cannot be
    /// allocated.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let first = Page::try_new(config.page_capacity as u32).map_err(|_| {
            ArenaError::ResourceExhausted {
                requested_bytes: config.page_bytes(),
            }
        })?;
        Ok(Self::from_first_page(config, first))
    }

    fn from_first_page(config: ArenaConfig, first: Page) -> Self {
        Self {
            config,
            current: Arc::new(first),
            pages_allocated: 1,
            slots_allocated: 0,
            #[cfg(test)]
            refuse_pages: false,
        }
    }

    /// Write `n` into a fresh slot and return a value aliasing it.
    ///
    /// The returned value is independent of every later call: subsequent
    /// allocations use other slots and never touch this one. Every `f64`
    /// is accepted, including NaN and the infinities, and is stored
    /// bit-for-bit.
    ///
    /// Returns [`ArenaError::ResourceExhausted`] if the current page is
    /// full and a new one cannot be allocated.
    pub fn allocate(&mut self, n: f64) -> Result<Value, ArenaError> {
        loop {
            if let Some(number) = NumberRef::alloc(&self.current, n) {
                self.slots_allocated += 1;
                return Ok(Value::Number(number));
            }
            self.rollover()?;
        }
    }

    /// Box `n`, preferring the shared preload table over a fresh slot.
    ///
    /// See [`box_number`](crate::box_number).
    pub fn box_number(&mut self, n: f64) -> Result<Value, ArenaError> {
        crate::boxing::box_number(self, n)
    }

    /// Replace the full current page with a new one. The old page is
    /// released here and lives on only through values pointing into it.
    fn rollover(&mut self) -> Result<(), ArenaError> {
        let page = self.reserve_page().map_err(|_| ArenaError::ResourceExhausted {
            requested_bytes: self.config.page_bytes(),
        })?;
        self.current = Arc::new(page);
        self.pages_allocated += 1;
        Ok(())
    }

    fn reserve_page(&self) -> Result<Page, TryReserveError> {
        #[cfg(test)]
        if self.refuse_pages {
            // Exceeds isize::MAX bytes, so the reservation always fails.
            Vec::<u64>::new().try_reserve_exact(usize::MAX)?;
        }
        Page::try_new(self.current.capacity())
    }

    /// Slots per page.
    pub fn page_capacity(&self) -> usize {
        self.config.page_capacity
    }

    /// Slots used in the current page.
    pub fn current_page_len(&self) -> usize {
        self.current.len() as usize
    }

    /// Free slots left in the current page.
    pub fn current_page_remaining(&self) -> usize {
        self.current.remaining() as usize
    }

    /// Snapshot of the arena's counters.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            pages_allocated: self.pages_allocated,
            slots_allocated: self.slots_allocated,
            current_page_len: self.current_page_len(),
            page_capacity: self.page_capacity(),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ArenaConfig::DEFAULT_PAGE_CAPACITY)
    }
}
