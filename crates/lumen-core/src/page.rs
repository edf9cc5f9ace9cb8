//! Fixed-capacity pages of number slots.
//!
//! A [`Page`] is a pre-allocated block of `f64` slots with bump allocation.
//! Arena pages are shared through `Arc<Page>`: the arena that fills a page
//! holds one reference, and every number value minted from one of its slots
//! holds another. The page is freed as a unit when the last one is dropped.
//! Canonical pages are `'static` and never freed.

use std::collections::TryReserveError;
use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// A single fixed-capacity block of number slots with bump allocation.
///
/// Slots hold `f64` bit patterns in `AtomicU64` cells, which makes a page
/// `Send + Sync` and lets the owner keep appending while earlier slots are
/// being read through outstanding values. The backing storage is allocated
/// to full capacity at creation and never moves, so a slot index stays
/// valid for the life of the page.
///
/// Once `len() == capacity()` the page is full and [`Page::push`] returns
/// `None` forever after.
pub struct Page {
    /// Backing storage. Allocated to full capacity at creation.
    slots: Box<[AtomicU64]>,
    /// Bump pointer: number of slots handed out so far.
    len: AtomicU32,
}

impl Page {
    /// Create a new page with room for `capacity` numbers.
    ///
    /// Aborts the process on allocation failure, like `Vec`. Use
    /// [`Page::try_new`] to observe the failure instead.
    pub fn new(capacity: u32) -> Self {
        let slots = (0..capacity).map(|_| AtomicU64::new(0)).collect();
        Self {
            slots,
            len: AtomicU32::new(0),
        }
    }

    /// Create a new page, reporting allocation failure to the caller.
    pub fn try_new(capacity: u32) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity as usize)?;
        slots.extend((0..capacity).map(|_| AtomicU64::new(0)));
        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: AtomicU32::new(0),
        })
    }

    /// Append `n` to the next free slot.
    ///
    /// Returns the slot index, or `None` if the page is full. A slot is
    /// claimed with a single compare-and-swap on the bump pointer, so no
    /// index is ever handed out twice.
    pub fn push(&self, n: f64) -> Option<u32> {
        let capacity = self.capacity();
        let slot = self
            .len
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |len| {
                (len < capacity).then_some(len + 1)
            })
            .ok()?;
        self.slots[slot as usize].store(n.to_bits(), Ordering::Release);
        Some(slot)
    }

    /// Read the number stored in `slot`.
    ///
    /// The value is returned bit-for-bit as written: NaN payloads and the
    /// sign of zero are preserved.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= capacity()`.
    pub fn get(&self, slot: u32) -> f64 {
        debug_assert!(slot < self.len(), "read of unwritten slot {slot}");
        f64::from_bits(self.slots[slot as usize].load(Ordering::Acquire))
    }

    /// Number of slots handed out so far.
    pub fn len(&self) -> u32 {
        self.len.load(Ordering::Acquire)
    }

    /// Whether no slot has been handed out yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total capacity in slots.
    pub fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Remaining free slots.
    pub fn remaining(&self) -> u32 {
        self.capacity() - self.len()
    }

    /// Whether every slot has been handed out.
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
