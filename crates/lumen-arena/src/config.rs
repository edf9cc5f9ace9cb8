//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a number [`Arena`](crate::Arena).
///
/// Controls page sizing. Validated at construction; immutable after
/// creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of slots in each page.
    ///
    /// Larger pages amortize page allocation over more values but keep
    /// more memory alive, since a page is only freed once every value
    /// minted from it is gone. Must be in `1..=u32::MAX`.
    pub page_capacity: usize,
}

impl ArenaConfig {
    /// Default page capacity: 1024 slots (8KB).
    pub const DEFAULT_PAGE_CAPACITY: usize = 1024;

    /// Create a config with the given page capacity.
    pub fn new(page_capacity: usize) -> Self {
        Self { page_capacity }
    }

    /// Check the config for values the arena cannot honour.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.page_capacity == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "page_capacity must be > 0".into(),
            });
        }
        if u32::try_from(self.page_capacity).is_err() {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "page_capacity {} exceeds the maximum of {}",
                    self.page_capacity,
                    u32::MAX
                ),
            });
        }
        Ok(())
    }

    /// Size of a single page in bytes.
    pub fn page_bytes(&self) -> usize {
        self.page_capacity * std::mem::size_of::<f64>()
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_CAPACITY)
    }
}
