//! Process-wide canonical values for small integers.
//!
//! [`PreloadTable`] holds one ready-made [`Value`] for every integer in
//! `0..256` and `-128..=-1`. It is built on first use, never mutated
//! afterwards, and shared by every thread and every arena. Boxing one of
//! these integers hands out a clone of the canonical value, so all such
//! values alias the same slot.

use std::sync::LazyLock;

use lumen_core::{NumberRef, Page, Value};

/// Number of non-negative integers with a canonical value: `0..256`.
pub const PRELOAD_LIMIT: usize = 256;

/// Number of negative integers with a canonical value: `-128..=-1`.
pub const PRELOAD_NEGATIVE_LIMIT: usize = 128;

static NON_NEGATIVE_PAGE: LazyLock<Page> = LazyLock::new(|| Page::new(PRELOAD_LIMIT as u32));
static NEGATIVE_PAGE: LazyLock<Page> =
    LazyLock::new(|| Page::new(PRELOAD_NEGATIVE_LIMIT as u32));

static GLOBAL: LazyLock<PreloadTable> = LazyLock::new(PreloadTable::build);

/// Canonical shared values for small integers.
///
/// Each half of the table aliases the slots of its own process-lifetime
/// [`Page`]. Index `i` of the non-negative half holds `i`; index `i` of the
/// negative half holds `-(i + 1)`. Cloning an entry copies a `'static`
/// reference, so a hit writes to no shared state.
pub struct PreloadTable {
    non_negative: Box<[Value]>,
    negative: Box<[Value]>,
}

impl PreloadTable {
    /// The process-wide table, built on first access.
    pub fn global() -> &'static PreloadTable {
        &GLOBAL
    }

    /// Runs once, inside `GLOBAL`'s initializer, so each page is filled
    /// exactly once.
    fn build() -> Self {
        Self {
            non_negative: Self::fill(&NON_NEGATIVE_PAGE, (0..PRELOAD_LIMIT).map(|i| i as f64)),
            negative: Self::fill(
                &NEGATIVE_PAGE,
                (0..PRELOAD_NEGATIVE_LIMIT).map(|i| -((i + 1) as f64)),
            ),
        }
    }

    fn fill(page: &'static Page, numbers: impl Iterator<Item = f64>) -> Box<[Value]> {
        let values: Box<[Value]> = numbers
            .filter_map(|n| NumberRef::alloc_canonical(page, n))
            .map(Value::Number)
            .collect();
        debug_assert!(page.is_full());
        values
    }

    /// Canonical value for `n`, or `None` if `n` has no preloaded entry.
    ///
    /// Hits only for integral `n` in `0..256` or `-128..=-1`. Fractions,
    /// NaN, infinities and `-0.0` always miss; `-0.0` misses so that its
    /// sign survives boxing.
    pub fn lookup(&self, n: f64) -> Option<Value> {
        self.get(n).cloned()
    }

    /// Borrowing form of [`PreloadTable::lookup`].
    pub fn get(&self, n: f64) -> Option<&Value> {
        // NaN and the infinities have a NaN fractional part.
        if n.fract() != 0.0 {
            return None;
        }
        if n.is_sign_positive() && n < PRELOAD_LIMIT as f64 {
            return self.non_negative.get(n as usize);
        }
        let magnitude = -n;
        if (1.0..=PRELOAD_NEGATIVE_LIMIT as f64).contains(&magnitude) {
            return self.negative.get(magnitude as usize - 1);
        }
        None
    }

    /// Canonical values for `0..256`, in order.
    pub fn non_negative(&self) -> &[Value] {
        &self.non_negative
    }

    /// Canonical values for `-1, -2, ..., -128`, in order.
    pub fn negative(&self) -> &[Value] {
        &self.negative
    }
}

/// Look `n` up in the process-wide [`PreloadTable`].
pub fn lookup(n: f64) -> Option<Value> {
    PreloadTable::global().lookup(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        let table = PreloadTable::global();
        assert_eq!(table.non_negative().len(), PRELOAD_LIMIT);
        assert_eq!(table.negative().len(), PRELOAD_NEGATIVE_LIMIT);
    }

    #[test]
    fn non_negative_entries_hold_their_index() {
        for (i, v) in PreloadTable::global().non_negative().iter().enumerate() {
            assert_eq!(v.as_number(), Some(i as f64));
        }
    }

    #[test]
    fn negative_entries_hold_minus_index_plus_one() {
        for (i, v) in PreloadTable::global().negative().iter().enumerate() {
            assert_eq!(v.as_number(), Some(-((i + 1) as f64)));
        }
    }

    #[test]
    fn boundaries_hit() {
        for n in [0.0, 1.0, 255.0, -1.0, -128.0] {
            let v = lookup(n).unwrap();
            assert_eq!(v.as_number(), Some(n));
        }
    }

    #[test]
    fn just_outside_boundaries_miss() {
        for n in [256.0, -129.0, 1000.0, -1000.0] {
            assert!(lookup(n).is_none(), "{n} should miss");
        }
    }

    #[test]
    fn fractions_miss() {
        for n in [0.5, 3.5, 0.1, 254.999, -0.5, -127.25] {
            assert!(lookup(n).is_none(), "{n} should miss");
        }
    }

    #[test]
    fn non_finite_and_negative_zero_miss() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0] {
            assert!(lookup(n).is_none(), "{n} should miss");
        }
    }

    #[test]
    fn repeated_lookups_alias() {
        let a = lookup(42.0).unwrap();
        let b = lookup(42.0).unwrap();
        assert!(a.aliases(&b));
        let c = lookup(-7.0).unwrap();
        let d = lookup(-7.0).unwrap();
        assert!(c.aliases(&d));
        assert!(!a.aliases(&c));
    }

    #[test]
    fn hits_are_canonical_and_leave_the_table_unchanged() {
        let table = PreloadTable::global();
        let hits: Vec<Value> = (0..1000).map(|_| table.lookup(77.0).unwrap()).collect();
        for v in &hits {
            let r = v.as_number_ref().unwrap();
            assert!(r.is_canonical());
            assert!(v.aliases(&table.non_negative()[77]));
        }
        assert_eq!(NON_NEGATIVE_PAGE.len() as usize, PRELOAD_LIMIT);
        assert_eq!(NEGATIVE_PAGE.len() as usize, PRELOAD_NEGATIVE_LIMIT);
        assert!(table.negative().iter().all(|v| v.as_number_ref().unwrap().is_canonical()));
    }

    #[test]
    fn halves_live_on_separate_pages() {
        let table = PreloadTable::global();
        let pos = table.non_negative()[1].as_number_ref().unwrap();
        let neg = table.negative()[0].as_number_ref().unwrap();
        assert!(!pos.same_page(neg));
    }

    #[test]
    fn concurrent_readers_see_the_same_canonical_values() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| lookup(200.0).unwrap()))
            .collect();
        let values: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for v in &values {
            assert!(v.aliases(&values[0]));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn integers_in_range_hit_with_matching_content(i in -128i64..256) {
                let v = lookup(i as f64).unwrap();
                prop_assert_eq!(v.as_number(), Some(i as f64));
            }

            #[test]
            fn integers_out_of_range_miss(
                i in prop_oneof![i64::MIN / 2..-128, 256i64..i64::MAX / 2],
            ) {
                prop_assert!(lookup(i as f64).is_none());
            }

            #[test]
            fn non_integers_miss(n in -200.0f64..300.0) {
                prop_assume!(n.fract() != 0.0);
                prop_assert!(lookup(n).is_none());
            }
        }
    }
}
