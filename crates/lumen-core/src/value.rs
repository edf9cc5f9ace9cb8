//! Runtime values and number references.
//!
//! [`Value`] is the uniform representation an interpreter uses for any
//! runtime value. Only the variants the allocator needs are modelled here;
//! the number variant aliases a slot in a [`Page`] rather than embedding
//! the `f64`.

use std::fmt;
use std::sync::Arc;

use crate::page::Page;

/// Where a [`NumberRef`]'s page lives.
#[derive(Clone)]
enum Backing {
    /// Arena page, freed once the last reference is dropped.
    Shared(Arc<Page>),
    /// Process-lifetime page. Cloning copies the reference and touches no
    /// counter.
    Canonical(&'static Page),
}

impl Backing {
    fn page(&self) -> &Page {
        match self {
            Self::Shared(page) => page,
            Self::Canonical(page) => page,
        }
    }
}

/// A reference to one number slot inside a [`Page`].
///
/// Cloning never copies the number or allocates; two clones alias the same
/// storage. A reference into an arena page bumps that page's reference
/// count, a reference into a canonical `'static` page is a plain copy.
#[derive(Clone)]
pub struct NumberRef {
    backing: Backing,
    slot: u32,
}

impl NumberRef {
    /// Append `n` to `page` and return a reference to the new slot.
    ///
    /// Returns `None` if the page is full.
    pub fn alloc(page: &Arc<Page>, n: f64) -> Option<Self> {
        let slot = page.push(n)?;
        Some(Self {
            backing: Backing::Shared(Arc::clone(page)),
            slot,
        })
    }

    /// Append `n` to a page that lives for the whole process.
    ///
    /// Returns `None` if the page is full.
    pub fn alloc_canonical(page: &'static Page, n: f64) -> Option<Self> {
        let slot = page.push(n)?;
        Some(Self {
            backing: Backing::Canonical(page),
            slot,
        })
    }

    /// The number this reference points at.
    pub fn get(&self) -> f64 {
        self.backing.page().get(self.slot)
    }

    /// Slot index within the page.
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// Whether this points into a process-lifetime page.
    pub fn is_canonical(&self) -> bool {
        matches!(self.backing, Backing::Canonical(_))
    }

    /// Whether both references point at the same storage slot.
    pub fn aliases(&self, other: &NumberRef) -> bool {
        self.same_page(other) && self.slot == other.slot
    }

    /// Whether both references point into the same page.
    pub fn same_page(&self, other: &NumberRef) -> bool {
        std::ptr::eq(self.backing.page(), other.backing.page())
    }
}

impl fmt::Debug for NumberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberRef")
            .field("page", &std::ptr::from_ref(self.backing.page()))
            .field("slot", &self.slot)
            .field("canonical", &self.is_canonical())
            .field("value", &self.get())
            .finish()
    }
}

/// A dynamically-typed runtime value.
///
/// Cheap to clone: a number clone shares its slot with the original.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A number stored in a page slot.
    Number(NumberRef),
}

impl Value {
    /// Human-readable name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
        }
    }

    /// Whether this is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The numeric content, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        self.as_number_ref().map(NumberRef::get)
    }

    /// The underlying slot reference, if this is a number.
    pub fn as_number_ref(&self) -> Option<&NumberRef> {
        match self {
            Self::Number(r) => Some(r),
            _ => None,
        }
    }

    /// Whether both values are numbers aliasing the same storage slot.
    pub fn aliases(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.aliases(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<NumberRef> for Value {
    fn from(r: NumberRef) -> Self {
        Self::Number(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    #[test]
    fn alloc_reads_back_slot() {
        let page = Arc::new(Page::new(3));
        NumberRef::alloc(&page, 1.0).unwrap();
        NumberRef::alloc(&page, 2.0).unwrap();
        let r = NumberRef::alloc(&page, 3.0).unwrap();
        assert_eq!(r.get(), 3.0);
        assert_eq!(r.slot(), 2);
        assert!(!r.is_canonical());
    }

    #[test]
    fn alloc_on_full_page_returns_none() {
        let page = Arc::new(Page::new(1));
        assert!(NumberRef::alloc(&page, 1.0).is_some());
        assert!(NumberRef::alloc(&page, 2.0).is_none());
    }

    #[test]
    fn clones_alias_the_same_slot() {
        let page = Arc::new(Page::new(1));
        let a = Value::Number(NumberRef::alloc(&page, 7.0).unwrap());
        let b = a.clone();
        assert!(a.aliases(&b));
        assert_eq!(b.as_number(), Some(7.0));
    }

    #[test]
    fn different_slots_do_not_alias() {
        let page = Arc::new(Page::new(2));
        let a = NumberRef::alloc(&page, 7.0).unwrap();
        let b = NumberRef::alloc(&page, 7.0).unwrap();
        assert!(!a.aliases(&b));
        assert!(a.same_page(&b));
    }

    #[test]
    fn same_slot_index_on_different_pages_does_not_alias() {
        let a = NumberRef::alloc(&Arc::new(Page::new(1)), 1.0).unwrap();
        let b = NumberRef::alloc(&Arc::new(Page::new(1)), 1.0).unwrap();
        assert!(!a.aliases(&b));
        assert!(!a.same_page(&b));
    }

    #[test]
    fn value_keeps_page_alive() {
        let page = Arc::new(Page::new(1));
        let weak = Arc::downgrade(&page);
        let v = Value::Number(NumberRef::alloc(&page, 42.0).unwrap());
        drop(page);
        assert!(weak.upgrade().is_some());
        assert_eq!(v.as_number(), Some(42.0));
        drop(v);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn canonical_clones_leave_no_trace_on_the_page() {
        static PAGE: LazyLock<Page> = LazyLock::new(|| Page::new(1));
        let v = Value::Number(NumberRef::alloc_canonical(&PAGE, 9.0).unwrap());
        let clones: Vec<Value> = (0..1000).map(|_| v.clone()).collect();
        for c in &clones {
            assert!(c.aliases(&v));
            assert!(c.as_number_ref().unwrap().is_canonical());
        }
        assert_eq!(PAGE.len(), 1);
        assert_eq!(v.as_number(), Some(9.0));
    }

    #[test]
    fn canonical_and_shared_never_alias() {
        static PAGE: LazyLock<Page> = LazyLock::new(|| Page::new(1));
        let a = NumberRef::alloc_canonical(&PAGE, 1.0).unwrap();
        let b = NumberRef::alloc(&Arc::new(Page::new(1)), 1.0).unwrap();
        assert!(!a.aliases(&b));
    }

    #[test]
    fn non_numbers() {
        assert_eq!(Value::default().type_name(), "nil");
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::Nil.as_number(), None);
        assert!(!Value::Bool(true).is_number());
        assert!(!Value::Nil.aliases(&Value::Nil));
    }

    #[test]
    fn values_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
        assert_send_sync::<NumberRef>();
    }
}
