//! Per-kind conflict and reserved-name policies plugged into [`ManglerCache`](super::ManglerCache).

/// Semantic answer to "could these two symbols be confused at a call site if they shared a
/// name?". Implemented by the export context; must be symmetric and stable for the session.
pub trait ConflictOracle<S: ?Sized> {
    fn conflicts(&self, first: &S, second: &S) -> bool;
}

/// Kind-specific strategy consulted by the cache while assigning names.
pub trait ManglingRules<C: ?Sized, S> {
    fn conflict(&self, context: &C, first: &S, second: &S) -> bool;

    /// Reserved names are handed out without being recorded or checked for conflicts.
    fn reserved(&self, _name: &str) -> bool {
        false
    }
}

/// Selectors the Objective-C runtime already answers on every object.
pub const RESERVED_SELECTORS: [&str; 6] =
    ["retain", "release", "autorelease", "class", "superclass", "hash"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorRules;

impl<C, S> ManglingRules<C, S> for SelectorRules
where
    C: ConflictOracle<S> + ?Sized,
{
    fn conflict(&self, context: &C, first: &S, second: &S) -> bool {
        context.conflicts(first, second)
    }

    fn reserved(&self, name: &str) -> bool {
        RESERVED_SELECTORS.contains(&name)
    }
}

/// One exported type name per class: distinct classes always collide.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNameRules;

impl<C: ?Sized, S> ManglingRules<C, S> for ClassNameRules {
    fn conflict(&self, _context: &C, _first: &S, _second: &S) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeRules;

impl<C, S> ManglingRules<C, S> for AttributeRules
where
    C: ConflictOracle<S> + ?Sized,
{
    fn conflict(&self, context: &C, first: &S, second: &S) -> bool {
        context.conflicts(first, second)
    }
}
