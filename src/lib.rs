//! Deterministic name mangling for Objective-C/Swift header export.
//!
//! [`mangling`] owns the per-session caches that give every exported method, class and
//! attribute a stable, collision-free name. [`stubs`] is the thin facade the header renderer
//! reads from: a stub either carries a deferred mangler or falls back to its natural name.

pub mod mangling;
pub mod stubs;

pub use mangling::{
    ConflictOracle, ExportMangling, MangleError, MangleOptions, MangleResult, ManglerCache,
};
pub use stubs::{ExportSession, ObjCInterface, ObjCMethod, StubMangler};
