//! Entry point for the `mangling` subsystem.
//!
//! One [`ExportMangling`] is created per export session (one compilation target). The export
//! driver walks declarations in a fixed order and asks the kind manglers for names; the same
//! order always produces the same header.

pub mod cache;
pub mod candidates;
pub mod error;
pub mod kinds;
pub mod options;
pub mod rules;

pub use cache::ManglerCache;
pub use candidates::{attribute_candidates, class_name_candidates, selector_candidates};
pub use error::{MangleError, MangleResult};
pub use kinds::{AttributeMangler, ClassNameMangler, ExportMangling, MethodMangler};
pub use options::MangleOptions;
pub use rules::{
    AttributeRules, ClassNameRules, ConflictOracle, ManglingRules, RESERVED_SELECTORS,
    SelectorRules,
};
