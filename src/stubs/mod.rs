//! Stub facade consumed by the header renderer.
//!
//! Mangling is opt-in per stub: a stub with an attached [`StubMangler`] of its own kind renders
//! the mangled form, every other stub renders its natural name verbatim.

pub mod interface;
pub mod mangler;
pub mod method;
pub mod session;

pub use interface::ObjCInterface;
pub use mangler::{ClassStubMangler, MethodStubMangler, StubMangler};
pub use method::{join_selector, split_selector, ObjCMethod};
pub use session::ExportSession;
