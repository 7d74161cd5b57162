//! Deferred manglers that the export driver attaches to stubs and the renderer invokes.

use crate::mangling::MangleResult;

/// Produces the final selector parts and attributes of one exported method.
pub trait MethodStubMangler {
    fn mangle_selectors(&self) -> MangleResult<Vec<String>>;
    fn mangle_attributes(&self) -> MangleResult<Vec<String>>;
}

/// Produces the final exported name of one interface or protocol.
pub trait ClassStubMangler {
    fn mangle_name(&self) -> MangleResult<String>;
}

/// Mangler slot carried by a stub. A stub only honours the variant matching its own kind.
pub enum StubMangler {
    Method(Box<dyn MethodStubMangler>),
    ClassName(Box<dyn ClassStubMangler>),
}

impl StubMangler {
    pub fn as_method(&self) -> Option<&dyn MethodStubMangler> {
        match self {
            StubMangler::Method(mangler) => Some(&**mangler),
            StubMangler::ClassName(_) => None,
        }
    }

    pub fn as_class_name(&self) -> Option<&dyn ClassStubMangler> {
        match self {
            StubMangler::ClassName(mangler) => Some(&**mangler),
            StubMangler::Method(_) => None,
        }
    }
}

impl std::fmt::Debug for StubMangler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StubMangler::Method(_) => f.write_str("StubMangler::Method(..)"),
            StubMangler::ClassName(_) => f.write_str("StubMangler::ClassName(..)"),
        }
    }
}
