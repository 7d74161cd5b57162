use crate::mangling::MangleResult;

use super::mangler::StubMangler;

/// Exported interface or protocol declaration.
#[derive(Debug)]
pub struct ObjCInterface {
    pub name: String,
    mangler: Option<StubMangler>,
}

impl ObjCInterface {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            mangler: None,
        }
    }

    pub fn mangler(mut self, mangler: StubMangler) -> Self {
        self.mangler = Some(mangler);
        self
    }

    pub fn attach_mangler(&mut self, mangler: StubMangler) {
        self.mangler = Some(mangler);
    }

    pub fn mangled_name(&self) -> MangleResult<String> {
        match self.mangler.as_ref().and_then(StubMangler::as_class_name) {
            Some(mangler) => mangler.mangle_name(),
            None => Ok(self.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::mangler::{ClassStubMangler, MethodStubMangler};

    struct Renamed(&'static str);

    impl ClassStubMangler for Renamed {
        fn mangle_name(&self) -> MangleResult<String> {
            Ok(self.0.to_owned())
        }
    }

    struct MethodOnly;

    impl MethodStubMangler for MethodOnly {
        fn mangle_selectors(&self) -> MangleResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn mangle_attributes(&self) -> MangleResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn falls_back_to_declared_name() {
        assert_eq!(ObjCInterface::new("Foo").mangled_name().unwrap(), "Foo");
    }

    #[test]
    fn uses_attached_class_mangler() {
        let stub =
            ObjCInterface::new("Foo").mangler(StubMangler::ClassName(Box::new(Renamed("Foo_"))));
        assert_eq!(stub.mangled_name().unwrap(), "Foo_");
    }

    #[test]
    fn ignores_method_mangler() {
        let mut stub = ObjCInterface::new("Foo");
        stub.attach_mangler(StubMangler::Method(Box::new(MethodOnly)));
        assert_eq!(stub.mangled_name().unwrap(), "Foo");
    }
}
