//! Exported method stubs and the selector-part helpers the renderer relies on.

use crate::mangling::MangleResult;

use super::mangler::StubMangler;

#[derive(Debug)]
pub struct ObjCMethod {
    pub selectors: Vec<String>,
    pub attributes: Vec<String>,
    mangler: Option<StubMangler>,
}

impl ObjCMethod {
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            attributes: Vec::new(),
            mangler: None,
        }
    }

    pub fn attribute<S: Into<String>>(mut self, attribute: S) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn mangler(mut self, mangler: StubMangler) -> Self {
        self.mangler = Some(mangler);
        self
    }

    pub fn attach_mangler(&mut self, mangler: StubMangler) {
        self.mangler = Some(mangler);
    }

    /// Selector parts to render: the attached method mangler's output, else the natural parts.
    pub fn mangled_selectors(&self) -> MangleResult<Vec<String>> {
        match self.mangler.as_ref().and_then(StubMangler::as_method) {
            Some(mangler) => mangler.mangle_selectors(),
            None => Ok(self.selectors.clone()),
        }
    }

    pub fn mangled_attributes(&self) -> MangleResult<Vec<String>> {
        match self.mangler.as_ref().and_then(StubMangler::as_method) {
            Some(mangler) => mangler.mangle_attributes(),
            None => Ok(self.attributes.clone()),
        }
    }
}

/// Concatenates selector parts (`["make:", "with:"]`) into one selector (`make:with:`).
pub fn join_selector<S: AsRef<str>>(parts: &[S]) -> String {
    let mut selector = String::new();
    for part in parts {
        selector.push_str(part.as_ref());
    }
    selector
}

/// Splits a selector back into colon-terminated parts; a bare identifier stays whole.
pub fn split_selector(selector: &str) -> Vec<String> {
    selector.split_inclusive(':').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mangling::MangleError;
    use crate::stubs::mangler::{ClassStubMangler, MethodStubMangler};

    struct Fixed;

    impl MethodStubMangler for Fixed {
        fn mangle_selectors(&self) -> MangleResult<Vec<String>> {
            Ok(vec!["make:".into(), "with_:".into()])
        }

        fn mangle_attributes(&self) -> MangleResult<Vec<String>> {
            Ok(vec!["swift_name(\"make(with_:)\")".into()])
        }
    }

    struct Broken;

    impl MethodStubMangler for Broken {
        fn mangle_selectors(&self) -> MangleResult<Vec<String>> {
            Err(MangleError::CandidatesExhausted {
                symbol: "broken".into(),
                preferred: "x".into(),
                attempts: 1,
            })
        }

        fn mangle_attributes(&self) -> MangleResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    struct ClassOnly;

    impl ClassStubMangler for ClassOnly {
        fn mangle_name(&self) -> MangleResult<String> {
            Ok("Wrong".into())
        }
    }

    fn stub() -> ObjCMethod {
        ObjCMethod::new(["make:", "with:"]).attribute("swift_name(\"make(with:)\")")
    }

    #[test]
    fn unmangled_stub_renders_natural_names() {
        let method = stub();
        assert_eq!(method.mangled_selectors().unwrap(), ["make:", "with:"]);
        assert_eq!(method.mangled_attributes().unwrap(), ["swift_name(\"make(with:)\")"]);
    }

    #[test]
    fn attached_mangler_takes_precedence() {
        let method = stub().mangler(StubMangler::Method(Box::new(Fixed)));
        assert_eq!(method.mangled_selectors().unwrap(), ["make:", "with_:"]);
        assert_eq!(method.mangled_attributes().unwrap(), ["swift_name(\"make(with_:)\")"]);
    }

    #[test]
    fn class_mangler_on_method_is_ignored() {
        let mut method = stub();
        method.attach_mangler(StubMangler::ClassName(Box::new(ClassOnly)));
        assert_eq!(
            method.mangled_selectors().unwrap(),
            ["make:", "with:"],
            "a mangler of the wrong kind falls back to the natural selector"
        );
    }

    #[test]
    fn mangler_failures_propagate() {
        let method = stub().mangler(StubMangler::Method(Box::new(Broken)));
        assert!(method.mangled_selectors().is_err());
    }

    #[test]
    fn selector_parts_round_trip_through_mangling_shape() {
        assert_eq!(join_selector(&["make:", "with:"]), "make:with:");
        assert_eq!(split_selector("make:with_:"), ["make:", "with_:"]);
        assert_eq!(split_selector("foo__"), ["foo__"]);
        assert!(split_selector("").is_empty());
    }
}
