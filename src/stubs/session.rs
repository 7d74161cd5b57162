//! Glue between the export driver, which builds stubs, and the renderer, which reads them.
//!
//! The driver asks the session for a deferred mangler per declaration and attaches it to the
//! stub; nothing is mangled until the renderer asks the stub for its final name. All deferred
//! manglers of a session share one [`ExportMangling`], so the order in which the renderer visits
//! stubs decides who keeps the preferred names.

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::mangling::{ConflictOracle, ExportMangling, MangleError, MangleOptions, MangleResult};

use super::mangler::{ClassStubMangler, MethodStubMangler, StubMangler};
use super::method::{join_selector, split_selector, ObjCMethod};

const SWIFT_NAME_PREFIX: &str = "swift_name(\"";
const SWIFT_NAME_SUFFIX: &str = "\")";

/// One export session: the semantic context plus the mangling state of a single target.
///
/// Sessions are `!Send`; a target's names are never shared with another thread or target.
pub struct ExportSession<C, F, K> {
    context: Rc<C>,
    mangling: Rc<RefCell<ExportMangling<F, K>>>,
}

impl<C, F, K> ExportSession<C, F, K>
where
    C: ConflictOracle<F> + 'static,
    F: Clone + Eq + Hash + fmt::Debug + 'static,
    K: Clone + Eq + Hash + fmt::Debug + 'static,
{
    pub fn new(context: C) -> Self {
        Self::with_options(context, MangleOptions::default())
    }

    pub fn with_options(context: C, options: MangleOptions) -> Self {
        Self {
            context: Rc::new(context),
            mangling: Rc::new(RefCell::new(ExportMangling::with_options(options))),
        }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Read access to the session's assignments. Stubs rendered from inside `inspect` fail with
    /// [`MangleError::SessionBusy`].
    pub fn with_mangling<T>(&self, inspect: impl FnOnce(&ExportMangling<F, K>) -> T) -> T {
        inspect(&self.mangling.borrow())
    }

    /// Deferred mangler for `method`, capturing its natural selector and attributes.
    pub fn method_mangler(
        &self,
        function: F,
        method: &ObjCMethod,
        has_parameters: bool,
    ) -> StubMangler {
        StubMangler::Method(Box::new(SessionMethodMangler {
            context: Rc::clone(&self.context),
            mangling: Rc::clone(&self.mangling),
            function,
            selector: join_selector(&method.selectors),
            has_parameters,
            attributes: method.attributes.clone(),
        }))
    }

    pub fn class_name_mangler<S: Into<String>>(&self, class: K, name: S) -> StubMangler {
        StubMangler::ClassName(Box::new(SessionClassNameMangler {
            context: Rc::clone(&self.context),
            mangling: Rc::clone(&self.mangling),
            class,
            name: name.into(),
        }))
    }

    /// Opts `method` into mangling under this session.
    pub fn attach_method(&self, method: &mut ObjCMethod, function: F, has_parameters: bool) {
        let mangler = self.method_mangler(function, method, has_parameters);
        method.attach_mangler(mangler);
    }
}

struct SessionMethodMangler<C, F, K> {
    context: Rc<C>,
    mangling: Rc<RefCell<ExportMangling<F, K>>>,
    function: F,
    selector: String,
    has_parameters: bool,
    attributes: Vec<String>,
}

impl<C, F, K> MethodStubMangler for SessionMethodMangler<C, F, K>
where
    C: ConflictOracle<F>,
    F: Clone + Eq + Hash + fmt::Debug,
    K: Clone + Eq + Hash + fmt::Debug,
{
    fn mangle_selectors(&self) -> MangleResult<Vec<String>> {
        let mut mangling = borrow_session(&self.mangling, &self.function)?;
        let selector = mangling.methods.mangle(
            &*self.context,
            &self.selector,
            &self.function,
            self.has_parameters,
        )?;
        Ok(split_selector(&selector))
    }

    fn mangle_attributes(&self) -> MangleResult<Vec<String>> {
        let swift_names = self
            .attributes
            .iter()
            .filter(|attribute| swift_name_of(attribute).is_some())
            .count();
        if swift_names > 1 {
            return Err(MangleError::DuplicateSwiftName {
                symbol: format!("{:?}", self.function),
                count: swift_names,
            });
        }
        self.attributes
            .iter()
            .map(|attribute| match swift_name_of(attribute) {
                Some(swift_name) => {
                    let mangled = borrow_session(&self.mangling, &self.function)?
                        .attributes
                        .mangle(&*self.context, swift_name, &self.function)?;
                    Ok(format!("{SWIFT_NAME_PREFIX}{mangled}{SWIFT_NAME_SUFFIX}"))
                }
                None => Ok(attribute.clone()),
            })
            .collect()
    }
}

struct SessionClassNameMangler<C, F, K> {
    context: Rc<C>,
    mangling: Rc<RefCell<ExportMangling<F, K>>>,
    class: K,
    name: String,
}

impl<C, F, K> ClassStubMangler for SessionClassNameMangler<C, F, K>
where
    F: Clone + Eq + Hash + fmt::Debug,
    K: Clone + Eq + Hash + fmt::Debug,
{
    fn mangle_name(&self) -> MangleResult<String> {
        borrow_session(&self.mangling, &self.class)?
            .class_names
            .mangle(&*self.context, &self.name, &self.class)
    }
}

fn borrow_session<'a, F, K>(
    mangling: &'a RefCell<ExportMangling<F, K>>,
    symbol: &dyn fmt::Debug,
) -> MangleResult<RefMut<'a, ExportMangling<F, K>>> {
    mangling
        .try_borrow_mut()
        .map_err(|_| MangleError::SessionBusy {
            symbol: format!("{symbol:?}"),
        })
}

fn swift_name_of(attribute: &str) -> Option<&str> {
    attribute
        .strip_prefix(SWIFT_NAME_PREFIX)?
        .strip_suffix(SWIFT_NAME_SUFFIX)
}
