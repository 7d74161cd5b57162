//! Caches bound to one symbol kind: each pairs a [`ManglerCache`] with that kind's rules and
//! candidate generator.

use std::fmt;
use std::hash::Hash;

use super::cache::ManglerCache;
use super::candidates::{attribute_candidates, class_name_candidates, selector_candidates};
use super::error::MangleResult;
use super::options::MangleOptions;
use super::rules::{AttributeRules, ClassNameRules, ConflictOracle, SelectorRules};

/// Objective-C selectors for exported functions and properties.
#[derive(Debug)]
pub struct MethodMangler<F> {
    cache: ManglerCache<F, SelectorRules>,
}

impl<F> MethodMangler<F>
where
    F: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new(options: MangleOptions) -> Self {
        Self {
            cache: ManglerCache::with_options(SelectorRules, options),
        }
    }

    /// `has_parameters` picks how the selector grows; see
    /// [`selector_candidates`](super::candidates::selector_candidates).
    pub fn mangle<C>(
        &mut self,
        context: &C,
        selector: &str,
        function: &F,
        has_parameters: bool,
    ) -> MangleResult<String>
    where
        C: ConflictOracle<F> + ?Sized,
    {
        self.cache.resolve(context, function, || {
            selector_candidates(selector, has_parameters)
        })
    }

    pub fn cache(&self) -> &ManglerCache<F, SelectorRules> {
        &self.cache
    }
}

/// Exported interface and protocol names.
#[derive(Debug)]
pub struct ClassNameMangler<K> {
    cache: ManglerCache<K, ClassNameRules>,
}

impl<K> ClassNameMangler<K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new(options: MangleOptions) -> Self {
        Self {
            cache: ManglerCache::with_options(ClassNameRules, options),
        }
    }

    pub fn mangle<C: ?Sized>(
        &mut self,
        context: &C,
        name: &str,
        class: &K,
    ) -> MangleResult<String> {
        self.cache
            .resolve(context, class, || class_name_candidates(name))
    }

    pub fn cache(&self) -> &ManglerCache<K, ClassNameRules> {
        &self.cache
    }
}

/// Swift display names carried in `swift_name` attributes.
#[derive(Debug)]
pub struct AttributeMangler<F> {
    cache: ManglerCache<F, AttributeRules>,
}

impl<F> AttributeMangler<F>
where
    F: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new(options: MangleOptions) -> Self {
        Self {
            cache: ManglerCache::with_options(AttributeRules, options),
        }
    }

    pub fn mangle<C>(&mut self, context: &C, swift_name: &str, function: &F) -> MangleResult<String>
    where
        C: ConflictOracle<F> + ?Sized,
    {
        self.cache
            .resolve(context, function, || attribute_candidates(swift_name))
    }

    pub fn cache(&self) -> &ManglerCache<F, AttributeRules> {
        &self.cache
    }
}

/// All mangling state of one export session. `F` identifies functions, `K` classes.
#[derive(Debug)]
pub struct ExportMangling<F, K> {
    pub methods: MethodMangler<F>,
    pub attributes: AttributeMangler<F>,
    pub class_names: ClassNameMangler<K>,
}

impl<F, K> ExportMangling<F, K>
where
    F: Clone + Eq + Hash + fmt::Debug,
    K: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self::with_options(MangleOptions::default())
    }

    pub fn with_options(options: MangleOptions) -> Self {
        Self {
            methods: MethodMangler::new(options),
            attributes: AttributeMangler::new(options),
            class_names: ClassNameMangler::new(options),
        }
    }
}

impl<F, K> Default for ExportMangling<F, K>
where
    F: Clone + Eq + Hash + fmt::Debug,
    K: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
