//! Bidirectional symbol/name store plus the get-or-assign protocol shared by every symbol kind.

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use log::{debug, trace};
use smallvec::SmallVec;

use super::error::{MangleError, MangleResult};
use super::options::MangleOptions;
use super::rules::ManglingRules;

/// Append-only name assignments for one symbol kind within one export session.
///
/// Symbols visited first claim their preferred names; later symbols that would clash are pushed
/// down their candidate sequence. The traversal order of the caller is therefore part of the
/// result, and replaying the same order always yields the same names.
pub struct ManglerCache<S, R> {
    rules: R,
    options: MangleOptions,
    names: AHashMap<S, String>,
    holders: AHashMap<String, SmallVec<[S; 2]>>,
}

impl<S, R> ManglerCache<S, R>
where
    S: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new(rules: R) -> Self {
        Self::with_options(rules, MangleOptions::default())
    }

    pub fn with_options(rules: R, options: MangleOptions) -> Self {
        Self {
            rules,
            options,
            names: AHashMap::new(),
            holders: AHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn options(&self) -> &MangleOptions {
        &self.options
    }

    /// Name already recorded for `symbol`, if any. Reserved pass-through results are never
    /// recorded.
    pub fn lookup(&self, symbol: &S) -> Option<&str> {
        self.names.get(symbol).map(String::as_str)
    }

    /// Symbols currently holding `name`, in the order they claimed it.
    pub fn symbols_named(&self, name: &str) -> &[S] {
        self.holders
            .get(name)
            .map(|symbols| symbols.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the name for `symbol`, assigning one on first request.
    ///
    /// A symbol that already holds a name gets it back without `candidates` being invoked.
    /// Otherwise candidates are pulled one at a time: a reserved candidate is returned untracked,
    /// and the first candidate whose current holders all coexist with `symbol` is recorded and
    /// returned. Running out of candidates, or hitting the configured limit, is an internal
    /// error.
    pub fn resolve<C, F, I>(
        &mut self,
        context: &C,
        symbol: &S,
        candidates: F,
    ) -> MangleResult<String>
    where
        C: ?Sized,
        R: ManglingRules<C, S>,
        F: FnOnce() -> I,
        I: IntoIterator<Item = String>,
    {
        if let Some(name) = self.names.get(symbol) {
            return Ok(name.clone());
        }

        let mut preferred: Option<String> = None;
        let mut attempts = 0;
        for candidate in candidates().into_iter().take(self.options.candidate_limit) {
            attempts += 1;
            if self.rules.reserved(&candidate) {
                trace!("{symbol:?} takes reserved name `{candidate}` untracked");
                return Ok(candidate);
            }
            if self.try_assign(context, symbol, &candidate) {
                if let Some(preferred) = &preferred {
                    debug!("{symbol:?} mangled from `{preferred}` to `{candidate}`");
                }
                return Ok(candidate);
            }
            trace!("{symbol:?} cannot share `{candidate}`");
            if preferred.is_none() {
                preferred = Some(candidate);
            }
        }

        Err(MangleError::CandidatesExhausted {
            symbol: format!("{symbol:?}"),
            preferred: preferred.unwrap_or_default(),
            attempts,
        })
    }

    fn try_assign<C>(&mut self, context: &C, symbol: &S, name: &str) -> bool
    where
        C: ?Sized,
        R: ManglingRules<C, S>,
    {
        let clashes = self.holders.get(name).is_some_and(|holders| {
            holders
                .iter()
                .any(|holder| self.rules.conflict(context, symbol, holder))
        });
        if clashes {
            return false;
        }
        self.holders
            .entry(name.to_owned())
            .or_default()
            .push(symbol.clone());
        self.names.insert(symbol.clone(), name.to_owned());
        true
    }
}

impl<S, R: fmt::Debug> fmt::Debug for ManglerCache<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManglerCache")
            .field("rules", &self.rules)
            .field("assigned", &self.names.len())
            .field("names", &self.holders.len())
            .finish()
    }
}
