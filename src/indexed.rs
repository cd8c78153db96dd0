//! Storage for families of sibling component instances, and the projection
//! derivation that scopes a lens to one entry.

use crate::index::Index;
use crate::lens::Lens;
use std::collections::HashMap;

/// A mapping from [`Index`] to child model, holding every live instance of
/// one component family inside a single parent field.
///
/// Iteration order is unspecified; consumers must not depend on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indexed<M>(HashMap<Index, M>);

impl<M> Default for Indexed<M> {
    fn default() -> Self {
        Indexed(HashMap::new())
    }
}

impl<M> Indexed<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: &Index) -> Option<&M> {
        self.0.get(index)
    }

    /// Lookup with an explicit fallback for absent entries. Never inserts.
    pub fn get_or<'a>(&'a self, index: &Index, default: &'a M) -> &'a M {
        self.0.get(index).unwrap_or(default)
    }

    /// Inserts or overwrites the entry, returning the previous model if any.
    pub fn insert(&mut self, index: Index, model: M) -> Option<M> {
        self.0.insert(index, model)
    }

    /// Removes the entry, reverting the instance to its absent state.
    pub fn remove(&mut self, index: &Index) -> Option<M> {
        self.0.remove(index)
    }

    pub fn contains(&self, index: &Index) -> bool {
        self.0.contains_key(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Index, &M)> {
        self.0.iter()
    }
}

impl<M> FromIterator<(Index, M)> for Indexed<M> {
    fn from_iter<T: IntoIterator<Item = (Index, M)>>(iter: T) -> Self {
        Indexed(iter.into_iter().collect())
    }
}

/// Scopes a lens onto an [`Indexed`] field down to exactly one entry.
///
/// The derived getter returns `default` when the entry is absent, without
/// writing anything back; an instance is materialized only by the first
/// `set`. Distinct indices derived against the same field never interfere.
pub fn indexed<C, M>(lens: Lens<C, Indexed<M>>, default: M, index: Index) -> Lens<C, M>
where
    C: 'static,
    M: Clone + 'static,
{
    let get = {
        let lens = lens.clone();
        let index = index.clone();
        move |model: &C| {
            lens.get(model)
                .get(&index)
                .cloned()
                .unwrap_or_else(|| default.clone())
        }
    };
    let set = move |value: M, model: C| {
        let mut entries = lens.get(&model);
        entries.insert(index.clone(), value);
        lens.set(entries, model)
    };
    Lens::new(get, set)
}
