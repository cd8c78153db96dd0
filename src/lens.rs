//! Projection pairs between a parent model and one embedded child model.

use std::rc::Rc;

/// Extracts a child model from a parent model. Must be total and pure;
/// absence is resolved at the indexed layer, never here.
pub type Getter<C, M> = Rc<dyn Fn(&C) -> M>;

/// Writes a child model back into a parent model, returning the updated
/// parent. Must preserve every parent field unrelated to the child.
pub type Setter<C, M> = Rc<dyn Fn(M, C) -> C>;

/// A getter/setter pair relating a parent model `C` to one child model `M`.
///
/// Both halves are plain function values, so embedding is ordinary function
/// composition. Pairs produced by this library satisfy the lens laws:
/// `get(set(m, c)) == m` and `set(get(c), c) == c`.
pub struct Lens<C, M> {
    get: Getter<C, M>,
    set: Setter<C, M>,
}

impl<C, M> Clone for Lens<C, M> {
    fn clone(&self) -> Self {
        Lens {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<C, M> Lens<C, M> {
    pub fn new(get: impl Fn(&C) -> M + 'static, set: impl Fn(M, C) -> C + 'static) -> Self {
        Lens {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Extracts the child model.
    pub fn get(&self, model: &C) -> M {
        (self.get)(model)
    }

    /// Replaces the child model, returning the updated parent.
    pub fn set(&self, value: M, model: C) -> C {
        (self.set)(value, model)
    }

    /// The getter half as a standalone function value.
    pub fn getter(&self) -> Getter<C, M> {
        self.get.clone()
    }

    /// The setter half as a standalone function value.
    pub fn setter(&self) -> Setter<C, M> {
        self.set.clone()
    }

    /// Composes with a lens one level deeper, yielding a projection from the
    /// parent straight to the grandchild.
    pub fn compose<N>(&self, inner: Lens<M, N>) -> Lens<C, N>
    where
        C: 'static,
        M: 'static,
        N: 'static,
    {
        let get = {
            let outer = self.get.clone();
            let inner = inner.get.clone();
            move |model: &C| inner(&outer(model))
        };
        let set = {
            let outer_get = self.get.clone();
            let outer_set = self.set.clone();
            let inner_set = inner.set.clone();
            move |value: N, model: C| {
                let child = inner_set(value, outer_get(&model));
                outer_set(child, model)
            }
        };
        Lens::new(get, set)
    }
}
