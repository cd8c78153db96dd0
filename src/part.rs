//! Part constructors and direct-access bundles.

use crate::embed::{embed_update, embed_view, Update, View};
use crate::index::Index;
use crate::indexed::{indexed, Indexed};
use crate::lens::Lens;
use crate::message::{pack, Message};
use std::rc::Rc;
use tracing::trace;

/// Assembles a singleton component into a ready view over the parent model.
///
/// The returned view projects into the child model and wires every
/// interaction to dispatch a boxed message, converted to the outer message
/// type with `to_outer`.
pub fn create1<C, M, Msg, O, V>(
    update: Update<M, Msg>,
    view: View<M, Msg, V>,
    lens: Lens<C, M>,
    to_outer: impl Fn(Message<C>) -> O + 'static,
) -> View<C, O, V>
where
    C: 'static,
    M: 'static,
    Msg: 'static,
    O: 'static,
    V: 'static,
{
    let embedded = embed_update(lens.clone(), update);
    let projected = embed_view(lens.getter(), view);
    Rc::new(move |model: &C, dispatch| {
        let embedded = &embedded;
        let to_outer = &to_outer;
        projected(model, &move |msg| {
            dispatch(to_outer(pack(embedded.clone(), msg)))
        })
    })
}

/// Assembles one indexed instance of a repeatable component into a ready
/// view over the parent model.
///
/// The instance lives at `index` inside the [`Indexed`] field addressed by
/// `lens`, reading as `default` until something is written there.
pub fn create<C, M, Msg, O, V>(
    update: Update<M, Msg>,
    view: View<M, Msg, V>,
    lens: Lens<C, Indexed<M>>,
    default: M,
    index: Index,
    to_outer: impl Fn(Message<C>) -> O + 'static,
) -> View<C, O, V>
where
    C: 'static,
    M: Clone + 'static,
    Msg: 'static,
    O: 'static,
    V: 'static,
{
    create1(update, view, indexed(lens, default, index), to_outer)
}

/// Direct access to one indexed child model, for callers that need to read
/// or alter it outside of message dispatch.
pub struct Accessors<C, M> {
    scoped: Lens<C, M>,
    outer: Lens<C, Indexed<M>>,
    index: Index,
}

impl<C, M> Clone for Accessors<C, M> {
    fn clone(&self) -> Self {
        Accessors {
            scoped: self.scoped.clone(),
            outer: self.outer.clone(),
            index: self.index.clone(),
        }
    }
}

/// Builds the accessor bundle for the instance at `index`.
pub fn accessors<C, M>(lens: Lens<C, Indexed<M>>, default: M, index: Index) -> Accessors<C, M>
where
    C: 'static,
    M: Clone + 'static,
{
    Accessors {
        scoped: indexed(lens.clone(), default, index.clone()),
        outer: lens,
        index,
    }
}

impl<C, M> Accessors<C, M>
where
    C: 'static,
    M: Clone + 'static,
{
    /// Reads the child model, falling back to the default when absent.
    pub fn get(&self, model: &C) -> M {
        self.scoped.get(model)
    }

    /// Writes the child model, materializing the entry if absent.
    pub fn set(&self, value: M, model: C) -> C {
        self.scoped.set(value, model)
    }

    /// Read-modify-write in one step.
    pub fn map(&self, f: impl FnOnce(M) -> M, model: C) -> C {
        let value = f(self.scoped.get(&model));
        self.scoped.set(value, model)
    }

    /// Removes the entry, so the next read yields the default again.
    pub fn reset(&self, model: C) -> C {
        trace!(index = %self.index, "entry reset");
        let mut entries = self.outer.get(&model);
        entries.remove(&self.index);
        self.outer.set(entries, model)
    }
}
