//! Lifting child-scoped update and view functions to the parent model.

use crate::effect::Effect;
use crate::lens::{Getter, Lens};
use std::rc::Rc;

/// The standard update shape: a pure function from a message and the
/// current model to the next model plus pending effects.
pub type Update<M, Msg> = Rc<dyn Fn(Msg, M) -> (M, Vec<Effect<Msg>>)>;

/// Callback a view uses to emit a message on interaction.
pub type Dispatch<Msg> = dyn Fn(Msg);

/// The standard view shape: renders a model into a presentation value `V`,
/// wiring interactions to the supplied dispatch callback.
pub type View<M, Msg, V> = Rc<dyn for<'a, 'b> Fn(&'a M, &'b (dyn Fn(Msg) + 'b)) -> V>;

/// Lifts a child update function to operate on the parent model: project
/// the child out, apply the update, write the result back.
///
/// Effects pass through unchanged and still carry the child's own message
/// type; widening to the parent message type happens at the boxing layer.
pub fn embed_update<C, M, Msg>(lens: Lens<C, M>, update: Update<M, Msg>) -> Update<C, Msg>
where
    C: 'static,
    M: 'static,
    Msg: 'static,
{
    Rc::new(move |msg, model: C| {
        let (child, effects) = update(msg, lens.get(&model));
        (lens.set(child, model), effects)
    })
}

/// Lifts a child view function to render from the parent model.
pub fn embed_view<C, M, Msg, V>(get: Getter<C, M>, view: View<M, Msg, V>) -> View<C, Msg, V>
where
    C: 'static,
    M: 'static,
    Msg: 'static,
    V: 'static,
{
    Rc::new(move |model: &C, dispatch| view(&get(model), dispatch))
}
