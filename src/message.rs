//! The uniform parent message channel.
//!
//! Children with distinct message types share one parent message type by
//! boxing: a [`Message`] carries, behind a trait object, the embedded
//! update function it belongs to and the concrete child message value, so
//! applying it to the parent model needs no per-child dispatch switch.

use crate::effect::Effect;
use crate::embed::Update;
use std::fmt;
use tracing::trace;

/// A boxed message for parent model `C`.
///
/// Applying it advances the parent model by exactly one step and yields the
/// effects that step produced, already re-boxed so they remain dispatchable
/// here. From the outside, boxed messages are indistinguishable regardless
/// of which child or child message type produced them.
pub struct Message<C>(Box<dyn Apply<C>>);

/// The single capability a boxed message carries.
trait Apply<C> {
    fn apply(self: Box<Self>, model: C) -> (C, Vec<Effect<Message<C>>>);
}

/// A child message bound to the embedded update function that owns it.
struct Packed<C, Msg> {
    update: Update<C, Msg>,
    msg: Msg,
}

impl<C: 'static, Msg: 'static> Apply<C> for Packed<C, Msg> {
    fn apply(self: Box<Self>, model: C) -> (C, Vec<Effect<Message<C>>>) {
        let Packed { update, msg } = *self;
        let (next, effects) = update(msg, model);
        trace!(effects = effects.len(), "boxed message applied");
        let effects = effects
            .into_iter()
            .map(|effect| {
                let update = update.clone();
                effect.map(move |msg| pack(update.clone(), msg))
            })
            .collect();
        (next, effects)
    }
}

impl<C> Message<C> {
    pub(crate) fn apply(self, model: C) -> (C, Vec<Effect<Message<C>>>) {
        self.0.apply(model)
    }
}

impl<C> fmt::Debug for Message<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Message(..)")
    }
}

/// Boxes one child message together with its embedded update function.
///
/// When the resulting message is applied, every effect the update produces
/// is re-boxed with the same update function, so messages surfacing from
/// deferred work keep routing to the component that created them.
pub fn pack<C, Msg>(update: Update<C, Msg>, msg: Msg) -> Message<C>
where
    C: 'static,
    Msg: 'static,
{
    Message(Box::new(Packed { update, msg }))
}

/// Generic dispatch: the single entry point the outer runtime calls for
/// every incoming message.
///
/// Applies the boxed message to the model and re-tags each resulting effect
/// with `to_outer`, so the effects are expressed in the runtime's own
/// message type and can be scheduled for later execution.
pub fn update<C, O>(
    to_outer: impl Fn(Message<C>) -> O + Clone + 'static,
    message: Message<C>,
    model: C,
) -> (C, Vec<Effect<O>>)
where
    C: 'static,
    O: 'static,
{
    let (next, effects) = message.apply(model);
    let effects = effects
        .into_iter()
        .map(|effect| effect.map(to_outer.clone()))
        .collect();
    (next, effects)
}
