//! Opaque descriptions of deferred work.

use std::fmt;

/// A pending side effect and the message it will eventually produce.
///
/// The composition layer never executes or inspects an effect; it only
/// re-tags the message type the effect will carry ([`Effect::map`]). The
/// outer runtime owns execution and calls [`Effect::run`] with a dispatch
/// callback that feeds produced messages back into the update cycle.
pub struct Effect<Msg>(Box<dyn FnOnce(&mut dyn FnMut(Msg))>);

impl<Msg: 'static> Effect<Msg> {
    /// Wraps a deferred action. The action receives a dispatch callback and
    /// may invoke it any number of times as results become available.
    pub fn new(action: impl FnOnce(&mut dyn FnMut(Msg)) + 'static) -> Self {
        Effect(Box::new(action))
    }

    /// An effect that immediately yields a single message when run.
    pub fn message(msg: Msg) -> Self {
        Effect::new(move |dispatch| dispatch(msg))
    }

    /// Re-tags the message type this effect will eventually produce.
    ///
    /// The deferred action itself is untouched; only the messages it
    /// dispatches are passed through `f` on their way out.
    pub fn map<N: 'static>(self, f: impl Fn(Msg) -> N + 'static) -> Effect<N> {
        Effect::new(move |dispatch| (self.0)(&mut |msg| dispatch(f(msg))))
    }

    /// Executes the deferred action, routing every produced message to
    /// `dispatch`. Called by the outer runtime, never by this library.
    pub fn run(self, mut dispatch: impl FnMut(Msg)) {
        (self.0)(&mut dispatch)
    }
}

impl<Msg> fmt::Debug for Effect<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Effect(..)")
    }
}
