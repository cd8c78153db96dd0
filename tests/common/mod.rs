//! Shared fixture components for composition tests.

#![allow(dead_code)]

use partwise::{Effect, Indexed, Lens, Message, Update, View};
use std::rc::Rc;

/// Parent model embedding two singleton components and one indexed family.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shell {
    pub counter: i32,
    pub toggle: bool,
    pub fields: Indexed<String>,
}

/// The outer runtime's message type, wrapping boxed messages for `Shell`.
#[derive(Debug)]
pub enum ShellMsg {
    Part(Message<Shell>),
}

pub fn counter_lens() -> Lens<Shell, i32> {
    Lens::new(
        |shell: &Shell| shell.counter,
        |value, mut shell: Shell| {
            shell.counter = value;
            shell
        },
    )
}

pub fn toggle_lens() -> Lens<Shell, bool> {
    Lens::new(
        |shell: &Shell| shell.toggle,
        |value, mut shell: Shell| {
            shell.toggle = value;
            shell
        },
    )
}

pub fn fields_lens() -> Lens<Shell, Indexed<String>> {
    Lens::new(
        |shell: &Shell| shell.fields.clone(),
        |value, mut shell: Shell| {
            shell.fields = value;
            shell
        },
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterMsg {
    Increment,
    Decrement,
}

pub fn counter_update() -> Update<i32, CounterMsg> {
    Rc::new(|msg, model| {
        let next = match msg {
            CounterMsg::Increment => model + 1,
            CounterMsg::Decrement => model - 1,
        };
        (next, Vec::new())
    })
}

pub fn counter_view() -> View<i32, CounterMsg, String> {
    Rc::new(|model, _dispatch| format!("count: {model}"))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToggleMsg {
    Flip,
}

pub fn toggle_update() -> Update<bool, ToggleMsg> {
    Rc::new(|msg, model| match msg {
        ToggleMsg::Flip => (!model, Vec::new()),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub enum TextMsg {
    /// Replace the text immediately.
    Set(String),
    /// Replace the text via a deferred effect that eventually yields `Set`.
    SetLater(String),
    /// Clear the text.
    Clear,
}

pub fn text_update() -> Update<String, TextMsg> {
    Rc::new(|msg, model| match msg {
        TextMsg::Set(text) => (text, Vec::new()),
        TextMsg::SetLater(text) => (model, vec![Effect::message(TextMsg::Set(text))]),
        TextMsg::Clear => (String::new(), Vec::new()),
    })
}

pub fn text_view() -> View<String, TextMsg, String> {
    Rc::new(|model, _dispatch| format!("[{model}]"))
}

/// Minimal runtime loop: dispatches every queued message through the
/// generic update operation, runs returned effects immediately, and feeds
/// the messages they produce back into the queue until it drains.
pub fn run_to_completion(mut model: Shell, mut queue: Vec<ShellMsg>) -> Shell {
    while !queue.is_empty() {
        let mut produced = Vec::new();
        for msg in queue {
            let ShellMsg::Part(message) = msg;
            let (next, effects) = partwise::update(ShellMsg::Part, message, model);
            model = next;
            for effect in effects {
                effect.run(|msg| produced.push(msg));
            }
        }
        queue = produced;
    }
    model
}
