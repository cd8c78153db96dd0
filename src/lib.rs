//! Composition algebra for building a hierarchical application state
//! machine out of independently defined components.
//!
//! Each component supplies a pure update function and a view function over
//! its own private model and message types. This crate embeds many such
//! components inside one shared parent model, routes messages to the right
//! component, and distinguishes sibling instances by hierarchical index
//! path, without the parent ever naming a child's types.
//!
//! # Architecture
//!
//! ```text
//! child Msg ──→ pack ──→ Message<C> ──→ update ──→ (C', effects)
//!                            │                         │
//!                   Lens<C, M> projection      re-tagged for the
//!                   applies the child's        outer runtime, still
//!                   own update function        routing to the child
//! ```
//!
//! - **Lens**: getter/setter pair scoping the parent model to one child
//! - **Index / Indexed**: addressing and storage for repeated instances
//! - **Message**: uniform boxed message carrying its own update function
//! - **Effect**: opaque deferred work, executed only by the outer runtime
//!
//! Everything is a synchronous, pure transformation of immutable values;
//! the crate performs no I/O and executes no effects.

mod effect;
mod embed;
mod index;
mod indexed;
mod lens;
mod message;
mod part;

pub use effect::Effect;
pub use embed::{embed_update, embed_view, Dispatch, Update, View};
pub use index::{Index, IndexParseError};
pub use indexed::{indexed, Indexed};
pub use lens::{Getter, Lens, Setter};
pub use message::{pack, update, Message};
pub use part::{accessors, create, create1, Accessors};
