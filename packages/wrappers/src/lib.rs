//! Runtime wrapper containers for stub instances
//!
//! Generated stub types do not contain real logic; their properties and
//! events are backed by small value containers owned by the stub
//! instance. This crate defines those containers and their observable
//! semantics, independent of any code generator:
//!
//! - [`ValueHolder`]: stands in for a property — read, write, and
//!   value-conversion so assignment reads like plain-field assignment.
//! - [`HandlerList`]: stands in for an event — add, remove, an
//!   enumerable view, and invocation of every registered handler in
//!   registration order.
//!
//! Instances are single-threaded; callers that share stubs across
//! threads own the synchronization.

pub mod handlers;
pub mod holder;

pub use handlers::{Handler, HandlerList};
pub use holder::ValueHolder;
