//! Descriptor model handed to the stub compilers by a type introspector.
//!
//! Introspectors resolve an interface's full member surface (methods,
//! properties, indexers, events, overloads, by-reference parameters) into
//! the plain value objects in this crate. All type names arrive fully
//! qualified and generically instantiated; downstream compilers compose
//! them as opaque strings.

pub mod descriptor;
pub mod error;
pub mod json;

pub use descriptor::{
    InterfaceDescriptor, MemberDescriptor, MemberKind, ParamDirection, ParameterDescriptor,
};
pub use error::{DescriptorError, DescriptorResult};
pub use json::{from_json, to_json};
