//! C# stub compiler
//!
//! Translates the resolved member surface of an interface into the source
//! text of a concrete stub type: every method, property, indexer, and
//! event of the interface is implemented by forwarding to a
//! runtime-replaceable callback slot, so tests can script behavior member
//! by member without writing a class.
//!
//! The translation is deterministic and collision-safe — overloads are
//! disambiguated with sanitized parameter-type suffixes, and a signature
//! inherited through several interface paths is backed by a single shared
//! field with one forwarding body per declaring type. The runtime
//! semantics of the emitted `StubValue`/`StubEventHandlers` references are
//! defined by the `understudy-wrappers` crate.
//!
//! ## Example
//!
//! ```rust
//! use understudy_compiler_csharp::{compile_stub_type, CompileOptions};
//! use understudy_model::{InterfaceDescriptor, MemberDescriptor, ParameterDescriptor};
//!
//! let interface = InterfaceDescriptor::new("Acme.IWidget", "IWidget").with_members(vec![
//!     MemberDescriptor::method(
//!         "Resize",
//!         "Acme.IWidget",
//!         "void",
//!         vec![ParameterDescriptor::input("Int32", "width")],
//!     ),
//! ]);
//!
//! let source = compile_stub_type(&interface, CompileOptions::default()).unwrap();
//! assert!(source.contains("public class StubIWidget : Acme.IWidget"));
//! assert!(source.contains("public Action<Int32> Resize;"));
//! ```

pub mod compiler;
pub mod context;
pub mod naming;
pub mod registry;

pub use compiler::{compile_stub_type, compile_stub_type_from_json, CompileError};
pub use context::{CompileOptions, Context};
pub use naming::{identifier_fragment, sanitize_type_name};
pub use registry::{FieldBinding, SignatureRegistry};
