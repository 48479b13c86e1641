//! Runtime type registry and dynamic invocation.
//!
//! Types enroll their fields, constructors and methods into a registry at
//! startup; from then on they can be resolved by name, introspected, and
//! driven dynamically: construct instances, read and write fields, and
//! invoke methods, including non-public members behind an explicit
//! visibility bypass.
//!
//! ```no_run
//! use reflect_rs::core::instance::Instance;
//! use reflect_rs::core::value::{TypeTag, Val};
//! use reflect_rs::runtime::builder::TypeBuilder;
//! use reflect_rs::runtime::registry;
//!
//! fn init(instance: &mut Instance, args: &[Val]) -> Result<(), String> {
//!     instance.set("name", args[0].clone());
//!     Ok(())
//! }
//!
//! registry::register_global(
//!     TypeBuilder::new("demo.Greeter")
//!         .private_field("name", TypeTag::Str, Val::Null)
//!         .constructor(&[TypeTag::Str], init)
//!         .build(),
//! );
//!
//! let class = registry::resolve_global("demo.Greeter")?;
//! let ctor = class.constructor(&[TypeTag::Str])?;
//! let instance = ctor.construct(&[Val::str("Udit")])?;
//! # Ok::<(), reflect_rs::reflect::error::ReflectError>(())
//! ```

pub mod core;
pub mod reflect;
pub mod runtime;
