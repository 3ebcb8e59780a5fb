// glloader/src/lib.rs
//
//! Runtime OpenGL entry-point loading.
//!
//! Given a resolver that maps a GL command name to an address, this crate figures out which GL
//! version the running driver implements, resolves every entry point that version (and every
//! version below it) introduces, and enumerates the extensions the driver advertises. The result
//! is a caller-owned [`Gl`] context with one strongly-typed, nullable slot per entry point.
//!
//! ```no_run
//! # fn resolver(_: &str) -> *const std::os::raw::c_void { std::ptr::null() }
//! let gl = glloader::Gl::load_with(resolver).unwrap();
//! if gl.version() >= glloader::GLVersion::new(3, 0) && gl.has_extension("GL_KHR_debug") {
//!     // ...
//! }
//! ```

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod error;
pub use crate::error::Error;

mod info;
pub use crate::info::GLVersion;

mod capabilities;
pub use crate::capabilities::Capabilities;

mod entry_points;
pub use crate::entry_points::EntryPoints;

mod extensions;
pub use crate::extensions::ExtensionSet;

pub mod interception;
pub use crate::interception::{Call, CallArgs, CallHook, Invoke};

mod context;
pub use crate::context::{load_with, Gl};

#[cfg(system_library)]
pub mod platform;
#[cfg(system_library)]
pub use crate::platform::Library;

/// GL types and enum constants generated from the Khronos registry.
///
/// This also holds `gl_generator`'s stock struct of function pointers, which loads everything
/// unconditionally. [`Gl`] is the version-gated counterpart.
#[allow(clippy::all, non_upper_case_globals, non_snake_case, dead_code)]
pub mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}
