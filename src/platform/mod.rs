// glloader/src/platform/mod.rs
//
//! Opening the platform's GL library.
//!
//! This is a convenience for callers without a window-system binding of their own. The loader
//! itself only ever sees the resulting resolver.

#[cfg(unix_library)]
pub mod unix;
#[cfg(unix_library)]
pub use self::unix::loader::Library;

#[cfg(windows_library)]
pub mod windows;
#[cfg(windows_library)]
pub use self::windows::loader::Library;
