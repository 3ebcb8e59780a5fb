// glloader/src/platform/unix/mod.rs
//
//! Unix (`dlopen`-based) library loading.

pub mod loader;
