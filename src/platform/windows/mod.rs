// glloader/src/platform/windows/mod.rs
//
//! Windows (`LoadLibrary`-based) library loading.

pub mod loader;
