// glloader/src/error.rs
//
//! Various errors that loading can produce.

use std::error;
use std::fmt::{self, Display, Formatter};

/// Various errors that loading and calling through a [`crate::Gl`] context can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
    /// Looking up an OpenGL function address failed, or the entry point was never loaded.
    ///
    /// During loading this only happens for `glGetString`, which everything else depends on.
    GLFunctionNotFound(&'static str),
    /// `glGetString(GL_VERSION)` returned nothing.
    NoVersionString,
    /// The version string didn't contain a `major.minor` pair.
    InvalidVersionString(String),
    /// The entry points needed to list extensions weren't loaded.
    ExtensionQueryUnavailable,
    /// Storage for the extension names couldn't be allocated.
    ExtensionStorageExhausted,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Error::NoGLLibraryFound => f.write_str("no OpenGL library found"),
            Error::GLFunctionNotFound(name) => write!(f, "OpenGL function `{}` not found", name),
            Error::NoVersionString => f.write_str("the driver returned no version string"),
            Error::InvalidVersionString(ref string) => {
                write!(f, "couldn't parse OpenGL version string {:?}", string)
            }
            Error::ExtensionQueryUnavailable => {
                f.write_str("the entry points for listing extensions aren't loaded")
            }
            Error::ExtensionStorageExhausted => {
                f.write_str("couldn't allocate storage for the extension list")
            }
        }
    }
}

impl error::Error for Error {}
