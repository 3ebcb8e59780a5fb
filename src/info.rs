// glloader/src/info.rs
//
//! OpenGL version information.

use crate::error::Error;
use crate::gl;
use crate::gl::types::{GLenum, GLubyte};

use std::ffi::CStr;
use std::fmt::{self, Display, Formatter};
use std::mem;
use std::os::raw::{c_char, c_void};

/// Prefixes some implementations put in front of the numeric version, tried in order.
const VERSION_PREFIXES: [&str; 3] = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

type GetStringFn = unsafe extern "system" fn(GLenum) -> *const GLubyte;

/// An OpenGL version as reported by the driver.
///
/// Versions order by major number, then minor number, so `a >= b` reads as "`a` is at least
/// `b`".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor OpenGL version (e.g. 2 in 4.2).
    pub minor: u8,
}

impl GLVersion {
    /// The version of a context that hasn't been (successfully) loaded.
    pub const UNLOADED: GLVersion = GLVersion { major: 0, minor: 0 };

    /// Creates a GL version structure with the given major and minor version numbers.
    #[inline]
    pub const fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Returns true unless this is [`GLVersion::UNLOADED`].
    #[inline]
    pub fn is_loaded(&self) -> bool {
        *self != GLVersion::UNLOADED
    }

    /// Returns true if this version is `other` or newer.
    #[inline]
    pub fn at_least(&self, other: GLVersion) -> bool {
        self.major > other.major || (self.major == other.major && self.minor >= other.minor)
    }

    /// Parses the `major.minor` pair out of a `GL_VERSION` string.
    ///
    /// A known ES prefix is stripped first. Anything after the minor number (release number,
    /// vendor information) is ignored.
    pub fn parse(version_string: &str) -> Option<GLVersion> {
        let mut rest = version_string;
        for prefix in VERSION_PREFIXES {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                break;
            }
        }

        let (major, rest) = leading_number(rest)?;
        let rest = rest.strip_prefix('.')?;
        let (minor, _) = leading_number(rest)?;
        if major == 0 {
            return None;
        }
        Some(GLVersion { major, minor })
    }

    /// Resolves `glGetString` and asks the driver for its version.
    pub(crate) fn probe<F>(resolver: &mut F) -> Result<GLVersion, Error>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let address = resolver("glGetString");
        if address.is_null() {
            return Err(Error::GLFunctionNotFound("glGetString"));
        }

        unsafe {
            let get_string: GetStringFn = mem::transmute(address);
            let version_string = get_string(gl::VERSION);
            if version_string.is_null() {
                return Err(Error::NoVersionString);
            }
            let version_string = CStr::from_ptr(version_string as *const c_char).to_string_lossy();
            if version_string.is_empty() {
                return Err(Error::NoVersionString);
            }
            match GLVersion::parse(&version_string) {
                Some(version) => Ok(version),
                None => Err(Error::InvalidVersionString(version_string.into_owned())),
            }
        }
    }
}

impl Display for GLVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// Reads a decimal number the way `%d` would: leading whitespace skipped, digits up to the first
// non-digit.
fn leading_number(string: &str) -> Option<(u8, &str)> {
    let string = string.trim_start();
    let end = string.find(|c: char| !c.is_ascii_digit()).unwrap_or(string.len());
    if end == 0 {
        return None;
    }
    let number = string[..end].parse().ok()?;
    Some((number, &string[end..]))
}
