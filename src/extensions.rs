// glloader/src/extensions.rs
//
//! The set of extensions a driver advertises.

use crate::capabilities::Capabilities;
use crate::entry_points::EntryPoints;
use crate::error::Error;
use crate::gl;
use crate::gl::types::{GLint, GLuint};

use std::ffi::CStr;
use std::os::raw::c_char;

/// The extensions supported by the driver, in whichever form the driver reported them.
///
/// Drivers older than GL 3.0 report one space-separated string; newer ones report each name
/// individually by index.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtensionSet {
    /// The result of `glGetString(GL_EXTENSIONS)`.
    Legacy(String),
    /// The results of `glGetStringi(GL_EXTENSIONS, i)`. An index the driver returned null for
    /// is `None`.
    Indexed(Vec<Option<String>>),
}

impl Default for ExtensionSet {
    fn default() -> ExtensionSet {
        ExtensionSet::Indexed(vec![])
    }
}

impl ExtensionSet {
    /// Queries the driver through entry points that have already been loaded.
    ///
    /// The strategy is chosen by whether `capabilities` includes GL 3.0.
    pub(crate) fn enumerate(
        entry_points: &EntryPoints,
        capabilities: Capabilities,
    ) -> Result<ExtensionSet, Error> {
        if capabilities.contains(Capabilities::VERSION_3_0) {
            ExtensionSet::enumerate_indexed(entry_points)
        } else {
            ExtensionSet::enumerate_legacy(entry_points)
        }
    }

    fn enumerate_legacy(entry_points: &EntryPoints) -> Result<ExtensionSet, Error> {
        let get_string = entry_points.GetString.ok_or(Error::ExtensionQueryUnavailable)?;
        unsafe {
            let extensions = get_string(gl::EXTENSIONS);
            if extensions.is_null() {
                return Ok(ExtensionSet::Legacy(String::new()));
            }
            let extensions = CStr::from_ptr(extensions as *const c_char);
            Ok(ExtensionSet::Legacy(extensions.to_string_lossy().into_owned()))
        }
    }

    fn enumerate_indexed(entry_points: &EntryPoints) -> Result<ExtensionSet, Error> {
        let (get_integerv, get_stringi) = match (entry_points.GetIntegerv, entry_points.GetStringi) {
            (Some(get_integerv), Some(get_stringi)) => (get_integerv, get_stringi),
            _ => return Err(Error::ExtensionQueryUnavailable),
        };

        unsafe {
            let mut count: GLint = 0;
            get_integerv(gl::NUM_EXTENSIONS, &mut count);
            let count = count.max(0) as usize;

            let mut names = Vec::new();
            names
                .try_reserve_exact(count)
                .map_err(|_| Error::ExtensionStorageExhausted)?;
            for index in 0..count {
                let name = get_stringi(gl::EXTENSIONS, index as GLuint);
                if name.is_null() {
                    names.push(None);
                    continue;
                }
                let name = CStr::from_ptr(name as *const c_char);
                names.push(copy_name(name.to_bytes()));
            }
            Ok(ExtensionSet::Indexed(names))
        }
    }

    /// Returns true if `name` is one of the advertised extensions.
    ///
    /// Only whole names match: `"ARB_foo"` is not in `"GL_ARB_foo GL_ARB_foobar"`.
    pub fn contains(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        match *self {
            ExtensionSet::Legacy(ref extensions) => {
                extensions.split(' ').any(|extension| extension == name)
            }
            ExtensionSet::Indexed(ref extensions) => {
                extensions.iter().flatten().any(|extension| extension == name)
            }
        }
    }

    /// Iterates over the advertised extension names.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match *self {
            ExtensionSet::Legacy(ref extensions) => {
                Box::new(extensions.split(' ').filter(|extension| !extension.is_empty()))
            }
            ExtensionSet::Indexed(ref extensions) => {
                Box::new(extensions.iter().flatten().map(|extension| extension.as_str()))
            }
        }
    }

    /// The number of advertised extension names.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no extension is advertised.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns true if the set came from the single-string query.
    pub fn is_legacy(&self) -> bool {
        matches!(*self, ExtensionSet::Legacy(_))
    }
}

// Copies one driver-owned name. A name that can't be allocated is stored as missing instead of
// failing the whole enumeration.
pub(crate) fn copy_name(bytes: &[u8]) -> Option<String> {
    let name = String::from_utf8_lossy(bytes);
    let mut copy = String::new();
    copy.try_reserve_exact(name.len()).ok()?;
    copy.push_str(&name);
    Some(copy)
}
