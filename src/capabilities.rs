// glloader/src/capabilities.rs
//
//! Which GL versions a context supports.

use crate::info::GLVersion;

macro_rules! gl_versions {
    ($($flag:ident = ($major:literal, $minor:literal) @ $bit:literal,)*) => {
        bitflags! {
            /// One flag per known GL version, set when the running driver implements that
            /// version or a newer one.
            ///
            /// The set is always downward closed: if `VERSION_3_3` is set, so is every flag
            /// below it.
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub struct Capabilities: u32 {
                $(
                    const $flag = 1 << $bit;
                )*
            }
        }

        static KNOWN_VERSIONS: &[(Capabilities, GLVersion)] = &[
            $((Capabilities::$flag, GLVersion::new($major, $minor)),)*
        ];
    };
}

include!(concat!(env!("OUT_DIR"), "/gl_versions.rs"));

impl Capabilities {
    /// Computes the flags for a driver reporting `version`.
    ///
    /// [`GLVersion::UNLOADED`] yields the empty set.
    pub fn from_version(version: GLVersion) -> Capabilities {
        let mut capabilities = Capabilities::empty();
        for &(flag, known) in KNOWN_VERSIONS {
            if version.at_least(known) {
                capabilities |= flag;
            }
        }
        capabilities
    }

    /// Returns true if the flag for the known version `version` is set.
    ///
    /// Versions the loader doesn't know about are never supported.
    pub fn supports(&self, version: GLVersion) -> bool {
        KNOWN_VERSIONS
            .iter()
            .find(|&&(_, known)| known == version)
            .map_or(false, |&(flag, _)| self.contains(flag))
    }

    /// The newest version among the set flags, if any.
    pub fn highest(&self) -> Option<GLVersion> {
        KNOWN_VERSIONS
            .iter()
            .rev()
            .find(|&&(flag, _)| self.contains(flag))
            .map(|&(_, version)| version)
    }

    /// Every version the loader knows about, oldest first, paired with its flag.
    pub fn known_versions() -> impl Iterator<Item = (Capabilities, GLVersion)> {
        KNOWN_VERSIONS.iter().copied()
    }

    /// The newest version the loader knows about.
    pub fn newest_known_version() -> GLVersion {
        KNOWN_VERSIONS[KNOWN_VERSIONS.len() - 1].1
    }

    /// Clamps a detected version to the newest version the loader knows about.
    ///
    /// A driver newer than this loader is treated as the newest known version when deciding
    /// which version-specific entry points are worth calling.
    pub fn max_loaded_version(version: GLVersion) -> GLVersion {
        let newest = Capabilities::newest_known_version();
        if version.at_least(newest) {
            newest
        } else {
            version
        }
    }
}
