// glloader/src/entry_points.rs
//
//! The table of GL entry points and the loader units that fill it.
//!
//! The slots and the partition of commands into units are generated from the Khronos registry
//! by the build script. A version unit holds the commands a GL version introduced; an extension
//! unit holds the commands a tracked extension adds.

use crate::capabilities::Capabilities;
#[allow(unused_imports)]
use crate::gl::types;

use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::os::raw::c_void;
use std::ptr;

// Registry type strings spell `void *` as `__gl_imports::raw::c_void`.
#[allow(unused_imports)]
mod __gl_imports {
    pub use std::os::raw;
}

macro_rules! gl_entry_points {
    (
        fields {
            $($field:ident: fn($($arg:ty),*) -> $ret:ty,)*
        }
        versions {
            $($version:ident => [$($version_entry:ident,)*],)*
        }
        extensions {
            $($extension:literal => [$($extension_entry:ident,)*],)*
        }
    ) => {
        /// One nullable slot per GL entry point, named after the command without its `gl`
        /// prefix.
        ///
        /// A slot is `Some` only if the unit owning it was enabled during the last load and the
        /// resolver produced an address for it. Check before calling anything that isn't
        /// guaranteed by [`crate::Gl::version`].
        #[allow(non_snake_case)]
        #[derive(Clone, Copy, Default)]
        pub struct EntryPoints {
            $(
                pub $field: Option<unsafe extern "system" fn($($arg),*) -> $ret>,
            )*
        }

        static EXTENSION_UNITS: &[&str] = &[$($extension,)*];

        impl EntryPoints {
            // Returns the number of slots in the unit that resolved to something.
            fn resolve_version_unit<F>(&mut self, unit: Capabilities, resolver: &mut F) -> usize
            where
                F: FnMut(&str) -> *const c_void,
            {
                let mut resolved = 0;
                $(
                    if unit == Capabilities::$version {
                        $(
                            self.$version_entry = unsafe {
                                mem::transmute(resolver(concat!("gl", stringify!($version_entry))))
                            };
                            if self.$version_entry.is_some() {
                                resolved += 1;
                            }
                        )*
                    }
                )*
                resolved
            }

            fn resolve_extension_unit<F>(&mut self, extension: &str, resolver: &mut F) -> usize
            where
                F: FnMut(&str) -> *const c_void,
            {
                let mut resolved = 0;
                $(
                    if extension == $extension {
                        $(
                            self.$extension_entry = unsafe {
                                mem::transmute(resolver(concat!("gl", stringify!($extension_entry))))
                            };
                            if self.$extension_entry.is_some() {
                                resolved += 1;
                            }
                        )*
                    }
                )*
                resolved
            }

            /// The names of the entry points introduced by the version behind `unit`.
            ///
            /// `unit` must be a single flag; anything else yields an empty list.
            pub fn version_unit_names(unit: Capabilities) -> &'static [&'static str] {
                $(
                    if unit == Capabilities::$version {
                        return &[$(concat!("gl", stringify!($version_entry)),)*];
                    }
                )*
                &[]
            }

            /// The names of the entry points a tracked extension adds.
            ///
            /// Untracked extensions yield an empty list.
            pub fn extension_unit_names(extension: &str) -> &'static [&'static str] {
                $(
                    if extension == $extension {
                        return &[$(concat!("gl", stringify!($extension_entry)),)*];
                    }
                )*
                &[]
            }

            /// Returns true if the slot for the command `name` (e.g. `"glClear"`) is populated.
            pub fn is_loaded(&self, name: &str) -> bool {
                match name {
                    $(concat!("gl", stringify!($field)) => self.$field.is_some(),)*
                    _ => false,
                }
            }

            /// The address stored for the command `name`, or null.
            pub fn address(&self, name: &str) -> *const c_void {
                match name {
                    $(
                        concat!("gl", stringify!($field)) => {
                            self.$field.map_or(ptr::null(), |function| function as *const c_void)
                        }
                    )*
                    _ => ptr::null(),
                }
            }

            /// The names of every populated slot, in registry order.
            pub fn loaded_names(&self) -> Vec<&'static str> {
                let mut names = vec![];
                $(
                    if self.$field.is_some() {
                        names.push(concat!("gl", stringify!($field)));
                    }
                )*
                names
            }

            /// The number of slots in the table, populated or not.
            pub fn slot_count() -> usize {
                [$(stringify!($field),)*].len()
            }
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/gl_entry_points.rs"));

impl EntryPoints {
    /// Resolves every entry point of the version unit `unit` if `capabilities` enables it.
    ///
    /// Each slot is overwritten with whatever the resolver returns, so a missing symbol leaves
    /// its slot empty without affecting its siblings.
    pub(crate) fn load_version<F>(
        &mut self,
        capabilities: Capabilities,
        unit: Capabilities,
        resolver: &mut F,
    ) where
        F: FnMut(&str) -> *const c_void,
    {
        if !capabilities.contains(unit) {
            return;
        }
        let resolved = self.resolve_version_unit(unit, resolver);
        trace!(
            "resolved {} of {} entry points for {:?}",
            resolved,
            EntryPoints::version_unit_names(unit).len(),
            unit
        );
    }

    /// Resolves every entry point of the tracked extension `extension`.
    pub(crate) fn load_extension<F>(&mut self, extension: &str, resolver: &mut F)
    where
        F: FnMut(&str) -> *const c_void,
    {
        let resolved = self.resolve_extension_unit(extension, resolver);
        trace!(
            "resolved {} of {} entry points for {}",
            resolved,
            EntryPoints::extension_unit_names(extension).len(),
            extension
        );
    }

    /// Extensions that come with their own loader unit.
    pub fn tracked_extensions() -> &'static [&'static str] {
        EXTENSION_UNITS
    }

    /// The number of populated slots.
    pub fn loaded_count(&self) -> usize {
        self.loaded_names().len()
    }
}

impl Debug for EntryPoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoints")
            .field("loaded", &self.loaded_count())
            .field("slots", &EntryPoints::slot_count())
            .finish()
    }
}
