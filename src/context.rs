// glloader/src/context.rs
//
//! The loader context: everything one load cycle produces.

use crate::capabilities::Capabilities;
use crate::entry_points::EntryPoints;
use crate::error::Error;
use crate::extensions::ExtensionSet;
use crate::info::GLVersion;
use crate::interception::{self, Call, CallArgs, CallHook, Invoke};

#[cfg(system_library)]
use crate::platform::Library;

use std::fmt::{self, Debug, Formatter};
use std::os::raw::c_void;

/// A loaded set of GL entry points, together with what the driver reported about itself.
///
/// Each context is independent: several can coexist in one process, e.g. one per GL context
/// of a multi-context application. Loading mutates the context, so a context must not be used
/// from another thread while it is being (re)loaded.
pub struct Gl {
    version: GLVersion,
    capabilities: Capabilities,
    entry_points: Box<EntryPoints>,
    extensions: ExtensionSet,
    pre_call: CallHook,
    post_call: CallHook,
    #[cfg(system_library)]
    library: Option<Library>,
}

/// Loads a new context from `resolver`. See [`Gl::load_with`].
pub fn load_with<F>(resolver: F) -> Result<Gl, Error>
where
    F: FnMut(&str) -> *const c_void,
{
    Gl::load_with(resolver)
}

impl Gl {
    fn unloaded() -> Gl {
        Gl {
            version: GLVersion::UNLOADED,
            capabilities: Capabilities::empty(),
            entry_points: Box::default(),
            extensions: ExtensionSet::default(),
            pre_call: Box::new(interception::default_pre_call),
            post_call: Box::new(interception::default_post_call),
            #[cfg(system_library)]
            library: None,
        }
    }

    /// Loads every entry point the running driver supports.
    ///
    /// `resolver` maps a command name such as `"glClear"` to its address, or to null when the
    /// command is unavailable. It is only called during this function. The GL context the
    /// resolver belongs to must be current.
    ///
    /// Only a missing `glGetString`, a missing or unparseable version string, and a failure
    /// to list extensions are errors. Any other missing entry point just leaves its slot empty.
    pub fn load_with<F>(resolver: F) -> Result<Gl, Error>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let mut gl = Gl::unloaded();
        gl.reload_with(resolver)?;
        Ok(gl)
    }

    /// Opens the platform's GL library and loads from it.
    ///
    /// The library stays open for as long as the context exists.
    #[cfg(system_library)]
    pub fn load() -> Result<Gl, Error> {
        let library = Library::open()?;
        let mut gl = Gl::unloaded();
        gl.reload_with(|name| library.get_proc_address(name))?;
        gl.library = Some(library);
        Ok(gl)
    }

    /// Runs a whole load cycle again, replacing everything the previous one produced.
    ///
    /// All slots, the version and the extension set are cleared first. On error the context
    /// is left as far as the cycle got: [`Gl::version`] is [`GLVersion::UNLOADED`] if the
    /// version couldn't be determined, and the slots must not be relied upon either way. Call
    /// hooks are kept.
    pub fn reload_with<F>(&mut self, mut resolver: F) -> Result<(), Error>
    where
        F: FnMut(&str) -> *const c_void,
    {
        self.version = GLVersion::UNLOADED;
        self.capabilities = Capabilities::empty();
        *self.entry_points = EntryPoints::default();
        self.extensions = ExtensionSet::default();

        let version = GLVersion::probe(&mut resolver)?;
        self.version = version;
        self.capabilities = Capabilities::from_version(version);
        debug!(
            "GL version {} (loading up to {})",
            version,
            Capabilities::max_loaded_version(version)
        );

        for (unit, _) in Capabilities::known_versions() {
            self.entry_points.load_version(self.capabilities, unit, &mut resolver);
        }

        self.extensions = ExtensionSet::enumerate(&self.entry_points, self.capabilities)?;
        for &extension in EntryPoints::tracked_extensions() {
            if self.extensions.contains(extension) {
                self.entry_points.load_extension(extension, &mut resolver);
            }
        }

        debug!(
            "loaded {} of {} GL entry points, {} extensions",
            self.entry_points.loaded_count(),
            EntryPoints::slot_count(),
            self.extensions.len()
        );
        Ok(())
    }

    /// The version the driver reported, or [`GLVersion::UNLOADED`].
    #[inline]
    pub fn version(&self) -> GLVersion {
        self.version
    }

    /// The version flags derived from [`Gl::version`].
    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// [`Gl::version`] clamped to the newest version this crate knows about.
    #[inline]
    pub fn max_loaded_version(&self) -> GLVersion {
        Capabilities::max_loaded_version(self.version)
    }

    /// Returns true if the driver implements the known GL version `version` or newer.
    #[inline]
    pub fn supports(&self, version: GLVersion) -> bool {
        self.capabilities.supports(version)
    }

    /// The entry point table.
    #[inline]
    pub fn entry_points(&self) -> &EntryPoints {
        &self.entry_points
    }

    /// The extensions the driver advertised.
    #[inline]
    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// Returns true if the driver advertised the extension `name`.
    #[inline]
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Replaces the hook that runs before every call made through [`Gl::call`].
    pub fn set_pre_call_hook<H>(&mut self, hook: H)
    where
        H: Fn(&Call<'_>) + Send + Sync + 'static,
    {
        self.pre_call = Box::new(hook);
    }

    /// Replaces the hook that runs after every call made through [`Gl::call`].
    pub fn set_post_call_hook<H>(&mut self, hook: H)
    where
        H: Fn(&Call<'_>) + Send + Sync + 'static,
    {
        self.post_call = Box::new(hook);
    }

    /// Restores the default hooks: nothing before a call, a `glGetError` check after it.
    pub fn reset_call_hooks(&mut self) {
        self.pre_call = Box::new(interception::default_pre_call);
        self.post_call = Box::new(interception::default_post_call);
    }

    /// Calls `function` with `args`, running the pre-call hook before and the post-call hook
    /// after.
    ///
    /// `function` is normally a slot of [`Gl::entry_points`]; an empty slot is reported as
    /// [`Error::GLFunctionNotFound`] without running either hook.
    ///
    /// # Safety
    ///
    /// The same as calling `function` directly: its GL context must be current and `args`
    /// must be valid for it.
    pub unsafe fn call<F, Args>(
        &self,
        name: &'static str,
        function: Option<F>,
        args: Args,
    ) -> Result<F::Output, Error>
    where
        F: Invoke<Args>,
        Args: CallArgs + Copy,
    {
        let function = function.ok_or(Error::GLFunctionNotFound(name))?;
        let call = Call {
            name,
            address: function.address(),
            args: &args,
            entry_points: &self.entry_points,
        };
        (self.pre_call)(&call);
        let output = function.invoke(args);
        (self.post_call)(&call);
        Ok(output)
    }
}

impl Debug for Gl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gl")
            .field("version", &self.version)
            .field("capabilities", &self.capabilities)
            .field("entry_points", &self.entry_points)
            .field("extensions", &self.extensions.len())
            .finish()
    }
}
