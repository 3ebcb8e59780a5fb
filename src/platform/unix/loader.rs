// glloader/src/platform/unix/loader.rs
//
//! OpenGL function pointer loading via `dlopen`.

use crate::error::Error;

use libc::{dlclose, dlopen, dlsym, RTLD_GLOBAL, RTLD_NOW};
use std::ffi::CString;
use std::os::raw::{c_char, c_void};
use std::ptr::{self, NonNull};

#[cfg(macos)]
static LIBRARY_NAMES: [&[u8]; 4] = [
    b"../Frameworks/OpenGL.framework/OpenGL\0",
    b"/Library/Frameworks/OpenGL.framework/OpenGL\0",
    b"/System/Library/Frameworks/OpenGL.framework/OpenGL\0",
    b"/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL\0",
];

#[cfg(not(macos))]
static LIBRARY_NAMES: [&[u8]; 2] = [b"libGL.so.1\0", b"libGL.so\0"];

type GetProcAddressFn = unsafe extern "C" fn(*const c_char) -> *const c_void;

/// An open handle to the system GL library.
///
/// Addresses resolved through it stay valid until it is dropped.
pub struct Library {
    handle: NonNull<c_void>,
    get_proc_address: Option<GetProcAddressFn>,
}

// `dlsym` and `glXGetProcAddressARB` may be called from any thread.
unsafe impl Send for Library {}
unsafe impl Sync for Library {}

impl Library {
    /// Opens the first GL library found among the usual names for this platform.
    pub fn open() -> Result<Library, Error> {
        for name in LIBRARY_NAMES.iter() {
            let handle = unsafe { dlopen(name.as_ptr() as *const c_char, RTLD_NOW | RTLD_GLOBAL) };
            if let Some(handle) = NonNull::new(handle as *mut c_void) {
                debug!("opened {}", String::from_utf8_lossy(&name[..name.len() - 1]));
                let get_proc_address = unsafe { lookup_get_proc_address(handle) };
                return Ok(Library { handle, get_proc_address });
            }
        }
        Err(Error::NoGLLibraryFound)
    }

    /// Resolves `symbol_name`. Names containing NUL resolve to null.
    ///
    /// The window-system lookup function is asked first; plain `dlsym` is the fallback.
    /// `glXGetProcAddressARB` may hand out a dispatch stub for any `gl*` name, including ones
    /// the driver doesn't implement, so a non-null address says nothing about support. Only
    /// the version and extension gating in [`crate::Gl`] decides which addresses are usable.
    pub fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe {
            if let Some(get_proc_address) = self.get_proc_address {
                let address = get_proc_address(symbol_name.as_ptr());
                if !address.is_null() {
                    return address;
                }
            }
            dlsym(self.handle.as_ptr() as *mut _, symbol_name.as_ptr()) as *const c_void
        }
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        unsafe {
            dlclose(self.handle.as_ptr() as *mut _);
        }
    }
}

#[cfg(not(macos))]
unsafe fn lookup_get_proc_address(handle: NonNull<c_void>) -> Option<GetProcAddressFn> {
    let symbol_name = b"glXGetProcAddressARB\0".as_ptr() as *const c_char;
    let symbol = dlsym(handle.as_ptr() as *mut _, symbol_name);
    std::mem::transmute::<*mut c_void, Option<GetProcAddressFn>>(symbol as *mut c_void)
}

#[cfg(macos)]
unsafe fn lookup_get_proc_address(_: NonNull<c_void>) -> Option<GetProcAddressFn> {
    None
}
