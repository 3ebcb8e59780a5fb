// glloader/src/platform/windows/loader.rs
//
//! OpenGL function pointer loading via `opengl32.dll`.

use crate::error::Error;

use std::ffi::CString;
use std::mem;
use std::os::raw::{c_char, c_void};
use std::ptr;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi;
use winapi::um::winnt::LPCSTR;

type WglGetProcAddressFn = unsafe extern "system" fn(LPCSTR) -> *const c_void;

/// An open handle to `opengl32.dll`.
///
/// Addresses resolved through it stay valid until it is dropped.
pub struct Library {
    module: HMODULE,
    wgl_get_proc_address: Option<WglGetProcAddressFn>,
}

// `GetProcAddress` and `wglGetProcAddress` may be called from any thread.
unsafe impl Send for Library {}
unsafe impl Sync for Library {}

impl Library {
    /// Opens `opengl32.dll`.
    pub fn open() -> Result<Library, Error> {
        unsafe {
            let module = libloaderapi::LoadLibraryA(&b"opengl32.dll\0"[0] as *const u8 as LPCSTR);
            if module.is_null() {
                return Err(Error::NoGLLibraryFound);
            }
            let wgl_get_proc_address = libloaderapi::GetProcAddress(
                module,
                &b"wglGetProcAddress\0"[0] as *const u8 as LPCSTR,
            );
            debug!("opened opengl32.dll");
            Ok(Library {
                module,
                wgl_get_proc_address: mem::transmute(wgl_get_proc_address),
            })
        }
    }

    /// Resolves `symbol_name`, or returns null.
    ///
    /// `wglGetProcAddress` only knows about entry points beyond GL 1.1, and may return small
    /// sentinel values instead of null on failure, so those fall back to the DLL's exports.
    pub fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        let symbol_ptr = symbol_name.as_ptr() as *const c_char as LPCSTR;
        unsafe {
            if let Some(wgl_get_proc_address) = self.wgl_get_proc_address {
                let address = wgl_get_proc_address(symbol_ptr);
                if !matches!(address as isize, -1 | 0 | 1 | 2 | 3) {
                    return address;
                }
            }
            libloaderapi::GetProcAddress(self.module, symbol_ptr) as *const c_void
        }
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        unsafe {
            libloaderapi::FreeLibrary(self.module);
        }
    }
}
