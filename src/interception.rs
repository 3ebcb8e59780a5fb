// glloader/src/interception.rs
//
//! Calling entry points with pre-call and post-call hooks.
//!
//! Instead of one wrapper per entry point, every call goes through [`Invoke`], which is
//! implemented once per arity for `unsafe extern "system" fn` pointers. See
//! [`crate::Gl::call`] and the [`gl_call!`](crate::gl_call) macro.

use crate::entry_points::EntryPoints;
use crate::gl;

use std::fmt::{self, Debug, Formatter};
use std::os::raw::c_void;

/// A hook run around intercepted calls. Installing a hook replaces the previous one.
pub type CallHook = Box<dyn Fn(&Call<'_>) + Send + Sync>;

/// What a hook learns about an intercepted call.
pub struct Call<'a> {
    /// The GL command name, e.g. `"glClear"`.
    pub name: &'static str,
    /// The resolved address being called.
    pub address: *const c_void,
    /// The arguments of the call.
    pub args: &'a dyn CallArgs,
    /// The table the call was made through, e.g. to query `glGetError` after the call.
    pub entry_points: &'a EntryPoints,
}

impl<'a> Debug for Call<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        let mut first = true;
        let mut result = Ok(());
        self.args.visit(&mut |arg| {
            if result.is_err() {
                return;
            }
            if !first {
                result = f.write_str(", ");
            }
            first = false;
            if result.is_ok() {
                result = write!(f, "{:?}", arg);
            }
        });
        result?;
        f.write_str(")")
    }
}

/// An argument tuple whose members can be shown to hooks.
pub trait CallArgs {
    /// Calls `visitor` once per argument, in order.
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Debug));

    /// The number of arguments.
    fn count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }
}

/// A function pointer that can be called with the argument tuple `Args`.
pub trait Invoke<Args>: Copy {
    /// The return type of the function.
    type Output;

    /// Calls the function.
    ///
    /// # Safety
    ///
    /// The pointer must address a live function with this signature, and `args` must satisfy
    /// that function's own contract.
    unsafe fn invoke(self, args: Args) -> Self::Output;

    /// The address of the function.
    fn address(self) -> *const c_void;
}

macro_rules! impl_invoke {
    ($($arg:ident: $ty:ident),*) => {
        impl<R, $($ty),*> Invoke<($($ty,)*)> for unsafe extern "system" fn($($ty),*) -> R {
            type Output = R;

            #[inline]
            unsafe fn invoke(self, ($($arg,)*): ($($ty,)*)) -> R {
                (self)($($arg),*)
            }

            #[inline]
            fn address(self) -> *const c_void {
                self as *const c_void
            }
        }

        impl<$($ty: Debug),*> CallArgs for ($($ty,)*) {
            #[allow(unused_variables)]
            fn visit(&self, visitor: &mut dyn FnMut(&dyn Debug)) {
                let ($($arg,)*) = self;
                $(visitor($arg);)*
            }
        }
    };
}

impl_invoke!();
impl_invoke!(a: A);
impl_invoke!(a: A, b: B);
impl_invoke!(a: A, b: B, c: C);
impl_invoke!(a: A, b: B, c: C, d: D);
impl_invoke!(a: A, b: B, c: C, d: D, e: E);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L, m: M);
impl_invoke!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L, m: M, n: N);
impl_invoke!(
    a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L, m: M, n: N, o: O
);

/// The default pre-call hook. Does nothing.
pub fn default_pre_call(_: &Call<'_>) {}

/// The most error flags the default post-call hook reads after a single call.
///
/// A lost context can keep reporting an error forever.
pub const MAX_DRAINED_ERRORS: usize = 16;

/// The default post-call hook.
///
/// Drains `glGetError` after every call (except `glGetError` itself), logging each non-zero
/// code, until it reports `GL_NO_ERROR` or [`MAX_DRAINED_ERRORS`] codes have been read.
pub fn default_post_call(call: &Call<'_>) {
    if call.name == "glGetError" {
        return;
    }
    let get_error = match call.entry_points.GetError {
        Some(get_error) => get_error,
        None => return,
    };
    for _ in 0..MAX_DRAINED_ERRORS {
        let error = unsafe { get_error() };
        if error == gl::NO_ERROR {
            return;
        }
        error!("GL error {:#06x} in {:?}", error, call);
    }
}
