// glloader/src/macros.rs
//
//! Macros.

/// Calls a GL entry point through a [`Gl`](crate::Gl) context, running its call hooks.
///
/// `gl_call!(gl, Clear(mask))` is `gl.call("glClear", gl.entry_points().Clear, (mask,))` and
/// evaluates to a `Result` that is `Err(Error::GLFunctionNotFound(..))` when the slot is empty.
/// Must be used inside an `unsafe` block.
#[macro_export]
macro_rules! gl_call {
    ($gl:expr, $function:ident($($arg:expr),* $(,)?)) => {{
        let gl: &$crate::Gl = &$gl;
        gl.call(
            concat!("gl", stringify!($function)),
            gl.entry_points().$function,
            ($($arg,)*),
        )
    }};
}
