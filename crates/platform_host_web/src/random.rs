//! `Math.random`-backed randomness.

use platform_host::RandomSource;

#[derive(Debug, Clone, Copy, Default)]
/// Browser randomness source.
pub struct WebRandomSource;

impl RandomSource for WebRandomSource {
    fn next_unit(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0.0
        }
    }
}
