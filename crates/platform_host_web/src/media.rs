//! Fetch-backed media-existence probe.

use platform_host::{MediaFuture, MediaProbeService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser probe that issues a `HEAD` request and reports whether the response status is OK.
pub struct WebMediaProbeService;

impl MediaProbeService for WebMediaProbeService {
    fn probe<'a>(&'a self, url: &'a str) -> MediaFuture<'a, bool> {
        Box::pin(async move { imp::head_ok(url).await.unwrap_or(false) })
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{RequestInit, Response};

    use crate::interop::js_error_to_string;

    pub async fn head_ok(url: &str) -> Result<bool, String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let init = RequestInit::new();
        init.set_method("HEAD");
        let value = JsFuture::from(window.fetch_with_str_and_init(url, &init))
            .await
            .map_err(js_error_to_string)?;
        let response: Response = value.dyn_into().map_err(js_error_to_string)?;
        Ok(response.ok())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub async fn head_ok(_url: &str) -> Result<bool, String> {
        Err("fetch is only available when compiled for wasm32".to_string())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn probe_collapses_transport_failure_to_unreachable() {
        assert!(!block_on(WebMediaProbeService.probe("music/track1.mp3")));
    }
}
