//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer: `fetch`-based media probing, an
//! `HTMLAudioElement` output stream, and `Math.random`. Non-`wasm32` builds compile to inert
//! stand-ins so the workspace tests run natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod interop;
pub mod media;
pub mod playback;
pub mod random;

pub use adapters::{
    audio_playback_service, build_host_services, host_strategy_name, media_probe_service,
    random_source, selected_host_strategy, MediaProbeAdapter, RandomSourceAdapter,
};
pub use media::WebMediaProbeService;
pub use playback::WebAudioPlaybackService;
pub use random::WebRandomSource;
