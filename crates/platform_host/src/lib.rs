//! Typed host-domain contracts shared by the widget runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services: media-existence probing, the
//! single audio output stream, and randomness. Concrete browser adapters live in
//! `platform_host_web`; the no-op and in-memory adapters here back headless builds and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod media;
pub mod playback;
pub mod random;

pub use host::{HostServices, HostStrategy};
pub use media::{MediaFuture, MediaProbeService, MemoryMediaProbe, NoopMediaProbeService};
pub use playback::{
    AudioPlaybackService, MemoryAudioPlayback, NoopAudioPlayback, PlaybackEvent, PlaybackListener,
    PlaybackSubscription,
};
pub use random::{RandomSource, SequenceRandomSource};
