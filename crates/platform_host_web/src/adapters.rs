use std::rc::Rc;

use platform_host::{
    AudioPlaybackService, HostServices, HostStrategy, MediaFuture, MediaProbeService,
    NoopAudioPlayback, NoopMediaProbeService, RandomSource, SequenceRandomSource,
};

use crate::{WebAudioPlaybackService, WebMediaProbeService, WebRandomSource};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete probe backend behind [`MediaProbeService`].
#[derive(Debug, Clone, Copy)]
pub enum MediaProbeAdapter {
    /// Fetch-backed `HEAD` probe.
    Browser(WebMediaProbeService),
    /// Probe that finds nothing.
    Stub(NoopMediaProbeService),
}

impl MediaProbeService for MediaProbeAdapter {
    fn probe<'a>(&'a self, url: &'a str) -> MediaFuture<'a, bool> {
        match self {
            Self::Browser(probe) => probe.probe(url),
            Self::Stub(probe) => probe.probe(url),
        }
    }
}

/// Adapter enum that erases the concrete randomness backend behind [`RandomSource`].
#[derive(Debug, Clone)]
pub enum RandomSourceAdapter {
    /// `Math.random`.
    Browser(WebRandomSource),
    /// Fixed sequence for reproducible stub builds.
    Stub(SequenceRandomSource),
}

impl RandomSource for RandomSourceAdapter {
    fn next_unit(&self) -> f64 {
        match self {
            Self::Browser(source) => source.next_unit(),
            Self::Stub(source) => source.next_unit(),
        }
    }
}

/// Builds the media probe for the selected strategy.
pub fn media_probe_service() -> MediaProbeAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => MediaProbeAdapter::Browser(WebMediaProbeService),
        HostStrategy::Stub => MediaProbeAdapter::Stub(NoopMediaProbeService),
    }
}

/// Builds the randomness source for the selected strategy.
pub fn random_source() -> RandomSourceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => RandomSourceAdapter::Browser(WebRandomSource),
        HostStrategy::Stub => RandomSourceAdapter::Stub(SequenceRandomSource::new(vec![0.5])),
    }
}

/// Builds the audio output stream for the selected strategy.
pub fn audio_playback_service() -> Rc<dyn AudioPlaybackService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebAudioPlaybackService::new()),
        HostStrategy::Stub => Rc::new(NoopAudioPlayback),
    }
}

/// Assembles the full host bundle injected into the widget runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        media_probe: Rc::new(media_probe_service()),
        playback: audio_playback_service(),
        random: Rc::new(random_source()),
        host_strategy: selected_host_strategy(),
    }
}
