//! Shared host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    AudioPlaybackService, MediaProbeService, MemoryAudioPlayback, MemoryMediaProbe,
    NoopAudioPlayback, NoopMediaProbeService, RandomSource, SequenceRandomSource,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Placeholder adapters with no network or audio output.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the widget runtime.
///
/// Environment-specific service selection happens before this bundle crosses into the runtime,
/// which keeps the runtime and app crates free of browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Media-existence probe used by playlist discovery.
    pub media_probe: Rc<dyn MediaProbeService>,
    /// The single audio output stream.
    pub playback: Rc<dyn AudioPlaybackService>,
    /// Randomness for shuffle selection.
    pub random: Rc<dyn RandomSource>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters: nothing is reachable and nothing plays.
    pub fn stub() -> Self {
        Self {
            media_probe: Rc::new(NoopMediaProbeService),
            playback: Rc::new(NoopAudioPlayback),
            random: Rc::new(SequenceRandomSource::new(vec![0.0])),
            host_strategy: HostStrategy::Stub,
        }
    }

    /// Bundle of in-memory adapters sharing state with the handles passed in.
    pub fn memory(
        media_probe: MemoryMediaProbe,
        playback: MemoryAudioPlayback,
        random: SequenceRandomSource,
    ) -> Self {
        Self {
            media_probe: Rc::new(media_probe),
            playback: Rc::new(playback),
            random: Rc::new(random),
            host_strategy: HostStrategy::Stub,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
