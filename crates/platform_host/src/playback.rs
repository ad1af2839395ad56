//! Single-stream audio playback contracts and adapters.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::media::MediaFuture;

/// Notifications raised by the playback element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// Playback position advanced.
    TimeUpdate {
        /// Current position in seconds.
        position: f64,
        /// Track duration in seconds, when known.
        duration: Option<f64>,
    },
    /// Track metadata (including duration) finished loading.
    MetadataLoaded {
        /// Track duration in seconds, when known.
        duration: Option<f64>,
    },
    /// The current track reached its end.
    Ended,
}

/// Callback registered through [`AudioPlaybackService::subscribe`].
pub type PlaybackListener = Rc<dyn Fn(PlaybackEvent)>;

/// Handle returned by [`AudioPlaybackService::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackSubscription(pub u64);

/// Host service wrapping exactly one audio output stream.
pub trait AudioPlaybackService {
    /// Replaces the stream source; `None` unloads it.
    fn set_source(&self, url: Option<&str>);

    /// Currently loaded source URL.
    fn source(&self) -> Option<String>;

    /// Starts playback. Rejections (autoplay policy, decode failure) surface as `Err`.
    fn play(&self) -> MediaFuture<'_, Result<(), String>>;

    /// Pauses playback.
    fn pause(&self);

    /// Returns whether playback is paused.
    fn is_paused(&self) -> bool;

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Track duration in seconds; `None` while unknown.
    fn duration(&self) -> Option<f64>;

    /// Moves the playback position.
    fn seek(&self, position: f64);

    /// Sets output volume as a fraction in `0.0..=1.0`.
    fn set_volume(&self, volume: f64);

    /// Output volume as a fraction in `0.0..=1.0`.
    fn volume(&self) -> f64;

    /// Registers an event listener until it is passed to [`AudioPlaybackService::unsubscribe`].
    fn subscribe(&self, listener: PlaybackListener) -> PlaybackSubscription;

    /// Detaches a listener. Unknown handles are ignored.
    fn unsubscribe(&self, subscription: PlaybackSubscription);
}

#[derive(Debug, Clone, Copy, Default)]
/// Playback adapter with no output; every play request is rejected.
pub struct NoopAudioPlayback;

impl AudioPlaybackService for NoopAudioPlayback {
    fn set_source(&self, _url: Option<&str>) {}

    fn source(&self) -> Option<String> {
        None
    }

    fn play(&self) -> MediaFuture<'_, Result<(), String>> {
        Box::pin(async { Err("audio playback is unavailable".to_string()) })
    }

    fn pause(&self) {}

    fn is_paused(&self) -> bool {
        true
    }

    fn current_time(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> Option<f64> {
        None
    }

    fn seek(&self, _position: f64) {}

    fn set_volume(&self, _volume: f64) {}

    fn volume(&self) -> f64 {
        1.0
    }

    fn subscribe(&self, _listener: PlaybackListener) -> PlaybackSubscription {
        PlaybackSubscription(0)
    }

    fn unsubscribe(&self, _subscription: PlaybackSubscription) {}
}

#[derive(Debug, Clone, PartialEq)]
struct MemoryPlaybackState {
    source: Option<String>,
    paused: bool,
    position: f64,
    duration: Option<f64>,
    volume: f64,
    reject_play: Option<String>,
    play_calls: usize,
}

impl Default for MemoryPlaybackState {
    fn default() -> Self {
        Self {
            source: None,
            paused: true,
            position: 0.0,
            duration: None,
            volume: 1.0,
            reject_play: None,
            play_calls: 0,
        }
    }
}

#[derive(Clone, Default)]
/// In-memory playback adapter that records calls and lets tests drive the clock.
pub struct MemoryAudioPlayback {
    state: Rc<RefCell<MemoryPlaybackState>>,
    listeners: Rc<RefCell<Vec<(PlaybackSubscription, PlaybackListener)>>>,
    next_subscription: Rc<Cell<u64>>,
}

impl MemoryAudioPlayback {
    /// Makes subsequent [`AudioPlaybackService::play`] calls fail with `reason`.
    pub fn reject_play(&self, reason: impl Into<String>) {
        self.state.borrow_mut().reject_play = Some(reason.into());
    }

    /// Lets subsequent play calls succeed.
    pub fn allow_play(&self) {
        self.state.borrow_mut().reject_play = None;
    }

    /// Sets the reported track duration.
    pub fn set_duration(&self, duration: Option<f64>) {
        self.state.borrow_mut().duration = duration;
    }

    /// Moves the simulated clock without going through [`AudioPlaybackService::seek`].
    pub fn advance_to(&self, position: f64) {
        self.state.borrow_mut().position = position;
    }

    /// Number of play requests received.
    pub fn play_calls(&self) -> usize {
        self.state.borrow().play_calls
    }

    /// Delivers `event` to every subscribed listener.
    pub fn emit(&self, event: PlaybackEvent) {
        let listeners = self.listeners.borrow().clone();
        for (_, listener) in listeners {
            listener(event);
        }
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl AudioPlaybackService for MemoryAudioPlayback {
    fn set_source(&self, url: Option<&str>) {
        let mut state = self.state.borrow_mut();
        state.source = url.map(str::to_string);
        state.paused = true;
        state.position = 0.0;
        state.duration = None;
    }

    fn source(&self) -> Option<String> {
        self.state.borrow().source.clone()
    }

    fn play(&self) -> MediaFuture<'_, Result<(), String>> {
        Box::pin(async move {
            let mut state = self.state.borrow_mut();
            state.play_calls += 1;
            if state.source.is_none() {
                return Err("no source loaded".to_string());
            }
            if let Some(reason) = state.reject_play.clone() {
                state.paused = true;
                return Err(reason);
            }
            state.paused = false;
            Ok(())
        })
    }

    fn pause(&self) {
        self.state.borrow_mut().paused = true;
    }

    fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().position
    }

    fn duration(&self) -> Option<f64> {
        self.state.borrow().duration
    }

    fn seek(&self, position: f64) {
        self.state.borrow_mut().position = position.max(0.0);
    }

    fn set_volume(&self, volume: f64) {
        self.state.borrow_mut().volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    fn subscribe(&self, listener: PlaybackListener) -> PlaybackSubscription {
        let id = self.next_subscription.get() + 1;
        self.next_subscription.set(id);
        let subscription = PlaybackSubscription(id);
        self.listeners.borrow_mut().push((subscription, listener));
        subscription
    }

    fn unsubscribe(&self, subscription: PlaybackSubscription) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != subscription);
    }
}
