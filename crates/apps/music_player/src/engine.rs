use std::rc::Rc;

use platform_host::{AudioPlaybackService, HostServices, MediaProbeService, RandomSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BLOCKED_HINT: &str = "Playback was blocked. Press play to start.";
const NOT_FOUND_HINT: &str = "No playable track found.";

/// Candidate naming convention, transport defaults, and fallback for playlist discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// URL prefix before the numeric index, e.g. `music/track`.
    pub base_path: String,
    /// First candidate index.
    pub first_index: u32,
    /// Last candidate index, inclusive.
    pub last_index: u32,
    /// Extensions tried per index, in preference order.
    pub extensions: Vec<String>,
    /// Entry used when discovery confirms nothing.
    pub fallback: String,
    /// Initial repeat mode.
    pub repeat: bool,
    /// Initial shuffle mode.
    pub shuffle: bool,
    /// Initial volume, 0 to 100.
    pub initial_volume: u8,
    /// Position beyond which "previous" restarts the current track.
    pub restart_threshold_secs: f64,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            base_path: "music/track".to_string(),
            first_index: 1,
            last_index: 10,
            extensions: vec!["mp3".to_string(), "ogg".to_string(), "wav".to_string()],
            fallback: "music/track1.mp3".to_string(),
            repeat: true,
            shuffle: false,
            initial_volume: 80,
            restart_threshold_secs: 3.0,
        }
    }
}

impl PlaylistConfig {
    /// `{base_path}{index}.{extension}`.
    pub fn candidate_url(&self, index: u32, extension: &str) -> String {
        format!("{}{index}.{extension}", self.base_path)
    }
}

/// A media URL confirmed reachable at discovery time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Resolved URL.
    pub url: String,
}

impl PlaylistEntry {
    /// File-name portion of the URL.
    pub fn display_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Ordered entries with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
    current_index: usize,
}

impl Playlist {
    /// Wraps discovered entries with the cursor at 0.
    pub fn new(entries: Vec<PlaylistEntry>) -> Self {
        Self {
            entries,
            current_index: 0,
        }
    }

    /// All entries in playback order.
    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    /// Cursor position.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Entry under the cursor.
    pub fn current(&self) -> Option<&PlaylistEntry> {
        self.entries.get(self.current_index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether discovery produced no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `index mod len`, wrapping negative indices from the end.
    pub fn wrap(&self, index: i64) -> Option<usize> {
        let len = i64::try_from(self.entries.len()).ok().filter(|len| *len > 0)?;
        usize::try_from(index.rem_euclid(len)).ok()
    }
}

/// Outcome of [`discover`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// At least one candidate was confirmed reachable.
    Found(Playlist),
    /// Nothing was reachable; the playlist holds only the configured fallback.
    Fallback(Playlist),
}

impl Discovery {
    /// Returns whether the fallback entry was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Unwraps the playlist from either outcome.
    pub fn into_playlist(self) -> Playlist {
        match self {
            Self::Found(playlist) | Self::Fallback(playlist) => playlist,
        }
    }
}

/// Probes `first_index..=last_index` ascending; within an index, extensions in preference order.
///
/// The first reachable extension wins for each index. Probes run strictly one at a time.
pub async fn discover(probe: &dyn MediaProbeService, config: &PlaylistConfig) -> Discovery {
    let mut entries = Vec::new();
    for index in config.first_index..=config.last_index {
        for extension in &config.extensions {
            let url = config.candidate_url(index, extension);
            if probe.probe(&url).await {
                entries.push(PlaylistEntry { url });
                break;
            }
        }
    }

    if entries.is_empty() {
        Discovery::Fallback(Playlist::new(vec![PlaylistEntry {
            url: config.fallback.clone(),
        }]))
    } else {
        Discovery::Found(Playlist::new(entries))
    }
}

/// Transport state shown by the player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing has been played yet.
    #[default]
    Idle,
    /// Audio is playing.
    Playing,
    /// Paused by the user, by end of playlist, or by a rejected start.
    Paused,
    /// Every entry failed its reachability probe.
    NotFound,
}

/// Failures surfaced by transport operations. None of them leave the engine unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// Every entry failed its reachability probe.
    #[error("no playable entry in playlist")]
    NoPlayableEntry,
    /// The playlist has no entries.
    #[error("playlist is empty")]
    EmptyPlaylist,
    /// The platform refused to start playback.
    #[error("playback rejected: {reason}")]
    PlaybackRejected {
        /// Platform-provided reason.
        reason: String,
    },
}

/// User or platform input to [`PlaylistEngine::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    /// Play when paused, pause when playing.
    Toggle,
    /// Advance per shuffle/repeat policy.
    Next,
    /// Restart the current track or step back.
    Previous,
    /// Playlist row activated.
    Select(usize),
    /// Seek control moved (0 to 100).
    Seek(f64),
    /// Volume control moved (0 to 100).
    Volume(f64),
    /// Flip shuffle mode.
    ToggleShuffle,
    /// Flip repeat mode.
    ToggleRepeat,
    /// Current track finished.
    Ended,
    /// Live position update from the output stream.
    Progress {
        /// Current position in seconds.
        position: f64,
        /// Track duration in seconds, when known.
        duration: Option<f64>,
    },
}

/// Render-ready view of the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerSnapshot {
    /// Display name per entry.
    pub entries: Vec<String>,
    /// Cursor, `None` while the playlist is empty.
    pub current_index: Option<usize>,
    /// Transport state.
    pub status: PlaybackStatus,
    /// User-visible hint after a recoverable failure.
    pub hint: Option<String>,
    /// Shuffle mode.
    pub shuffle: bool,
    /// Repeat mode.
    pub repeat: bool,
    /// Playback position as a percentage of duration.
    pub progress: f64,
    /// Volume, 0 to 100.
    pub volume: u8,
    /// Position formatted `m:ss`.
    pub elapsed_label: String,
    /// Duration formatted `m:ss`.
    pub duration_label: String,
}

impl PlayerSnapshot {
    /// Display name of the entry under the cursor.
    pub fn current_title(&self) -> Option<&str> {
        self.current_index
            .and_then(|index| self.entries.get(index))
            .map(String::as_str)
    }
}

/// Formats seconds as `m:ss`; unknown or negative values render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Picks an index in `0..len` other than `current`. Requires `len > 1`.
pub(crate) fn shuffle_pick(current: usize, len: usize, unit: f64) -> usize {
    let span = len - 1;
    let pick = ((unit.clamp(0.0, 1.0) * span as f64).floor() as usize).min(span - 1);
    if pick >= current {
        pick + 1
    } else {
        pick
    }
}

/// Playlist discovery plus transport over a single audio output stream.
pub struct PlaylistEngine {
    config: PlaylistConfig,
    probe: Rc<dyn MediaProbeService>,
    playback: Rc<dyn AudioPlaybackService>,
    random: Rc<dyn RandomSource>,
    playlist: Playlist,
    status: PlaybackStatus,
    hint: Option<String>,
    shuffle: bool,
    repeat: bool,
    volume: u8,
    position: f64,
    duration: Option<f64>,
}

impl PlaylistEngine {
    /// Creates an engine with an empty playlist and applies the configured volume.
    pub fn new(config: PlaylistConfig, services: &HostServices) -> Self {
        let volume = config.initial_volume.min(100);
        services.playback.set_volume(f64::from(volume) / 100.0);
        Self {
            shuffle: config.shuffle,
            repeat: config.repeat,
            config,
            probe: services.media_probe.clone(),
            playback: services.playback.clone(),
            random: services.random.clone(),
            playlist: Playlist::default(),
            status: PlaybackStatus::Idle,
            hint: None,
            volume,
            position: 0.0,
            duration: None,
        }
    }

    /// Runs discovery and loads the first entry without starting playback.
    pub async fn initialize(&mut self) -> Result<Discovery, PlaylistError> {
        let discovery = discover(self.probe.as_ref(), &self.config).await;
        self.playlist = discovery.clone().into_playlist();
        self.load(0).await?;
        Ok(discovery)
    }

    /// Current playlist.
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Current transport state.
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Moves the cursor to `index mod len` and loads the first reachable entry from there.
    ///
    /// Unreachable entries are skipped forward with wrap-around. When none answers, the output
    /// stream is unloaded and the status becomes [`PlaybackStatus::NotFound`].
    pub async fn load(&mut self, index: i64) -> Result<usize, PlaylistError> {
        let start = self.playlist.wrap(index).ok_or(PlaylistError::EmptyPlaylist)?;
        let len = self.playlist.len();
        self.playlist.current_index = start;

        for offset in 0..len {
            let candidate = (start + offset) % len;
            let url = self.playlist.entries[candidate].url.clone();
            if self.probe.probe(&url).await {
                self.playlist.current_index = candidate;
                self.playback.set_source(Some(&url));
                self.position = 0.0;
                self.duration = None;
                self.hint = None;
                if self.status == PlaybackStatus::NotFound {
                    self.status = PlaybackStatus::Idle;
                }
                return Ok(candidate);
            }
        }

        self.playback.set_source(None);
        self.position = 0.0;
        self.duration = None;
        self.status = PlaybackStatus::NotFound;
        self.hint = Some(NOT_FOUND_HINT.to_string());
        Err(PlaylistError::NoPlayableEntry)
    }

    /// Starts playback of the loaded entry, loading the cursor entry first if nothing is loaded.
    ///
    /// A rejected start leaves the engine paused with a retry hint.
    pub async fn play(&mut self) -> Result<(), PlaylistError> {
        if self.playback.source().is_none() {
            self.load(self.playlist.current_index as i64).await?;
        }
        match self.playback.play().await {
            Ok(()) => {
                self.status = PlaybackStatus::Playing;
                self.hint = None;
                Ok(())
            }
            Err(reason) => {
                self.status = PlaybackStatus::Paused;
                self.hint = Some(BLOCKED_HINT.to_string());
                Err(PlaylistError::PlaybackRejected { reason })
            }
        }
    }

    /// Pauses playback.
    pub fn pause(&mut self) {
        self.playback.pause();
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Plays when paused, pauses when playing.
    pub async fn toggle(&mut self) -> Result<(), PlaylistError> {
        if self.status == PlaybackStatus::Playing {
            self.pause();
            Ok(())
        } else {
            self.play().await
        }
    }

    /// Advances to the next entry.
    ///
    /// With shuffle on and more than one entry, a random different entry is chosen. Otherwise the
    /// cursor moves forward; past the end it wraps when repeat is on and pauses when it is off.
    pub async fn next(&mut self) -> Result<(), PlaylistError> {
        let len = self.playlist.len();
        if len == 0 {
            return Err(PlaylistError::EmptyPlaylist);
        }
        let current = self.playlist.current_index;
        let target = if self.shuffle && len > 1 {
            shuffle_pick(current, len, self.random.next_unit())
        } else if current + 1 < len {
            current + 1
        } else if self.repeat {
            0
        } else {
            self.pause();
            return Ok(());
        };
        self.load(target as i64).await?;
        self.play().await
    }

    /// Restarts the current entry past the threshold; otherwise steps back with wrap-around.
    pub async fn prev(&mut self) -> Result<(), PlaylistError> {
        if self.playlist.is_empty() {
            return Err(PlaylistError::EmptyPlaylist);
        }
        if self.playback.current_time() > self.config.restart_threshold_secs {
            self.playback.seek(0.0);
            self.position = 0.0;
            return Ok(());
        }
        self.load(self.playlist.current_index as i64 - 1).await?;
        self.play().await
    }

    /// Loads and plays a specific entry.
    pub async fn select(&mut self, index: usize) -> Result<(), PlaylistError> {
        self.load(index as i64).await?;
        self.play().await
    }

    /// Seeks to `percent` of the track. No-op while the duration is unknown.
    pub fn seek(&mut self, percent: f64) {
        let Some(duration) = self.playback.duration().filter(|d| *d > 0.0) else {
            return;
        };
        let position = duration * percent.clamp(0.0, 100.0) / 100.0;
        self.playback.seek(position);
        self.position = position;
        self.duration = Some(duration);
    }

    /// Sets output volume from a 0 to 100 control value.
    pub fn set_volume(&mut self, percent: f64) {
        let percent = percent.clamp(0.0, 100.0);
        self.volume = percent.round() as u8;
        self.playback.set_volume(percent / 100.0);
    }

    /// Flips shuffle mode.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    /// Flips repeat mode.
    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    /// Auto-advance after the current track finishes.
    pub async fn handle_ended(&mut self) -> Result<(), PlaylistError> {
        self.next().await
    }

    /// Records a live position update.
    pub fn sync_progress(&mut self, position: f64, duration: Option<f64>) {
        self.position = position.max(0.0);
        if duration.is_some() {
            self.duration = duration;
        }
    }

    /// Dispatches one [`PlayerCommand`].
    pub async fn apply(&mut self, command: PlayerCommand) -> Result<(), PlaylistError> {
        match command {
            PlayerCommand::Toggle => self.toggle().await,
            PlayerCommand::Next => self.next().await,
            PlayerCommand::Previous => self.prev().await,
            PlayerCommand::Select(index) => self.select(index).await,
            PlayerCommand::Ended => self.handle_ended().await,
            PlayerCommand::Seek(percent) => {
                self.seek(percent);
                Ok(())
            }
            PlayerCommand::Volume(percent) => {
                self.set_volume(percent);
                Ok(())
            }
            PlayerCommand::ToggleShuffle => {
                self.toggle_shuffle();
                Ok(())
            }
            PlayerCommand::ToggleRepeat => {
                self.toggle_repeat();
                Ok(())
            }
            PlayerCommand::Progress { position, duration } => {
                self.sync_progress(position, duration);
                Ok(())
            }
        }
    }

    /// Builds the render-ready view.
    pub fn snapshot(&self) -> PlayerSnapshot {
        let progress = match self.duration {
            Some(duration) if duration > 0.0 => (self.position / duration * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        };
        PlayerSnapshot {
            entries: self
                .playlist
                .entries()
                .iter()
                .map(|entry| entry.display_name().to_string())
                .collect(),
            current_index: (!self.playlist.is_empty()).then_some(self.playlist.current_index),
            status: self.status,
            hint: self.hint.clone(),
            shuffle: self.shuffle,
            repeat: self.repeat,
            progress,
            volume: self.volume,
            elapsed_label: format_time(self.position),
            duration_label: format_time(self.duration.unwrap_or(0.0)),
        }
    }
}
