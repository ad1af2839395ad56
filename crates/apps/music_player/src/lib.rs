//! Music player surface and the headless playlist engine behind it.
//!
//! [`engine::PlaylistEngine`] owns discovery and transport policy against the typed
//! [`platform_host`] contracts. [`MusicPlayerApp`] wraps it in a Leptos view and funnels every
//! control and playback notification through [`engine::PlayerCommand`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod engine;

use std::rc::Rc;

use futures::lock::Mutex;
use leptos::*;
use platform_host::{HostServices, PlaybackEvent};
use system_ui::prelude::*;

pub use engine::{
    discover, format_time, Discovery, PlaybackStatus, PlayerCommand, PlayerSnapshot, Playlist,
    PlaylistConfig, PlaylistEngine, PlaylistEntry, PlaylistError,
};

fn command_for_event(event: PlaybackEvent) -> PlayerCommand {
    match event {
        PlaybackEvent::TimeUpdate { position, duration } => {
            PlayerCommand::Progress { position, duration }
        }
        PlaybackEvent::MetadataLoaded { duration } => PlayerCommand::Progress {
            position: 0.0,
            duration,
        },
        PlaybackEvent::Ended => PlayerCommand::Ended,
    }
}

fn parse_control_value(ev: &web_sys::Event) -> Option<f64> {
    event_target_value(ev).trim().parse::<f64>().ok()
}

#[component]
/// Playlist player: track list, transport controls, seek and volume sliders.
///
/// Discovery starts on mount. The engine is shared behind an async mutex so playback
/// notifications arriving mid-command queue behind it instead of interleaving.
pub fn MusicPlayerApp(
    /// Discovery and transport defaults.
    config: PlaylistConfig,
    /// Host adapters for probing, playback, and shuffle randomness.
    services: HostServices,
) -> impl IntoView {
    let engine = Rc::new(Mutex::new(PlaylistEngine::new(config, &services)));
    let snapshot = create_rw_signal(PlayerSnapshot::default());

    let run = {
        let engine = engine.clone();
        Callback::new(move |command: PlayerCommand| {
            let engine = engine.clone();
            spawn_local(async move {
                let mut engine = engine.lock().await;
                if let Err(err) = engine.apply(command).await {
                    logging::warn!("music player command {command:?} failed: {err}");
                }
                snapshot.set(engine.snapshot());
            });
        })
    };

    spawn_local({
        let engine = engine.clone();
        async move {
            let mut engine = engine.lock().await;
            match engine.initialize().await {
                Ok(Discovery::Found(playlist)) => {
                    logging::log!("music player discovered {} tracks", playlist.len());
                }
                Ok(Discovery::Fallback(_)) => {
                    logging::warn!("music player found no tracks; using fallback entry");
                }
                Err(err) => logging::warn!("music player initialization failed: {err}"),
            }
            snapshot.set(engine.snapshot());
        }
    });

    let playback = services.playback.clone();
    let subscription = playback.subscribe(Rc::new(move |event: PlaybackEvent| {
        run.call(command_for_event(event))
    }));
    on_cleanup(move || playback.unsubscribe(subscription));

    let playing = Signal::derive(move || snapshot.with(|s| s.status == PlaybackStatus::Playing));
    let empty = Signal::derive(move || snapshot.with(|s| s.entries.is_empty()));
    let toggle_icon = Signal::derive(move || {
        if playing.get() {
            IconName::Pause
        } else {
            IconName::Play
        }
    });
    let toggle_label = Signal::derive(move || {
        let label = if playing.get() { "Pause" } else { "Play" };
        label.to_string()
    });

    view! {
        <section class="music-player" aria-label="Music player">
            <Stack gap=LayoutGap::Sm>
                <Heading>"Music"</Heading>
                <Text role=TextRole::Label ui_slot="now-playing">
                    {move || {
                        snapshot.with(|s| s.current_title().unwrap_or("No track").to_string())
                    }}
                </Text>
                <ol class="music-playlist">
                    {move || {
                        snapshot.with(|s| {
                            s.entries
                                .iter()
                                .enumerate()
                                .map(|(index, name)| {
                                    let active = s.current_index == Some(index);
                                    let name = name.clone();
                                    view! {
                                        <li>
                                            <Button
                                                variant=ButtonVariant::Quiet
                                                size=ButtonSize::Sm
                                                pressed=active
                                                on_click=Callback::new(move |_| {
                                                    run.call(PlayerCommand::Select(index))
                                                })
                                            >
                                                {name}
                                            </Button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ol>
                <Cluster gap=LayoutGap::Sm aria_label="Transport">
                    <IconButton
                        icon=IconName::Previous
                        aria_label="Previous track"
                        disabled=empty
                        on_click=Callback::new(move |_| run.call(PlayerCommand::Previous))
                    />
                    <IconButton
                        icon=toggle_icon
                        variant=ButtonVariant::Primary
                        aria_label=toggle_label
                        disabled=empty
                        on_click=Callback::new(move |_| run.call(PlayerCommand::Toggle))
                    />
                    <IconButton
                        icon=IconName::Next
                        aria_label="Next track"
                        disabled=empty
                        on_click=Callback::new(move |_| run.call(PlayerCommand::Next))
                    />
                    <IconButton
                        icon=IconName::Shuffle
                        aria_label="Shuffle"
                        pressed=Signal::derive(move || snapshot.with(|s| s.shuffle))
                        on_click=Callback::new(move |_| run.call(PlayerCommand::ToggleShuffle))
                    />
                    <IconButton
                        icon=IconName::Repeat
                        aria_label="Repeat"
                        pressed=Signal::derive(move || snapshot.with(|s| s.repeat))
                        on_click=Callback::new(move |_| run.call(PlayerCommand::ToggleRepeat))
                    />
                </Cluster>
                <Cluster gap=LayoutGap::Sm ui_slot="progress">
                    <Text role=TextRole::Caption>
                        {move || snapshot.with(|s| s.elapsed_label.clone())}
                    </Text>
                    <RangeField
                        min="0"
                        max="100"
                        step="0.1"
                        aria_label="Seek"
                        disabled=empty
                        value=Signal::derive(move || {
                            snapshot.with(|s| format!("{:.1}", s.progress))
                        })
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            if let Some(percent) = parse_control_value(&ev) {
                                run.call(PlayerCommand::Seek(percent));
                            }
                        })
                    />
                    <Text role=TextRole::Caption>
                        {move || snapshot.with(|s| s.duration_label.clone())}
                    </Text>
                </Cluster>
                <RangeField
                    min="0"
                    max="100"
                    step="1"
                    aria_label="Volume"
                    ui_slot="volume"
                    value=Signal::derive(move || snapshot.with(|s| s.volume.to_string()))
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        if let Some(percent) = parse_control_value(&ev) {
                            run.call(PlayerCommand::Volume(percent));
                        }
                    })
                />
                {move || {
                    snapshot
                        .with(|s| s.hint.clone())
                        .map(|hint| {
                            view! {
                                <Text tone=TextTone::Warning ui_slot="hint">
                                    {hint}
                                </Text>
                            }
                        })
                }}
            </Stack>
        </section>
    }
}
