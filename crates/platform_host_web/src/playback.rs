//! `HTMLAudioElement`-backed playback service.

use platform_host::{AudioPlaybackService, MediaFuture, PlaybackListener, PlaybackSubscription};

pub use imp::WebAudioPlaybackService;

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::{
        cell::{Cell, RefCell},
        collections::BTreeMap,
    };

    use platform_host::PlaybackEvent;
    use wasm_bindgen::{closure::Closure, JsCast};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Event, HtmlAudioElement};

    use super::*;
    use crate::interop::{finite_duration, js_error_to_string};

    type EventClosure = Closure<dyn FnMut(Event)>;

    /// Browser playback service owning one detached audio element.
    pub struct WebAudioPlaybackService {
        element: Option<HtmlAudioElement>,
        listeners: RefCell<BTreeMap<PlaybackSubscription, Vec<(&'static str, EventClosure)>>>,
        next_subscription: Cell<u64>,
    }

    impl WebAudioPlaybackService {
        /// Creates the audio element. Construction failure leaves a silent service.
        pub fn new() -> Self {
            let element = HtmlAudioElement::new().ok();
            if let Some(element) = &element {
                element.set_preload("metadata");
            }
            Self {
                element,
                listeners: RefCell::new(BTreeMap::new()),
                next_subscription: Cell::new(0),
            }
        }
    }

    impl Default for WebAudioPlaybackService {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioPlaybackService for WebAudioPlaybackService {
        fn set_source(&self, url: Option<&str>) {
            let Some(element) = &self.element else {
                return;
            };
            match url {
                Some(url) => element.set_src(url),
                None => {
                    let _ = element.pause();
                    let _ = element.remove_attribute("src");
                    element.load();
                }
            }
        }

        fn source(&self) -> Option<String> {
            self.element
                .as_ref()
                .and_then(|element| element.get_attribute("src"))
        }

        fn play(&self) -> MediaFuture<'_, Result<(), String>> {
            Box::pin(async move {
                let element = self
                    .element
                    .as_ref()
                    .ok_or_else(|| "audio element unavailable".to_string())?;
                let promise = element.play().map_err(js_error_to_string)?;
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(js_error_to_string)
            })
        }

        fn pause(&self) {
            if let Some(element) = &self.element {
                let _ = element.pause();
            }
        }

        fn is_paused(&self) -> bool {
            self.element
                .as_ref()
                .map_or(true, |element| element.paused())
        }

        fn current_time(&self) -> f64 {
            self.element
                .as_ref()
                .map_or(0.0, |element| element.current_time())
        }

        fn duration(&self) -> Option<f64> {
            self.element
                .as_ref()
                .and_then(|element| finite_duration(element.duration()))
        }

        fn seek(&self, position: f64) {
            if let Some(element) = &self.element {
                element.set_current_time(position.max(0.0));
            }
        }

        fn set_volume(&self, volume: f64) {
            if let Some(element) = &self.element {
                element.set_volume(volume.clamp(0.0, 1.0));
            }
        }

        fn volume(&self) -> f64 {
            self.element.as_ref().map_or(1.0, |element| element.volume())
        }

        fn subscribe(&self, listener: PlaybackListener) -> PlaybackSubscription {
            let subscription = PlaybackSubscription(self.next_subscription.get() + 1);
            self.next_subscription.set(subscription.0);
            let Some(element) = self.element.clone() else {
                return subscription;
            };
            let mut attached = Vec::new();
            for event_name in ["timeupdate", "loadedmetadata", "ended"] {
                let source = element.clone();
                let listener = listener.clone();
                let closure = EventClosure::new(move |_event: Event| {
                    let duration = finite_duration(source.duration());
                    let event = match event_name {
                        "timeupdate" => PlaybackEvent::TimeUpdate {
                            position: source.current_time(),
                            duration,
                        },
                        "loadedmetadata" => PlaybackEvent::MetadataLoaded { duration },
                        _ => PlaybackEvent::Ended,
                    };
                    listener(event);
                });
                if element
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
                    .is_ok()
                {
                    attached.push((event_name, closure));
                }
            }
            self.listeners.borrow_mut().insert(subscription, attached);
            subscription
        }

        fn unsubscribe(&self, subscription: PlaybackSubscription) {
            let Some(attached) = self.listeners.borrow_mut().remove(&subscription) else {
                return;
            };
            let Some(element) = &self.element else {
                return;
            };
            for (event_name, closure) in attached {
                let _ = element.remove_event_listener_with_callback(
                    event_name,
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use platform_host::NoopAudioPlayback;

    use super::*;

    #[derive(Debug, Clone, Copy, Default)]
    /// Non-browser stand-in: nothing loads and play requests are rejected.
    pub struct WebAudioPlaybackService {
        inner: NoopAudioPlayback,
    }

    impl WebAudioPlaybackService {
        /// Creates the silent stand-in.
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl AudioPlaybackService for WebAudioPlaybackService {
        fn set_source(&self, url: Option<&str>) {
            self.inner.set_source(url);
        }

        fn source(&self) -> Option<String> {
            self.inner.source()
        }

        fn play(&self) -> MediaFuture<'_, Result<(), String>> {
            self.inner.play()
        }

        fn pause(&self) {
            self.inner.pause();
        }

        fn is_paused(&self) -> bool {
            self.inner.is_paused()
        }

        fn current_time(&self) -> f64 {
            self.inner.current_time()
        }

        fn duration(&self) -> Option<f64> {
            self.inner.duration()
        }

        fn seek(&self, position: f64) {
            self.inner.seek(position);
        }

        fn set_volume(&self, volume: f64) {
            self.inner.set_volume(volume);
        }

        fn volume(&self) -> f64 {
            self.inner.volume()
        }

        fn subscribe(&self, listener: PlaybackListener) -> PlaybackSubscription {
            self.inner.subscribe(listener)
        }

        fn unsubscribe(&self, subscription: PlaybackSubscription) {
            self.inner.unsubscribe(subscription);
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_stand_in_rejects_playback() {
        let playback = WebAudioPlaybackService::new();

        playback.set_source(Some("music/track1.mp3"));

        assert!(block_on(playback.play()).is_err());
        assert!(playback.is_paused());
        assert_eq!(playback.duration(), None);
    }
}
