//! Media-existence probe contracts and adapters.

use std::{cell::RefCell, collections::BTreeSet, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by media host services.
pub type MediaFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that checks whether a media URL is reachable.
///
/// Transport failures collapse to `false`; callers only distinguish "playable" from "not".
pub trait MediaProbeService {
    /// Resolves to `true` when `url` answers with a success status.
    fn probe<'a>(&'a self, url: &'a str) -> MediaFuture<'a, bool>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Probe adapter that reports every URL as unreachable.
pub struct NoopMediaProbeService;

impl MediaProbeService for NoopMediaProbeService {
    fn probe<'a>(&'a self, _url: &'a str) -> MediaFuture<'a, bool> {
        Box::pin(async { false })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory probe adapter with a fixed set of reachable URLs and a probe log.
pub struct MemoryMediaProbe {
    available: Rc<RefCell<BTreeSet<String>>>,
    probed: Rc<RefCell<Vec<String>>>,
}

impl MemoryMediaProbe {
    /// Creates a probe that reports exactly `urls` as reachable.
    pub fn with_available<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let probe = Self::default();
        probe
            .available
            .borrow_mut()
            .extend(urls.into_iter().map(Into::into));
        probe
    }

    /// Marks `url` reachable.
    pub fn insert(&self, url: impl Into<String>) {
        self.available.borrow_mut().insert(url.into());
    }

    /// URLs probed so far, in call order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl MediaProbeService for MemoryMediaProbe {
    fn probe<'a>(&'a self, url: &'a str) -> MediaFuture<'a, bool> {
        Box::pin(async move {
            self.probed.borrow_mut().push(url.to_string());
            self.available.borrow().contains(url)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_probe_reports_configured_urls_and_logs_calls() {
        let probe = MemoryMediaProbe::with_available(["music/track1.mp3"]);
        let probe_obj: &dyn MediaProbeService = &probe;

        assert!(block_on(probe_obj.probe("music/track1.mp3")));
        assert!(!block_on(probe_obj.probe("music/track2.mp3")));
        probe.insert("music/track2.mp3");
        assert!(block_on(probe_obj.probe("music/track2.mp3")));
        assert_eq!(
            probe.probed(),
            vec![
                "music/track1.mp3".to_string(),
                "music/track2.mp3".to_string(),
                "music/track2.mp3".to_string()
            ]
        );
    }

    #[test]
    fn noop_probe_finds_nothing() {
        assert!(!block_on(NoopMediaProbeService.probe("anything")));
    }
}
