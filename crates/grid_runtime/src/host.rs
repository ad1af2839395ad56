//! Host-side executors for reducer effects and browser environment queries.
//!
//! The reducer stays pure: it emits [`GridEffect`] intents and this module turns them into
//! window listeners and live-region updates.

mod dom;

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use grid_core::{GridAction, GridEffect, PickerCloseReason, PickerToken, PointerPosition};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::{ev, logging, window_event_listener, SignalSet, SignalWithUntracked};

pub use self::dom::DomCellLocator;
pub(crate) use self::dom::capture_pointer;

use crate::runtime_context::GridRuntimeContext;

#[derive(Clone, Default)]
/// Host state for the grid runtime: live cancel-key listeners keyed by picker token.
pub struct GridHostContext {
    cancel_keys: Rc<RefCell<BTreeMap<PickerToken, WindowListenerHandle>>>,
    locator: DomCellLocator,
}

impl GridHostContext {
    /// Returns the document-backed cell locator used to resolve drop targets.
    pub fn locator(&self) -> DomCellLocator {
        self.locator
    }

    /// Tokens whose cancel-key listener is currently registered.
    pub fn active_cancel_keys(&self) -> Vec<PickerToken> {
        self.cancel_keys.borrow().keys().copied().collect()
    }

    /// Executes a single [`GridEffect`] emitted by the reducer.
    pub fn run_grid_effect(&self, runtime: GridRuntimeContext, effect: GridEffect) {
        match effect {
            GridEffect::InstallPickerCancelKey(token) => self.install_cancel_key(runtime, token),
            GridEffect::RemovePickerCancelKey(token) => self.remove_cancel_key(token),
            GridEffect::Announce(message) => runtime.announcement.set(message),
        }
    }

    fn install_cancel_key(&self, runtime: GridRuntimeContext, token: PickerToken) {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() != "Escape" {
                return;
            }
            let open = runtime
                .interaction
                .with_untracked(|interaction| interaction.picker.map(|session| session.token));
            if open == Some(token) {
                ev.prevent_default();
                runtime.dispatch_action(GridAction::ClosePicker {
                    reason: PickerCloseReason::CancelKey,
                });
            }
        });
        let replaced = self.cancel_keys.borrow_mut().insert(token, handle);
        if let Some(stale) = replaced {
            logging::warn!("picker cancel key {} registered twice", token.0);
            stale.remove();
        }
    }

    fn remove_cancel_key(&self, token: PickerToken) {
        let handle = self.cancel_keys.borrow_mut().remove(&token);
        match handle {
            Some(handle) => handle.remove(),
            None => logging::warn!("picker cancel key {} was not registered", token.0),
        }
    }
}

/// Client coordinates of a pointer event.
pub(crate) fn pointer_from_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Only primary pointers pressed with the main button start gestures.
pub(crate) fn starts_gesture(is_primary: bool, button: i16) -> bool {
    is_primary && button == 0
}
