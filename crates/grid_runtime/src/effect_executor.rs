//! Drains [`grid_core::GridEffect`] intents queued by the provider's dispatch.

use leptos::*;

use crate::runtime_context::GridRuntimeContext;

/// Runs queued grid effects in emission order whenever the queue gains entries.
pub fn install(runtime: GridRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        drain(runtime);
    });
}

/// Empties the queue, then runs the batch it held.
///
/// An Escape listener installed mid-batch can dispatch `ClosePicker`; its effects land in the
/// emptied queue and run on the next pass instead of being lost.
fn drain(runtime: GridRuntimeContext) {
    let batch = runtime
        .effects
        .try_update(std::mem::take)
        .unwrap_or_default();
    let host = runtime.host.get_value();
    for effect in batch {
        host.run_grid_effect(runtime, effect);
    }
}

#[cfg(test)]
mod tests {
    use grid_core::{GridDimensions, GridEffect, GridState, InteractionState};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::host::GridHostContext;

    #[test]
    fn drain_empties_queue_and_applies_effects_in_order() {
        let reactive = create_runtime();
        let dimensions = GridDimensions::new(1, 1).expect("dimensions");
        let runtime = GridRuntimeContext {
            host: store_value(GridHostContext::default()),
            catalog: store_value(Default::default()),
            state: create_rw_signal(GridState::new(dimensions)),
            interaction: create_rw_signal(InteractionState::default()),
            effects: create_rw_signal(vec![
                GridEffect::Announce("first".to_string()),
                GridEffect::Announce("second".to_string()),
            ]),
            announcement: create_rw_signal(String::new()),
            dispatch: Callback::new(|_| {}),
        };

        drain(runtime);

        assert!(runtime.effects.get_untracked().is_empty());
        assert_eq!(runtime.announcement.get_untracked(), "second");
        reactive.dispose();
    }
}
