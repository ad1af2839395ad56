use grid_core::{GridAction, PickerCloseReason};

use super::*;

#[component]
/// Modal catalog for click-based assignment to the cell that opened it.
pub(super) fn IconPicker() -> impl IntoView {
    let runtime = use_grid_runtime();
    let session = create_memo(move |_| runtime.interaction.with(|ui| ui.picker));
    let close = move |reason: PickerCloseReason| {
        runtime.dispatch_action(GridAction::ClosePicker { reason });
    };

    move || {
        session.get().map(|session| {
            let icons = runtime.catalog.with_value(|catalog| catalog.icons().to_vec());
            view! {
                <Modal
                    layout_class="icon-picker"
                    aria_label=format!("Choose icon for cell {}", session.cell.label())
                    title="Choose an icon"
                    on_backdrop=Callback::new(move |_| close(PickerCloseReason::Backdrop))
                    on_close=Callback::new(move |_| close(PickerCloseReason::CloseButton))
                >
                    <div class="icon-picker-grid" role="list">
                        {icons
                            .into_iter()
                            .map(|icon| {
                                let src = icon.as_str().to_string();
                                view! {
                                    <button
                                        type="button"
                                        class="icon-picker-item"
                                        role="listitem"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            runtime
                                                .dispatch_action(GridAction::SelectPickerIcon {
                                                    icon: icon.clone(),
                                                });
                                        }
                                    >
                                        <img src=src alt="" draggable="false" />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Modal>
            }
        })
    }
}
