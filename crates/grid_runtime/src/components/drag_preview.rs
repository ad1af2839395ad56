use super::*;

#[component]
/// Floating copy of the dragged icon that follows the pointer.
pub(super) fn DragPreview() -> impl IntoView {
    let runtime = use_grid_runtime();
    let gesture = move || runtime.interaction.with(|ui| ui.gesture.clone());

    move || {
        gesture().map(|drag| {
            view! {
                <img
                    class="drag-preview"
                    src=drag.source_icon.as_str().to_string()
                    alt=""
                    aria-hidden="true"
                    style=format!(
                        "left:{}px;top:{}px;pointer-events:none;",
                        drag.pointer.x,
                        drag.pointer.y
                    )
                />
            }
        })
    }
}
