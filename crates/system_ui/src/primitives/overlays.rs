use super::*;

#[component]
/// Modal dialog with a dismissing backdrop and close control.
///
/// Clicks inside the panel never reach the backdrop handler.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    on_backdrop: Callback<MouseEvent>,
    on_close: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |ev| on_backdrop.call(ev)
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="modal"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="ui-modal-header" data-ui-slot="header">
                    {title.map(|title| view! { <Heading>{title}</Heading> })}
                    <IconButton
                        icon=IconName::Close
                        aria_label="Close"
                        ui_slot="close"
                        on_click=Callback::new(move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_close.call(ev);
                        })
                    />
                </div>
                {children()}
            </div>
        </div>
    }
}
