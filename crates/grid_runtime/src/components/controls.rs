use grid_core::GridAction;

use super::*;

#[component]
/// Rows/columns inputs with Apply and Reset.
///
/// The inputs hold raw text; parsing and validation happen in the reducer so a rejected Apply
/// leaves the grid untouched.
pub(super) fn GridControls() -> impl IntoView {
    let runtime = use_grid_runtime();
    let (rows, cols) = runtime.state.with_untracked(|grid| {
        let dimensions = grid.dimensions();
        (dimensions.rows(), dimensions.cols())
    });
    let rows_input = create_rw_signal(rows.to_string());
    let cols_input = create_rw_signal(cols.to_string());

    let apply = Callback::new(move |_: MouseEvent| {
        runtime.dispatch_action(GridAction::ApplyControls {
            rows_input: rows_input.get_untracked(),
            cols_input: cols_input.get_untracked(),
        });
    });
    let reset = Callback::new(move |_: MouseEvent| runtime.dispatch_action(GridAction::Reset));

    view! {
        <Cluster gap=LayoutGap::Sm aria_label="Grid controls" ui_slot="grid-controls">
            <label class="grid-control-field">
                <Text role=TextRole::Label>"Rows"</Text>
                <NumberField
                    id="rowsInput"
                    min="1"
                    aria_label="Rows"
                    value=rows_input
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        rows_input.set(event_target_value(&ev));
                    })
                />
            </label>
            <label class="grid-control-field">
                <Text role=TextRole::Label>"Columns"</Text>
                <NumberField
                    id="colsInput"
                    min="1"
                    aria_label="Columns"
                    value=cols_input
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        cols_input.set(event_target_value(&ev));
                    })
                />
            </label>
            <Button variant=ButtonVariant::Primary id="applyGrid" on_click=apply>
                "Apply"
            </Button>
            <Button variant=ButtonVariant::Danger id="resetGrid" on_click=reset>
                "Reset"
            </Button>
        </Cluster>
    }
}
