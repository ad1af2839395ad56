use grid_core::{CellIndex, CellLocator, PointerPosition};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Class carried by every rendered grid cell; the hit-test walks up to it.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const CELL_SELECTOR: &str = ".grid-cell";
/// Attribute holding the 0-based cell index.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const CELL_INDEX_ATTR: &str = "data-cell-index";

/// Hit-tests against the live document.
///
/// Elements stacked above the grid (the drag preview included) must not take pointer events or
/// they shadow the cell beneath the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomCellLocator;

impl CellLocator for DomCellLocator {
    fn cell_at(&self, pointer: PointerPosition) -> Option<CellIndex> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()?.document()?;
            let element = document.element_from_point(pointer.x as f32, pointer.y as f32)?;
            let cell = element.closest(CELL_SELECTOR).ok()??;
            return parse_cell_index(cell.get_attribute(CELL_INDEX_ATTR).as_deref());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = pointer;
            None
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn parse_cell_index(raw: Option<&str>) -> Option<CellIndex> {
    raw?.trim().parse::<usize>().ok().map(CellIndex)
}

/// Routes subsequent events of `ev`'s pointer to its target so release is seen even off-window.
pub(crate) fn capture_pointer(ev: &web_sys::PointerEvent) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(target) = ev.target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let _ = element.set_pointer_capture(ev.pointer_id());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ev;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_attribute_parses_plain_integers_only() {
        assert_eq!(parse_cell_index(Some("4")), Some(CellIndex(4)));
        assert_eq!(parse_cell_index(Some(" 12 ")), Some(CellIndex(12)));
        assert_eq!(parse_cell_index(Some("-1")), None);
        assert_eq!(parse_cell_index(Some("x")), None);
        assert_eq!(parse_cell_index(None), None);
    }

    #[test]
    fn headless_locator_never_hits() {
        assert_eq!(DomCellLocator.cell_at(PointerPosition { x: 10, y: 10 }), None);
    }
}
