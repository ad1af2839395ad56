//! Picker overlay session state.

use crate::model::CellIndex;

/// Identity of one picker open/close cycle, used to pair cancel-key listener registration with
/// its removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickerToken(pub u64);

/// The open picker overlay, scoped to one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSession {
    /// Cell that receives the selected icon.
    pub cell: CellIndex,
    /// Listener pairing token for this overlay instance.
    pub token: PickerToken,
}

/// Why a picker closed without a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCloseReason {
    /// Click landed outside the picker panel.
    Backdrop,
    /// Explicit close control.
    CloseButton,
    /// Escape key.
    CancelKey,
}

impl PickerCloseReason {
    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::CloseButton => "close-button",
            Self::CancelKey => "cancel-key",
        }
    }
}
