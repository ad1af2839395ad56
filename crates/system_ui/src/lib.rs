//! Shared UI primitive library for the icon-grid widget and its companion player.
//!
//! The crate owns reusable Leptos primitives, a centralized glyph icon API, and the stable
//! `data-ui-*` DOM contract consumed by the widget stylesheet. Widget components compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, Cluster, Heading, IconButton, LayoutAlign, LayoutGap,
    LayoutJustify, LiveRegion, Modal, NumberField, RangeField, Stack, Text, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Cluster, Heading, Icon, IconButton, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutJustify, LiveRegion, Modal, NumberField, RangeField, Stack,
        Text, TextRole, TextTone,
    };
}
