//! Centralized glyph icon API.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named glyphs used by shared controls.
pub enum IconName {
    /// Start playback.
    Play,
    /// Pause playback.
    Pause,
    /// Previous track.
    Previous,
    /// Next track.
    Next,
    /// Shuffle mode.
    Shuffle,
    /// Repeat mode.
    Repeat,
    /// Dismiss an overlay.
    Close,
    /// Remove an item.
    Remove,
}

impl IconName {
    /// Stable token for the `data-ui-icon` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Shuffle => "shuffle",
            Self::Repeat => "repeat",
            Self::Close => "close",
            Self::Remove => "remove",
        }
    }

    /// Text glyph rendered inside the icon element.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Play => "\u{25B6}",
            Self::Pause => "\u{23F8}",
            Self::Previous => "\u{23EE}",
            Self::Next => "\u{23ED}",
            Self::Shuffle => "\u{1F500}",
            Self::Repeat => "\u{1F501}",
            Self::Close => "\u{00D7}",
            Self::Remove => "\u{2715}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with dense text.
    Sm,
    #[default]
    /// Default control size.
    Md,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Decorative glyph; the owning control carries the accessible label.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
