//! Icon Component
//!
//! Inline Material Design glyphs used as row markers.

use leptos::prelude::*;

/// Available glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    RadioButtonUnchecked,
    Clear,
}

impl Icon {
    /// Stable name, exposed as `data-icon` on the rendered svg
    pub fn name(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::RadioButtonUnchecked => "radio-button-unchecked",
            Icon::Clear => "clear",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Icon::CheckCircle => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
            Icon::RadioButtonUnchecked => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8z",
            Icon::Clear => "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
        }
    }
}

/// Renders one glyph at the current font size and color
#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! {
        <svg
            class="icon"
            data-icon=icon.name()
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=icon.path() />
        </svg>
    }
}
