//! UI Components
//!
//! Stateless Leptos components; every action goes through caller-supplied callbacks.

mod icons;
mod query_flag_view;
mod toggle_list_row;

pub use icons::{Icon, IconGlyph};
pub use query_flag_view::{
    show_detail, QueryFlagContent, QueryFlagView, DETAIL_MESSAGE, DETAIL_PARAM, SUBTITLE, TITLE,
};
pub use toggle_list_row::{dispatch_click, RowPresentation, RowZone, ToggleListRow};
