//! Toggle List Row Component
//!
//! One todo entry with a toggle zone and a remove zone. Both actions are
//! handed to the caller; the row never changes the record itself.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::models::{TodoId, TodoRecord};

/// Clickable areas of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowZone {
    Toggle,
    Remove,
}

/// Visual state of the toggle zone, derived from `checked` alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPresentation {
    pub checkbox_class: &'static str,
    pub marker: Icon,
}

impl RowPresentation {
    pub fn of(checked: bool) -> Self {
        if checked {
            Self {
                checkbox_class: "checkbox checked",
                marker: Icon::CheckCircle,
            }
        } else {
            Self {
                checkbox_class: "checkbox",
                marker: Icon::RadioButtonUnchecked,
            }
        }
    }
}

/// Route a click on `zone` to exactly one of the callbacks
pub fn dispatch_click(
    zone: RowZone,
    id: TodoId,
    on_toggle: impl FnOnce(TodoId),
    on_remove: impl FnOnce(TodoId),
) {
    log::debug!("[ROW] {:?} clicked for todo {}", zone, id);
    match zone {
        RowZone::Toggle => on_toggle(id),
        RowZone::Remove => on_remove(id),
    }
}

/// A single todo row
///
/// Clicking the marker or the text calls `on_toggle(id)`; clicking the
/// clear glyph calls `on_remove(id)`.
#[component]
pub fn ToggleListRow(
    todo: TodoRecord,
    #[prop(into)] on_remove: Callback<TodoId>,
    #[prop(into)] on_toggle: Callback<TodoId>,
) -> impl IntoView {
    let TodoRecord { id, text, checked } = todo;
    let presentation = RowPresentation::of(checked);

    let click = move |zone: RowZone| {
        dispatch_click(zone, id, |id| on_toggle.run(id), |id| on_remove.run(id));
    };

    view! {
        <div class="TodoListItem">
            <div class=presentation.checkbox_class on:click=move |_| click(RowZone::Toggle)>
                <IconGlyph icon=presentation.marker />
                <div class="text">{text}</div>
            </div>
            <div class="remove" on:click=move |_| click(RowZone::Remove)>
                <IconGlyph icon=Icon::Clear />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_checked_presentation() {
        let presentation = RowPresentation::of(true);
        assert_eq!(presentation.checkbox_class, "checkbox checked");
        assert_eq!(presentation.marker, Icon::CheckCircle);
    }

    #[test]
    fn test_unchecked_presentation() {
        let todo = TodoRecord::new(1, "buy milk", false);
        let presentation = RowPresentation::of(todo.checked);
        assert_eq!(presentation.checkbox_class, "checkbox");
        assert_eq!(presentation.marker, Icon::RadioButtonUnchecked);
    }

    #[test]
    fn test_markers_are_mutually_exclusive() {
        assert_ne!(RowPresentation::of(true).marker, RowPresentation::of(false).marker);
    }

    #[test]
    fn test_toggle_click_calls_only_on_toggle() {
        let calls = RefCell::new(Vec::new());
        dispatch_click(
            RowZone::Toggle,
            7,
            |id| calls.borrow_mut().push(("toggle", id)),
            |id| calls.borrow_mut().push(("remove", id)),
        );
        assert_eq!(calls.into_inner(), vec![("toggle", 7)]);
    }

    #[test]
    fn test_remove_click_calls_only_on_remove() {
        let calls = RefCell::new(Vec::new());
        dispatch_click(
            RowZone::Remove,
            7,
            |id| calls.borrow_mut().push(("toggle", id)),
            |id| calls.borrow_mut().push(("remove", id)),
        );
        assert_eq!(calls.into_inner(), vec![("remove", 7)]);
    }

    #[test]
    fn test_repeated_clicks_are_not_debounced() {
        let toggles = RefCell::new(0);
        for _ in 0..3 {
            dispatch_click(RowZone::Toggle, 1, |_| *toggles.borrow_mut() += 1, |_| {});
        }
        assert_eq!(toggles.into_inner(), 3);
    }
}
