//! Demo Host App
//!
//! Mounts both components behind a router. The todo list here only
//! stands in for whatever owns the records in a real application.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::{QueryFlagView, ToggleListRow};
use crate::config::AppConfig;
use crate::models::{TodoId, TodoRecord};

#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
    view! {
        <Router base=config.base_path>
            <nav class="app-nav">
                <A href="/">"Todos"</A>
                <A href="/about">"About"</A>
                <A href="/about?detail=true">"About (detail)"</A>
            </nav>
            <main class="main-content">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=TodoPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Hands the resolved search string to the view
#[component]
fn AboutPage() -> impl IntoView {
    let location = use_location();
    view! { <QueryFlagView search=location.search /> }
}

#[component]
fn TodoPage() -> impl IntoView {
    let (todos, set_todos) = signal(sample_todos());

    let on_toggle = Callback::new(move |id: TodoId| {
        set_todos.update(|todos| toggle_todo(todos, id));
    });
    let on_remove = Callback::new(move |id: TodoId| {
        set_todos.update(|todos| remove_todo(todos, id));
    });

    view! {
        <div class="TodoList">
            {move || todos.get().into_iter().map(|todo| view! {
                <ToggleListRow todo=todo on_remove=on_remove on_toggle=on_toggle />
            }).collect_view()}
        </div>
        <p class="item-count">{move || format!("{} todos", todos.get().len())}</p>
    }
}

fn sample_todos() -> Vec<TodoRecord> {
    vec![
        TodoRecord::new(1, "리액트의 기초 알아보기", true),
        TodoRecord::new(2, "컴포넌트 스타일링해 보기", true),
        TodoRecord::new(3, "일정 관리 앱 만들어 보기", false),
    ]
}

fn toggle_todo(todos: &mut [TodoRecord], id: TodoId) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
        todo.checked = !todo.checked;
    }
}

fn remove_todo(todos: &mut Vec<TodoRecord>, id: TodoId) {
    todos.retain(|todo| todo.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_target() {
        let mut todos = sample_todos();
        toggle_todo(&mut todos, 3);
        assert!(todos[2].checked);
        assert!(todos[0].checked);
        assert!(todos[1].checked);

        toggle_todo(&mut todos, 3);
        assert!(!todos[2].checked);
    }

    #[test]
    fn test_remove_drops_target() {
        let mut todos = sample_todos();
        remove_todo(&mut todos, 2);
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut todos = sample_todos();
        toggle_todo(&mut todos, 99);
        remove_todo(&mut todos, 99);
        assert_eq!(todos, sample_todos());
    }
}
