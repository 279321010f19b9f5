//! Query Flag View Component
//!
//! Static intro page with an extra paragraph when `detail=true` is in the
//! query string.

use leptos::prelude::*;

use crate::query::{parse_query, QueryParams};

pub const TITLE: &str = "소개";
pub const SUBTITLE: &str = "라우터 기초 실습";
pub const DETAIL_MESSAGE: &str = "detail 값을 true로 설정하셨군요";

/// Name of the gating parameter
pub const DETAIL_PARAM: &str = "detail";

/// Exact string match; "True", "1" or a bare key do not count
pub fn show_detail(params: &QueryParams) -> bool {
    params.get(DETAIL_PARAM) == Some("true")
}

/// Everything the view shows for one search string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryFlagContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub detail: Option<&'static str>,
}

impl QueryFlagContent {
    pub fn from_search(search: &str) -> Self {
        let params = parse_query(search);
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            detail: show_detail(&params).then_some(DETAIL_MESSAGE),
        }
    }
}

/// Intro page driven by the location's search string
#[component]
pub fn QueryFlagView(#[prop(into)] search: Signal<String>) -> impl IntoView {
    let content = Memo::new(move |_| search.with(|s| QueryFlagContent::from_search(s)));

    view! {
        <div>
            <h1>{move || content.get().title}</h1>
            <p>{move || content.get().subtitle}</p>
            {move || content.get().detail.map(|message| view! { <p>{message}</p> })}
        </div>
    }
}
