//! Pagination Bar Component
//!
//! First / previous / numbered / next / last buttons. Buttons whose target
//! is out of range are disabled; the parent decides what a request does.

use leptos::prelude::*;
use pokedex_domain::{page_window, PageRequest};

/// How many numbered buttons to show
const WINDOW_WIDTH: u32 = 5;

#[component]
pub fn PaginationBar(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    #[prop(into)] on_request: Callback<PageRequest>,
) -> impl IntoView {
    let button = move |label: String, request: PageRequest| {
        let disabled = move || request.resolve(current.get(), total.get()).is_none();
        let is_current = move || matches!(request, PageRequest::Number(n) if n == current.get());
        view! {
            <button
                type="button"
                class=move || if is_current() { "page-btn active" } else { "page-btn" }
                disabled=disabled
                on:click=move |_| on_request.run(request)
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="pagination-bar">
            {button("«".to_string(), PageRequest::First)}
            {button("‹".to_string(), PageRequest::Previous)}
            {move || {
                page_window(current.get(), total.get(), WINDOW_WIDTH)
                    .map(|page| button(page.to_string(), PageRequest::Number(page)))
                    .collect_view()
            }}
            {button("›".to_string(), PageRequest::Next)}
            {button("»".to_string(), PageRequest::Last)}
            <span class="page-info">
                {move || format!("Page {} of {}", current.get(), total.get())}
            </span>
        </nav>
    }
}
