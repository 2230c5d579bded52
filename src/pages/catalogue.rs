//! Catalogue Page
//!
//! Paginated, searchable, sortable grid. The `?page=` query parameter drives
//! every fetch; pagination buttons only rewrite the URL.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use pokedex_domain::{
    ListController, LoadState, PageRequest, SortOrder, LIST_ERROR_MESSAGE, PAGE_SIZE,
};

use crate::api;
use crate::components::{PaginationBar, PokemonCard};
use crate::context::use_session;

#[component]
pub fn CataloguePage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let navigate = StoredValue::new(use_navigate());

    let controller = RwSignal::new(ListController::new(PAGE_SIZE));

    // URL -> state: re-derive the page on every query change
    Effect::new(move |_| {
        let page_param = query.get().get("page");
        let ticket = controller
            .try_update(|c| c.sync_from_url(page_param.as_deref()))
            .flatten();

        if let Some(ticket) = ticket {
            web_sys::console::log_1(
                &format!("[Catalogue] Loading page {} (offset {})", ticket.page, ticket.offset).into(),
            );
            spawn_local(async move {
                let result = api::list_pokemons(ticket.limit, ticket.offset).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(
                        &format!("[Catalogue] Error loading page {}: {}", ticket.page, e).into(),
                    );
                }
                let applied = controller
                    .try_update(|c| c.complete(ticket, result))
                    .unwrap_or(false);
                if !applied {
                    web_sys::console::log_1(
                        &format!("[Catalogue] Discarded stale response for page {}", ticket.page).into(),
                    );
                }
            });
        }
    });

    let load_state = Memo::new(move |_| controller.with(|c| c.load_state()));
    let visible = Memo::new(move |_| controller.with(|c| c.visible()));
    let current_page = Signal::derive(move || controller.with(|c| c.page()));
    let total_pages = Signal::derive(move || controller.with(|c| c.total_pages()));

    // State -> URL only through an explicit navigation
    let on_request = Callback::new(move |request: PageRequest| {
        if let Some(url) = controller.with_untracked(|c| c.navigate(request)) {
            navigate.with_value(|nav| nav(&url, NavigateOptions::default()));
        }
    });

    view! {
        <div class="catalogue-page">
            <header class="catalogue-header">
                <h1>"Pokédex"</h1>
                <button type="button" class="logout-btn" on:click=move |_| session.logout()>
                    "Log out"
                </button>
            </header>

            <div class="catalogue-controls">
                <label>
                    "Search: "
                    <input
                        type="text"
                        placeholder="Search by name..."
                        prop:value=move || controller.with(|c| c.search().to_string())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            controller.update(|c| c.set_search(term));
                        }
                    />
                </label>
                <label>
                    "Sort by: "
                    <select
                        prop:value=move || controller.with(|c| c.sort().as_str())
                        on:change=move |ev| {
                            let sort = event_target_value(&ev)
                                .parse::<SortOrder>()
                                .unwrap_or_default();
                            controller.update(|c| c.set_sort(sort));
                        }
                    >
                        <option value="id">"Number (ID)"</option>
                        <option value="name">"Name (A-Z)"</option>
                    </select>
                </label>
            </div>

            {move || match load_state.get() {
                LoadState::Idle | LoadState::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                LoadState::Failed => {
                    let message = controller.with_untracked(|c| {
                        c.error_message().unwrap_or(LIST_ERROR_MESSAGE).to_string()
                    });
                    view! { <div class="alert error">{message}</div> }.into_any()
                }
                LoadState::Ready => view! {
                    <div class="pokemon-grid">
                        <For
                            each=move || visible.get()
                            key=|item| item.id
                            children=|item| view! { <PokemonCard item=item /> }
                        />
                    </div>
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <p class="empty">"No Pokémon match your search."</p>
                    </Show>
                    <PaginationBar current=current_page total=total_pages on_request=on_request />
                }.into_any(),
            }}
        </div>
    }
}
