//! Detail Page
//!
//! One Pokémon, keyed by the `:id` route segment. Refetches whenever the
//! segment changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use pokedex_domain::{DetailController, DetailItem, LoadState, CATALOGUE_PATH, DETAIL_ERROR_MESSAGE};

use crate::api;

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let controller = RwSignal::new(DetailController::new());

    Effect::new(move |_| {
        let id = params.get().get("id");
        let ticket = controller
            .try_update(|c| c.sync_from_route(id.as_deref()))
            .flatten();

        if let Some(ticket) = ticket {
            spawn_local(async move {
                let result = api::get_pokemon(&ticket.id).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(
                        &format!("[Detail] Error loading {}: {}", ticket.id, e).into(),
                    );
                }
                controller.update(|c| {
                    c.complete(&ticket, result);
                });
            });
        }
    });

    let load_state = Memo::new(move |_| controller.with(|c| c.load_state()));

    let back_link = move || {
        view! { <A href=CATALOGUE_PATH attr:class="back-link">"« Back to list"</A> }
    };

    view! {
        <div class="detail-page">
            {move || match load_state.get() {
                LoadState::Idle | LoadState::Loading => view! {
                    <div class="loading">"Loading details..."</div>
                }.into_any(),
                LoadState::Failed => {
                    let message = controller.with_untracked(|c| {
                        c.error_message().unwrap_or(DETAIL_ERROR_MESSAGE).to_string()
                    });
                    view! {
                        <div class="alert error">{message}</div>
                        {back_link()}
                    }.into_any()
                }
                LoadState::Ready => match controller.with_untracked(|c| c.item().cloned()) {
                    Some(item) => view! {
                        {back_link()}
                        <DetailView item=item />
                    }.into_any(),
                    None => ().into_any(),
                },
            }}
        </div>
    }
}

#[component]
fn DetailView(item: DetailItem) -> impl IntoView {
    let number = item.display_number();
    let measurements = format!(
        "Weight: {} kg | Height: {} m",
        item.weight_kilograms(),
        item.height_metres()
    );
    let hidden = item.hidden_moves();
    let alt = item.name.clone();

    view! {
        <div class="detail-layout">
            <section class="detail-card">
                <img class="detail-artwork" src=item.artwork_url alt=alt />
                <h2 class="detail-name">{item.name}</h2>
                <p class="detail-number">{number}</p>
                <p class="detail-measurements">{measurements}</p>
            </section>

            <section class="detail-lists">
                <h3>"Abilities"</h3>
                <ul>
                    {item.abilities.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                </ul>

                <h3>"Forms"</h3>
                <ul>
                    {item.forms.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                </ul>

                <h3>"Moves (first 10)"</h3>
                <div class="move-badges">
                    {item.moves.into_iter().map(|name| view! { <span class="badge">{name}</span> }).collect_view()}
                </div>
                {(hidden > 0).then(|| view! { <p class="more-moves">{format!("...and {} more.", hidden)}</p> })}
            </section>
        </div>
    }
}
