use leptos::prelude::*;
use leptos_router::components::A;
use pokedex_domain::{AppRoute, ListItem};

/// Grid card linking to the detail view
#[component]
pub fn PokemonCard(item: ListItem) -> impl IntoView {
    let href = AppRoute::detail_path(item.id);
    let number = item.display_number();
    let alt = item.name.clone();

    view! {
        <A href=href attr:class="pokemon-card">
            <img class="pokemon-card-image" src=item.image_url alt=alt />
            <div class="pokemon-card-body">
                <span class="pokemon-card-name">{item.name}</span>
                <span class="pokemon-card-number">{number}</span>
            </div>
        </A>
    }
}
