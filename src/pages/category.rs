//! Category page: attractions under the category named in the URL.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading::Loading;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category = move || params.get().get("category").unwrap_or_default();

    // Refetches when the :category param changes.
    let attractions =
        LocalResource::new(move || crate::net::api::fetch_category_attractions(category()));

    view! {
        <section class="category-page">
            <h1 class="category-page__title">{category}</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    attractions
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="category-page__empty">
                                            "No attractions in this category yet."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="category-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|attraction| {
                                                    view! {
                                                        <article class="attraction-card">
                                                            {attraction
                                                                .image
                                                                .map(|src| {
                                                                    view! {
                                                                        <img class="attraction-card__image" src=src alt=""/>
                                                                    }
                                                                })}
                                                            <h2 class="attraction-card__name">{attraction.name}</h2>
                                                            {attraction
                                                                .description
                                                                .map(|text| {
                                                                    view! { <p class="attraction-card__description">{text}</p> }
                                                                })}
                                                        </article>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! { <p class="category-page__error">{err.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
