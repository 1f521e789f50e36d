//! Home page: category grid fetched on mount.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading::Loading;

#[component]
pub fn HomePage() -> impl IntoView {
    let categories = LocalResource::new(|| crate::net::api::fetch_categories());

    view! {
        <section class="home-page">
            <h1>"Explore the Arabian Peninsula"</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    categories
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="home-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|category| {
                                                let href = format!("/category/{}", category.name);
                                                view! {
                                                    <A href=href>
                                                        <div class="category-card">
                                                            {category
                                                                .image
                                                                .map(|src| {
                                                                    view! {
                                                                        <img class="category-card__image" src=src alt=""/>
                                                                    }
                                                                })}
                                                            <span class="category-card__name">{category.name}</span>
                                                        </div>
                                                    </A>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="home-page__error">{err.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
