use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ProgressRing;
use crate::vm::{CategoryCardVm, map_category_cards};

#[component]
pub fn CategoryListView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let (category_count, topic_count) = (catalog.len(), catalog.topic_count());
    let cards = map_category_cards(&catalog, &ctx.progress().all_category_progress());

    rsx! {
        div { class: "page categories",
            header { class: "hero",
                h1 { "Gopher Notes" }
                p { class: "tagline", "Learn the Go programming language for free." }
                p { class: "muted", "{topic_count} topics across {category_count} categories" }
            }
            if cards.is_empty() {
                p { "No categories yet." }
            } else {
                ul { class: "category-grid",
                    for card in cards {
                        CategoryCard { key: "{card.slug}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryCard(card: CategoryCardVm) -> Element {
    rsx! {
        li { class: "card category-card",
            Link { to: Route::TopicList { category: card.slug.clone() },
                div { class: "category-card-body",
                    div {
                        h2 { class: "capitalize", "{card.title}" }
                        if let Some(description) = card.description.as_deref() {
                            p { class: "category-description", "{description}" }
                        }
                        p { class: "muted", "{card.completed} / {card.total} topics" }
                    }
                    ProgressRing { percentage: card.percentage }
                }
            }
        }
    }
}
