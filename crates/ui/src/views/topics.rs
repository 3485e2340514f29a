use dioxus::prelude::*;
use dioxus_router::Link;

use gopher_core::model::CategoryKey;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ProgressBar;
use crate::vm::{TopicItemVm, TopicPageVm};

#[component]
pub fn TopicListView(category: String) -> Element {
    let ctx = use_context::<AppContext>();

    let Ok(key) = CategoryKey::parse(&category) else {
        return rsx! {
            div { class: "page",
                p { "Unknown category." }
                Link { to: Route::Home {}, "Back to all topics" }
            }
        };
    };
    let page = TopicPageVm::build(&ctx.progress(), &key);

    rsx! {
        div { class: "page topics",
            nav { class: "breadcrumb",
                Link { to: Route::Home {}, "Home" }
                span { " / " }
                span { class: "capitalize", "{page.heading}" }
            }

            h1 { class: "capitalize", "{page.heading}" }
            if let Some(description) = page.description.as_deref() {
                p { class: "category-description", "{description}" }
            }

            if !page.known {
                p { class: "muted", "This category does not exist." }
            }

            section { class: "category-progress",
                ProgressBar { percentage: page.percentage }
                p { class: "muted", "{page.completed} of {page.total} topics completed" }
            }

            ul { class: "topic-grid",
                for item in page.items.iter().cloned() {
                    TopicLink {
                        key: "{item.slug}",
                        category: page.category_slug.clone(),
                        item,
                    }
                }
            }
        }
    }
}

#[component]
fn TopicLink(category: String, item: TopicItemVm) -> Element {
    let class = if item.completed {
        "card topic-card completed"
    } else {
        "card topic-card"
    };

    rsx! {
        li { class,
            Link {
                to: Route::Topic {
                    category,
                    topic: item.slug.clone(),
                },
                span { class: "topic-title", "{item.title}" }
                if item.completed {
                    span { class: "topic-done", title: "Completed", "✓" }
                }
            }
        }
    }
}
