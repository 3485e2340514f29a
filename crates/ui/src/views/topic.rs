use dioxus::prelude::*;
use dioxus_router::Link;

use gopher_core::model::{CategoryKey, TopicSlug, note_key};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{
    NoticeSlot, NotesPanel, ProgressIntent, use_progress_dispatcher, use_progress_state,
};
use crate::vm::format_completion_date;

#[component]
pub fn TopicView(category: String, topic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let notice = use_context::<NoticeSlot>();
    let progress = ctx.progress();
    let state = use_progress_state();
    let dispatch = use_progress_dispatcher(state, progress.clone(), notice);

    let (Ok(key), Ok(slug)) = (CategoryKey::parse(&category), TopicSlug::parse(&topic))
    else {
        return rsx! { MissingTopic {} };
    };
    if !progress.catalog().contains_topic(&key, &slug) {
        return rsx! { MissingTopic {} };
    }

    // Re-read the ledger whenever a toggle lands.
    state.track();
    let completed_on = progress
        .completion_record(&key, &slug)
        .map(|record| format_completion_date(&record));
    let is_completed = completed_on.is_some();

    let toggle = ProgressIntent::Toggle {
        category: key.clone(),
        topic: slug.clone(),
    };

    let heading = slug.display_name();
    let category_title = key.display_name();
    let notes_key = note_key(&key, &slug);

    rsx! {
        div { class: "page topic",
            nav { class: "breadcrumb",
                Link { to: Route::Home {}, "Home" }
                span { " / " }
                Link {
                    class: "capitalize",
                    to: Route::TopicList { category: key.route_slug() },
                    "{category_title}"
                }
                span { " / " }
                span { class: "capitalize", "{heading}" }
            }

            h1 { class: "capitalize", "{heading}" }

            div { class: "completion",
                button {
                    class: if is_completed { "btn btn-secondary" } else { "btn btn-primary" },
                    r#type: "button",
                    onclick: move |_| dispatch.call(toggle.clone()),
                    if is_completed { "Mark as incomplete" } else { "Mark as complete" }
                }
                if let Some(date) = completed_on {
                    span { class: "muted completed-on", "Completed on {date}" }
                }
            }

            NotesPanel { key: "{notes_key}", category: key.clone(), topic: slug.clone() }
        }
    }
}

#[component]
fn MissingTopic() -> Element {
    rsx! {
        div { class: "page",
            p { "Topic not found." }
            Link { to: Route::Home {}, "Back to all topics" }
        }
    }
}
