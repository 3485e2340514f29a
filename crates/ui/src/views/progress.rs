use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{
    ConfirmModal, NoticeSlot, ProgressBar, ProgressIntent, use_progress_dispatcher,
    use_progress_state,
};
use crate::vm::{CategoryCardVm, OverallVm, map_category_cards};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let notice = use_context::<NoticeSlot>();
    let progress = ctx.progress();
    let state = use_progress_state();
    let dispatch = use_progress_dispatcher(state, progress.clone(), notice);

    state.track();
    let categories = progress.all_category_progress();
    let overall = OverallVm::from(&progress.overall_progress());
    let cards = map_category_cards(progress.catalog(), &categories);

    rsx! {
        div { class: "page progress",
            header { class: "progress-header",
                h1 { "Your Learning Progress" }
                button {
                    class: "btn btn-danger-soft",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ProgressIntent::RequestReset),
                    "Reset Progress"
                }
            }

            OverallCard { overall: overall.clone() }

            section {
                h2 { "Progress by Category" }
                ul { class: "category-grid",
                    for card in cards {
                        CategoryProgressCard { key: "{card.slug}", card }
                    }
                }
            }

            if let Some(message) = overall.message {
                p { class: "motivation", "{message}" }
            }

            if (state.confirm_reset)() {
                ConfirmModal {
                    title: "Reset Progress?",
                    body: "Are you sure you want to reset all your progress? This action cannot be undone.",
                    confirm_label: "Yes, Reset",
                    on_confirm: move |_| dispatch.call(ProgressIntent::ConfirmReset),
                    on_cancel: move |_| dispatch.call(ProgressIntent::CancelReset),
                }
            }
        }
    }
}

#[component]
fn OverallCard(overall: OverallVm) -> Element {
    rsx! {
        section { class: "overall-card",
            h2 { "Overall Progress" }
            div { class: "overall-summary",
                span { "{overall.completed} of {overall.total} topics completed" }
                span { class: "overall-percentage", "{overall.percentage}%" }
            }
            ProgressBar { percentage: overall.percentage, show_label: false }
            if overall.all_done {
                p { class: "congrats", "Congratulations! You've completed all topics!" }
            }
        }
    }
}

#[component]
fn CategoryProgressCard(card: CategoryCardVm) -> Element {
    let badge = format!("badge {}", card.tier.class());

    rsx! {
        li { class: "card progress-card",
            Link { to: Route::TopicList { category: card.slug.clone() },
                div { class: "progress-card-head",
                    h3 { class: "capitalize", "{card.title}" }
                    span { class: badge, "{card.percentage}%" }
                }
                p { class: "muted", "{card.completed} / {card.total} topics" }
                ProgressBar { percentage: card.percentage, show_label: false }
            }
        }
    }
}
