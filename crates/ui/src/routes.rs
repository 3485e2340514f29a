use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    CategoryListView, NoticeBanner, NoticeSlot, ProgressView, TopicListView, TopicView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CategoryListView)] Home {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/:category", TopicListView)] TopicList { category: String },
        #[route("/:category/:topic", TopicView)] Topic { category: String, topic: String },
}

#[component]
fn Layout() -> Element {
    let notice = use_context_provider(NoticeSlot::new);

    rsx! {
        div { class: "app",
            NavBar {}
            NoticeBanner { slot: notice }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "Gopher Notes" }
            ul {
                li { Link { to: Route::Home {}, "Topics" } }
                li { Link { to: Route::Progress {}, "Progress" } }
            }
        }
    }
}
