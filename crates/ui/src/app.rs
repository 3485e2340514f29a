use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const STYLESHEET: Asset = asset!("/assets/style.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: STYLESHEET }
        document::Title { "Gopher Notes" }

        div { class: "shell",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! { CrashScreen { report: format!("{errors:?}") } },
                Router::<Route> {}
            }
            footer { class: "shell-footer muted",
                "Progress and notes are saved on this device only."
            }
        }
    }
}

#[component]
fn CrashScreen(report: String) -> Element {
    rsx! {
        section { class: "fatal",
            h1 { "Gopher Notes hit an unexpected error" }
            p { "Your saved progress is untouched. Restart the app to continue." }
            details {
                summary { "Details" }
                pre { "{report}" }
            }
        }
    }
}
