use dioxus::prelude::*;

use crate::vm::ProgressTier;

const RING_RADIUS: f64 = 45.0;

#[component]
pub fn ProgressBar(percentage: u8, #[props(default = true)] show_label: bool) -> Element {
    let tier = ProgressTier::from_percentage(percentage);
    let fill_class = format!("progress-fill {}", tier.class());

    rsx! {
        div { class: "progress-bar",
            if show_label {
                div { class: "progress-label",
                    span { "Progress" }
                    span { class: "progress-value", "{percentage}%" }
                }
            }
            div { class: "progress-track",
                div { class: fill_class, style: "width: {percentage}%" }
            }
        }
    }
}

/// Circular indicator; shows a check mark instead of the number at 100%.
#[component]
pub fn ProgressRing(percentage: u8) -> Element {
    let tier = ProgressTier::from_percentage(percentage);
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let offset = circumference - f64::from(percentage) / 100.0 * circumference;
    let dasharray = format!("{circumference:.2}");
    let dashoffset = format!("{offset:.2}");
    let color = tier.color();

    rsx! {
        div { class: "progress-ring",
            svg { "viewBox": "0 0 100 100",
                circle {
                    class: "ring-track",
                    "cx": "50",
                    "cy": "50",
                    "r": "45",
                    "fill": "none",
                    "stroke-width": "4",
                }
                circle {
                    class: "ring-fill",
                    "cx": "50",
                    "cy": "50",
                    "r": "45",
                    "fill": "none",
                    "stroke": color,
                    "stroke-width": "4",
                    "stroke-linecap": "round",
                    "stroke-dasharray": dasharray,
                    "stroke-dashoffset": dashoffset,
                }
            }
            if tier == ProgressTier::Complete {
                span { class: "ring-label ring-done", "✓" }
            } else {
                span { class: "ring-label", style: "color: {color}", "{percentage}%" }
            }
        }
    }
}

#[component]
pub fn ConfirmModal(
    title: String,
    body: String,
    confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "{title}" }
                p { class: "modal-body", "{body}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
