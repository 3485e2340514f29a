use dioxus::prelude::*;

use gopher_core::model::{CategoryKey, TopicSlug};

use crate::context::AppContext;
use crate::views::{
    ConfirmModal, NoticeSlot, NotesIntent, is_save_shortcut, use_notes_dispatcher,
    use_notes_state,
};

/// Freeform note editor for one topic. Keyed by the note key so navigating to
/// another topic remounts it with fresh state.
#[component]
pub fn NotesPanel(category: CategoryKey, topic: TopicSlug) -> Element {
    let ctx = use_context::<AppContext>();
    let notice = use_context::<NoticeSlot>();
    let notes = ctx.notes();

    let state = use_notes_state(&notes, &category, &topic);
    let dispatch = use_notes_dispatcher(state, notes, category, topic, notice);

    let saved_text = (state.saved)();
    let is_editing = (state.editing)();

    if saved_text.is_none() && !is_editing {
        return rsx! {
            section { class: "notes notes-empty",
                div { class: "notes-header",
                    h2 { "My Notes" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(NotesIntent::StartEditing),
                        "New Note"
                    }
                }
                p { class: "muted", "No notes yet. Click \"New Note\" to add one." }
            }
        };
    }

    let blank = !state.can_save();
    let draft = state.draft;
    let body_text = saved_text.clone().unwrap_or_default();

    rsx! {
        section { class: "notes",
            div { class: "notes-header",
                h2 { "My Notes" }
                div { class: "notes-actions",
                    if is_editing {
                        if saved_text.is_some() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| dispatch.call(NotesIntent::CancelEditing),
                                "Cancel"
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: blank,
                            onclick: move |_| dispatch.call(NotesIntent::Save),
                            "Save Note"
                        }
                    } else {
                        button {
                            class: "icon-btn",
                            r#type: "button",
                            title: "Edit note",
                            onclick: move |_| dispatch.call(NotesIntent::StartEditing),
                            "Edit"
                        }
                        button {
                            class: "icon-btn icon-danger",
                            r#type: "button",
                            title: "Delete note",
                            onclick: move |_| dispatch.call(NotesIntent::RequestDelete),
                            "Delete"
                        }
                    }
                }
            }

            if is_editing {
                textarea {
                    class: "notes-editor",
                    placeholder: "Write your notes here...",
                    autofocus: true,
                    value: "{draft}",
                    oninput: move |evt| dispatch.call(NotesIntent::EditDraft(evt.value())),
                    onkeydown: move |evt: KeyboardEvent| {
                        if is_save_shortcut(evt.data.modifiers(), &evt.data.key()) {
                            dispatch.call(NotesIntent::Save);
                        }
                    },
                }
            } else {
                pre { class: "notes-body", "{body_text}" }
            }

            if (state.confirm_delete)() {
                ConfirmModal {
                    title: "Delete Note",
                    body: "Are you sure you want to delete this note? This action cannot be undone.",
                    confirm_label: "Delete",
                    on_confirm: move |_| dispatch.call(NotesIntent::ConfirmDelete),
                    on_cancel: move |_| dispatch.call(NotesIntent::CancelDelete),
                }
            }
        }
    }
}
