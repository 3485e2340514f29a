use std::time::Duration;

use dioxus::prelude::*;

/// How long a notice stays on screen before it clears itself.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown after a save, delete or reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Shared slot holding the notice currently on screen.
#[derive(Clone, Copy, PartialEq)]
pub struct NoticeSlot(Signal<Option<Notice>>);

impl NoticeSlot {
    #[must_use]
    pub fn new() -> Self {
        Self(Signal::new(None))
    }

    #[must_use]
    pub fn current(&self) -> Option<Notice> {
        self.0.cloned()
    }

    pub fn dismiss(&mut self) {
        self.0.set(None);
    }

    /// Show `notice` and clear it after `NOTICE_TTL` unless a newer notice
    /// replaced it in the meantime.
    pub fn flash(&mut self, notice: Notice) {
        let mut slot = self.0;
        slot.set(Some(notice.clone()));
        spawn(async move {
            tokio::time::sleep(NOTICE_TTL).await;
            if slot.peek().as_ref() == Some(&notice) {
                slot.set(None);
            }
        });
    }
}

#[component]
pub fn NoticeBanner(slot: NoticeSlot) -> Element {
    let Some(notice) = slot.current() else {
        return rsx! {};
    };
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };

    rsx! {
        div { class, role: "status",
            span { "{notice.message}" }
            button {
                class: "notice-dismiss",
                r#type: "button",
                onclick: move |_| {
                    let mut slot = slot;
                    slot.dismiss();
                },
                "×"
            }
        }
    }
}
