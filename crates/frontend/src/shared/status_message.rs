use leptos::prelude::*;

/// Outcome line shown under a form after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage::Error(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(t) | StatusMessage::Error(t) => t,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

/// Renders the current message, if any
#[component]
pub fn StatusLine(#[prop(into)] message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            let class = if m.is_error() {
                "status-line status-line--error"
            } else {
                "status-line status-line--success"
            };
            let icon = if m.is_error() { "❌ " } else { "✅ " };
            view! { <p class=class>{icon}{m.text().to_string()}</p> }
        })
    }
}
