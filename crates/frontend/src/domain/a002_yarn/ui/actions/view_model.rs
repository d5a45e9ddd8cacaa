use super::state::{YarnCall, YarnOutcome, YarnPageState};
use crate::domain::a002_yarn::api;
use crate::shared::api_utils::ApiError;
use leptos::prelude::*;

/// ViewModel for the yarn page, created once per mount
#[derive(Clone, Copy)]
pub struct YarnActionsViewModel {
    pub state: RwSignal<YarnPageState>,
}

impl YarnActionsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(YarnPageState::default()),
        }
    }

    /// Runs the selected action: one request, then back to idle
    pub fn action_command(&self) {
        let Some(call) = self.state.try_update(YarnPageState::begin).flatten() else {
            return;
        };

        let state = self.state;
        leptos::task::spawn_local(async move {
            let outcome = execute(call).await;
            if let Err(e) = &outcome {
                log::error!("Yarn action failed: {}", e);
            }
            state.update(|s| s.finish(outcome));
        });
    }
}

impl Default for YarnActionsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

async fn execute(call: YarnCall) -> Result<YarnOutcome, ApiError> {
    match call {
        YarnCall::Request(request) => api::request_yarn(&request).await.map(YarnOutcome::Record),
        YarnCall::View { status } => api::view_yarn(status).await.map(YarnOutcome::Record),
        YarnCall::Receive(receipt) => api::receive_yarn(&receipt).await.map(YarnOutcome::Record),
        YarnCall::ViewAll => api::view_all_yarn().await.map(YarnOutcome::Records),
    }
}
