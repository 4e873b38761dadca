//! State

use std::sync::Arc;

use estoque_app::context::AppContext;
use jiff::Timestamp;

/// Shared handler state, injected into the depot for every request.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) started_at: Timestamp,
}

impl State {
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self {
            app,
            started_at: Timestamp::now(),
        })
    }
}
