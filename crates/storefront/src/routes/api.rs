//! JSON API routes.

use axum::{Json, extract::State};
use gatehouse_core::{CustomerGroupId, CustomerId, StoreId};
use serde::Serialize;
use tower_sessions::Session;

use crate::context::SessionProvider;
use crate::error::Result;
use crate::gate::AccessGate;
use crate::models::SessionSnapshot;
use crate::state::AppState;

/// Access summary for the current visitor.
#[derive(Debug, Serialize)]
pub struct StoreSummary {
    pub store_id: StoreId,
    pub customer_id: Option<CustomerId>,
    pub customer_group_id: CustomerGroupId,
    pub login_required: bool,
    pub group_gating_active: bool,
    pub customer_group_permitted: bool,
    pub visitor_permitted: bool,
}

/// Describe how the gate sees the current visitor.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn store_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<StoreSummary>> {
    let snapshot = SessionSnapshot::load(&session).await?;
    let store = state.store();
    let config = state.config_store().for_store(store.0);
    let gate = AccessGate::new(&snapshot, &store, &config);

    Ok(Json(StoreSummary {
        store_id: gate.store_id(),
        customer_id: snapshot.current_customer().map(|c| c.id),
        customer_group_id: gate.customer_group_id(),
        login_required: gate.is_login_required(),
        group_gating_active: gate.is_group_gating_active(),
        customer_group_permitted: gate.is_customer_group_permitted(),
        visitor_permitted: gate.is_visitor_permitted(),
    }))
}
