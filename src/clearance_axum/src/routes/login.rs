//! Axum-specific login route.

use axum::extract::State;
use clearance_adapters::LoginRouter;

use crate::adapters::{AxumLoginRequest, AxumResponse};

/// Axum login route.
///
/// Uses Axum's extractors to read the body; the validation and authentication
/// flow lives in the framework-agnostic [`LoginRouter`].
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(router): State<LoginRouter>,
    AxumLoginRequest(request): AxumLoginRequest,
) -> AxumResponse {
    router.route(Some(request)).await.into()
}
