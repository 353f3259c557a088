use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State as AppState},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{error::AppError, lookup, state::State};

#[derive(Deserialize)]
pub struct SearchParams {
    search: Option<String>,
}

pub async fn candidates_handler(
    AppState(state): AppState<Arc<State>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let response = lookup::list(&state.store, params.search.as_deref()).await?;

    Ok(Json(response))
}
