//! Status page handler.

use axum::{extract::State, response::Html};
use chrono::Utc;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::render_status_page;

/// Status page handler, also serving every path no other route claims.
///
/// Renders the configured version and the current time; the request itself
/// (method, query, body) is ignored.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_status_page(&state.tera, &state.config, Utc::now())?;
    Ok(Html(html))
}
