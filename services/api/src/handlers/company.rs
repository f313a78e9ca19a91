//! Company and security listings

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use types::company::{CompanyInfo, SecurityInfo};

pub async fn company_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyInfo>>, AppError> {
    Ok(Json(state.client.company_list().await?))
}

pub async fn security_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<SecurityInfo>>, AppError> {
    Ok(Json(state.client.security_list().await?))
}
