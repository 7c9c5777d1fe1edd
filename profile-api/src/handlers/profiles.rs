use axum::{extract::State, Json};

use crate::{
    dto::{ApiResponse, ProfileResponse, RegistrationRequest},
    error::AppResult,
    state::AppState,
};

pub async fn list_profiles(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ProfileResponse>>>> {
    let profiles = state.profile_service.get_all_profiles().await?;
    let responses: Vec<ProfileResponse> = profiles.into_iter().map(|p| p.into()).collect();
    Ok(Json(ApiResponse::success(responses)))
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> AppResult<Json<ApiResponse<ProfileResponse>>> {
    let request = request.to_domain()?;
    let profile = state.profile_service.register(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        profile.into(),
        "Profile registered successfully".to_string(),
    )))
}
