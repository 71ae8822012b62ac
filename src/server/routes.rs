use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{self, MacroSpec};
use crate::error::{AppError, AppResult};
use crate::store::{MacroList, ProfileDocument, ProfileStore};

use super::AppState;

const DEFAULT_PROFILE: &str = "default";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/macros", get(list_macros))
        .route("/save_profile", post(save_profile))
        .route("/delete_profile", post(delete_profile))
        .route("/rename_profile", post(rename_profile))
        .route("/all_profiles", get(all_profiles))
        .route("/list_profiles", get(list_profiles))
        .route("/get_profile", get(get_profile))
        .route("/trigger/{macro_key}", get(trigger))
        .route("/dashboard/status.json", get(dashboard_status))
}

#[derive(Debug, Deserialize)]
struct SaveProfileRequest {
    user: Option<String>,
    macros: Option<MacroList>,
    profile: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeleteProfileRequest {
    user: Option<String>,
    profile: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RenameProfileRequest {
    user: Option<String>,
    old_profile: Option<String>,
    new_profile: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileQuery {
    user: Option<String>,
    profile: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserQuery {
    user: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct SavedResponse {
    status: &'static str,
    user: String,
    profile: String,
}

#[derive(Debug, Serialize)]
struct RenamedResponse {
    status: &'static str,
    from: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct ProfileNamesResponse {
    profiles: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MacrosResponse {
    macros: MacroList,
}

#[derive(Debug, Serialize)]
struct TriggeredResponse {
    status: &'static str,
    #[serde(rename = "macro")]
    macro_key: String,
}

async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

async fn list_macros() -> Json<&'static [MacroSpec]> {
    Json(catalog::MACROS)
}

async fn save_profile(
    State(state): State<AppState>,
    body: Result<Json<SaveProfileRequest>, JsonRejection>,
) -> AppResult<Json<SavedResponse>> {
    let request = json_body(body)?;
    let user = required(request.user, "user")?;
    let macros = request
        .macros
        .ok_or_else(|| AppError::InvalidInput("missing `macros`".to_string()))?;
    let profile = request
        .profile
        .filter(|profile| !profile.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let profile = with_store(&state, {
        let user = user.clone();
        move |store| store.set_profile(&user, &profile, macros)
    })
    .await?;

    Ok(Json(SavedResponse {
        status: "saved",
        user,
        profile,
    }))
}

async fn delete_profile(
    State(state): State<AppState>,
    body: Result<Json<DeleteProfileRequest>, JsonRejection>,
) -> AppResult<Json<StatusResponse>> {
    let request = json_body(body)?;
    let user = required(request.user, "user")?;
    let profile = required(request.profile, "profile")?;

    with_store(&state, move |store| store.delete_profile(&user, &profile)).await?;

    Ok(Json(StatusResponse { status: "deleted" }))
}

async fn rename_profile(
    State(state): State<AppState>,
    body: Result<Json<RenameProfileRequest>, JsonRejection>,
) -> AppResult<Json<RenamedResponse>> {
    let request = json_body(body)?;
    let user = required(request.user, "user")?;
    let old_profile = required(request.old_profile, "old_profile")?;
    let new_profile = required(request.new_profile, "new_profile")?;

    let (from, to) = with_store(&state, move |store| {
        store.rename_profile(&user, &old_profile, &new_profile)
    })
    .await?;

    Ok(Json(RenamedResponse {
        status: "renamed",
        from,
        to,
    }))
}

async fn all_profiles(State(state): State<AppState>) -> AppResult<Json<ProfileDocument>> {
    let doc = with_store(&state, |store| store.list_all_profiles()).await?;
    Ok(Json(doc))
}

async fn list_profiles(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> AppResult<Json<ProfileNamesResponse>> {
    let query = query_params(query)?;
    let user = required(query.user, "user")?;

    let profiles = with_store(&state, move |store| store.list_profile_names(&user)).await?;
    Ok(Json(ProfileNamesResponse { profiles }))
}

async fn get_profile(
    State(state): State<AppState>,
    query: Result<Query<ProfileQuery>, QueryRejection>,
) -> AppResult<Json<MacrosResponse>> {
    let query = query_params(query)?;
    let user = required(query.user, "user")?;
    let profile = required(query.profile, "profile")?;

    let macros = with_store(&state, move |store| store.get_profile(&user, &profile)).await?;
    Ok(Json(MacrosResponse { macros }))
}

async fn trigger(
    State(state): State<AppState>,
    Path(macro_key): Path<String>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> AppResult<Json<TriggeredResponse>> {
    let query = query_params(query)?;
    let user = required(query.user, "user")?;

    state.relay.trigger(&macro_key, &user).await?;
    tracing::info!(macro_key = %macro_key, user = %user, "macro relayed");

    Ok(Json(TriggeredResponse {
        status: "success",
        macro_key,
    }))
}

async fn dashboard_status(State(state): State<AppState>) -> Json<BTreeMap<String, Value>> {
    Json(state.relay.dashboard().await)
}

/// Runs a store operation on the blocking pool; the store does file I/O
/// under a `std::sync::Mutex`.
async fn with_store<T, F>(state: &AppState, op: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&ProfileStore) -> AppResult<T> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|err| AppError::Storage(format!("profile store task failed: {err}")))?
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|Json(inner)| inner)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(inner)| inner)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("missing `{field}`")))
}
