// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing and signup routes.

use crate::error::Result;
use crate::models::Activity;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
}

/// Get the full activity roster as a JSON object keyed by activity name.
async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<HashMap<String, Activity>> {
    Json(state.store.all())
}

#[derive(Deserialize)]
struct SignupQuery {
    /// Student email to register
    email: String,
}

/// Confirmation returned on a successful signup.
#[derive(Serialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Sign a student up for an activity.
///
/// `{name}` arrives percent-decoded from the router, so activity names
/// with spaces work. Returns 404 for an unknown activity and 400 if the
/// email is already on the roster.
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<SignupQuery>,
) -> Result<Json<SignupResponse>> {
    state.store.signup(&name, &params.email)?;

    tracing::info!(activity = %name, email = %params.email, "Signup recorded");

    Ok(Json(SignupResponse {
        message: format!("Signed up {} for {}", params.email, name),
    }))
}
