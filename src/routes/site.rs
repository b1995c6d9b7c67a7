// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Front-end routes: root redirect and static assets.

use crate::config::Config;
use crate::AppState;
use axum::{response::Redirect, routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

pub fn routes(config: &Config) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root_redirect))
        .nest_service("/static", ServeDir::new(&config.static_dir))
}

/// Send visitors to the front-end entry point.
async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}
