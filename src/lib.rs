// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mergington High School activity sign-up API.
//!
//! This crate provides the backend for the school's extracurricular
//! activity page: a JSON API for listing activities and signing students
//! up, plus the static front end served from the same process.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;

use config::Config;
use store::ActivityStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ActivityStore,
}
