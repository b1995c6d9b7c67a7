// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity roster model.

use serde::{Deserialize, Serialize};

/// A named extracurricular offering.
///
/// The activity name is the store key, so it does not appear in the record
/// itself; `GET /activities` returns these records keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    pub description: String,
    /// Free-text meeting schedule
    pub schedule: String,
    /// Capacity; descriptive only, signups are not capped against it
    pub max_participants: u32,
    /// Signed-up student emails, in signup order
    pub participants: Vec<String>,
}
