// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store.
//!
//! The store is the sole state of the service: a concurrent map from
//! activity name to roster, seeded once at startup. Activities are never
//! created or deleted through the API; only `participants` is mutated.

use crate::error::AppError;
use crate::models::Activity;
use dashmap::DashMap;
use std::collections::HashMap;

/// Authoritative map from activity name to activity record.
pub struct ActivityStore {
    activities: DashMap<String, Activity>,
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    /// Create a store seeded with the school's fixed activity roster.
    pub fn seeded() -> Self {
        let store = Self::new();

        store.activities.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        );
        store.activities.insert(
            "Programming Class".to_string(),
            Activity {
                description: "Learn programming fundamentals and build software projects"
                    .to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            },
        );
        store.activities.insert(
            "Gym Class".to_string(),
            Activity {
                description: "Physical education and sports activities".to_string(),
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                max_participants: 30,
                participants: vec![
                    "john@mergington.edu".to_string(),
                    "olivia@mergington.edu".to_string(),
                ],
            },
        );

        store
    }

    /// Number of activities in the store.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of all activities, keyed by name.
    pub fn all(&self) -> HashMap<String, Activity> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Register `email` for the named activity.
    ///
    /// The duplicate check and the append happen while holding the entry's
    /// shard lock, so concurrent signups for the same activity cannot slip
    /// a duplicate through.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), AppError> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(AppError::AlreadyRegistered(email.to_string()));
        }

        activity.participants.push(email.to_string());
        Ok(())
    }
}
