//! What the page does for each user action, independent of how it is drawn.
//!
//! Every failure ends up as text for the message banner; nothing here returns an error.

use super::ActivitiesApi;
use crate::model::types::*;
use leptos::logging::error;

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_REJECTED: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_REJECTED: &str = "Failed to remove participant";
pub const REMOVAL_FAILED: &str = "Failed to remove participant. Try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Activities),
    Failed,
}

impl LoadState {
    pub fn activities(&self) -> Option<&Activities> {
        match self {
            LoadState::Loaded(activities) => Some(activities),
            _ => None,
        }
    }
}

/// What the page shows: the latest load for the card list, and the last
/// activity set that did load for the dropdown. A failed load only replaces the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    state: LoadState,
    last_loaded: Activities,
}

impl Board {
    pub fn apply(&mut self, state: LoadState) {
        if let LoadState::Loaded(activities) = &state {
            self.last_loaded = activities.clone();
        }
        self.state = state;
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn select_options(&self) -> Vec<SelectOption> {
        self.last_loaded.select_options()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub notice: Notice,
    pub auto_hide: bool,
    pub reset_form: bool,
    /// whether the activity set should be fetched again, without holding up the notice
    pub refresh: bool,
}

impl SignupOutcome {
    /// The request never got an answer the page could read.
    pub fn failed() -> Self {
        Self {
            notice: Notice::Error(SIGNUP_FAILED.to_string()),
            auto_hide: false,
            reset_form: false,
            refresh: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// the page should reload
    Removed,
    Failed(String),
}

impl RemovalOutcome {
    pub fn failed() -> Self {
        RemovalOutcome::Failed(REMOVAL_FAILED.to_string())
    }
}

pub async fn load_activities<A: ActivitiesApi>(api: &A) -> LoadState {
    match api.list().await {
        Ok(activities) => LoadState::Loaded(activities),
        Err(e) => {
            error!("Error fetching activities: {}", e);
            LoadState::Failed
        }
    }
}

pub async fn submit_signup<A: ActivitiesApi>(
    api: &A,
    activity: &str,
    email: &str,
) -> SignupOutcome {
    match api.sign_up(activity, email).await {
        Ok(message) => SignupOutcome {
            notice: Notice::Success(message),
            auto_hide: true,
            reset_form: true,
            refresh: true,
        },
        Err(Error::Status { detail, .. }) => SignupOutcome {
            notice: Notice::Error(detail.unwrap_or_else(|| SIGNUP_REJECTED.to_string())),
            auto_hide: true,
            reset_form: false,
            refresh: false,
        },
        Err(e) => {
            error!("Error signing up: {}", e);
            SignupOutcome::failed()
        }
    }
}

pub async fn remove_participant<A: ActivitiesApi>(
    api: &A,
    activity: &str,
    email: &str,
) -> RemovalOutcome {
    match api.remove(activity, email).await {
        Ok(()) => RemovalOutcome::Removed,
        Err(Error::Status { detail, .. }) => {
            RemovalOutcome::Failed(detail.unwrap_or_else(|| REMOVAL_REJECTED.to_string()))
        }
        Err(e) => {
            error!("Error removing participant: {}", e);
            RemovalOutcome::failed()
        }
    }
}
