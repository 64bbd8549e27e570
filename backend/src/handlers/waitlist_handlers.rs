use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::AppState;

#[derive(Deserialize)]
pub struct JoinWaitlistRequest {
    pub email: String,
}

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,
    #[error("Invalid email format")]
    Invalid(#[from] ValidationErrors),
    #[error("Email domain must contain a dot")]
    UndottedDomain,
}

/// A trimmed, lowercased email that passed `validator`'s address rules and
/// has a dotted domain.
#[derive(Debug, PartialEq, Eq, Validate)]
pub struct WaitlistEmail {
    #[validate(email(message = "Invalid email format"))]
    email: String,
}

impl WaitlistEmail {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let email = raw.trim().to_lowercase();
        if email.is_empty() {
            return Err(EmailError::Missing);
        }

        let candidate = Self { email };
        candidate.validate()?;

        // validator accepts single-label hosts like `localhost`
        let dotted = candidate
            .email
            .rsplit_once('@')
            .map_or(false, |(_, domain)| domain.contains('.'));
        if !dotted {
            return Err(EmailError::UndottedDomain);
        }

        Ok(candidate)
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

pub async fn join_waitlist(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JoinWaitlistRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let email = match WaitlistEmail::parse(&request.email) {
        Ok(email) => email,
        Err(e) => {
            tracing::info!("Rejected waitlist signup: {}", e);
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() }))
            ));
        }
    };

    match state.waitlist_repository.join(email.as_ref()) {
        Ok(joined) => {
            if joined.newly_added {
                tracing::info!("Added waitlist entry {:?}", joined.entry.id);
            } else {
                tracing::debug!("Email already on the waitlist since {}", joined.entry.created_at);
            }
            Ok(Json(json!({ "message": "Joined the waitlist" })))
        }
        Err(e) => {
            tracing::error!("Failed to store waitlist signup: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to join the waitlist" }))
            ))
        }
    }
}
