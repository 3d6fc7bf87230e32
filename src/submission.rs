//! Favorites side channel.
//!
//! When the respondent writes down favorite prompts, the text is posted
//! together with their name and email to an external form-submission
//! endpoint. The post runs on a detached thread; its outcome is only logged
//! and never affects the recommendation.

use crate::engine::SurveyAnswers;
use serde::Serialize;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Form payload sent to the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoritesSubmission {
    pub name: String,
    pub email: String,
    pub favorites: String,
}

impl FavoritesSubmission {
    /// Build a submission, or `None` when there are no favorites to send.
    pub fn from_answers(answers: &SurveyAnswers) -> Option<Self> {
        answers.favorites_text().map(|favorites| Self {
            name: answers.name.clone(),
            email: answers.email.clone(),
            favorites: favorites.to_string(),
        })
    }
}

/// Destination for favorites submissions.
pub trait FavoritesSink: Send + Sync {
    /// Start delivering the submission. Must not block on the network.
    fn submit(&self, submission: FavoritesSubmission) -> Option<JoinHandle<()>>;
}

/// Posts submissions as an HTML form to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct FormEndpoint {
    url: String,
    timeout: Duration,
}

impl FormEndpoint {
    /// Upper bound on one post, connect included
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl FavoritesSink for FormEndpoint {
    fn submit(&self, submission: FavoritesSubmission) -> Option<JoinHandle<()>> {
        let url = self.url.clone();
        let timeout = self.timeout;
        let spawned = thread::Builder::new()
            .name("favorites-submit".to_string())
            .spawn(move || {
                debug!("Posting favorites to {}", url);
                let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
                    Ok(client) => client,
                    Err(e) => {
                        warn!("Could not build HTTP client for favorites: {}", e);
                        return;
                    }
                };
                let result = client
                    .post(&url)
                    .form(&submission)
                    .send();
                match result {
                    Ok(response) => info!("Favorites submitted ({})", response.status()),
                    Err(e) => warn!("Favorites submission to {} failed: {}", url, e),
                }
            });

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("Could not start favorites submission: {}", e);
                None
            }
        }
    }
}

/// Send the respondent's favorites, if any, through the sink.
///
/// Returns the delivery handle so short-lived callers can wait for it;
/// interactive callers drop it.
pub fn submit_favorites(
    answers: &SurveyAnswers,
    sink: Option<&dyn FavoritesSink>,
) -> Option<JoinHandle<()>> {
    let submission = FavoritesSubmission::from_answers(answers)?;
    match sink {
        Some(sink) => sink.submit(submission),
        None => {
            debug!("No submission endpoint configured; favorites kept local");
            None
        }
    }
}
