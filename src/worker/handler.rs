//! Request worker: one spawned task per backend call.
//!
//! The worker owns a clone of the remote client and the sending half of the
//! outcome channel. Submitting a request never blocks the event loop;
//! suspension happens only inside the spawned task, at the network
//! boundary. There is no cancellation and no timeout: a hung call simply
//! never reports.

use tokio::sync::mpsc::UnboundedSender;

use crate::api::ApiClient;
use crate::worker::messages::{ApiOutcome, ApiRequest};

/// Generic display messages, one per operation. Failure detail goes to the
/// log; users see a uniform message regardless of cause.
const LOGIN_FAILED: &str = "Login failed";
const FETCH_FAILED: &str = "Failed to fetch users";
const UPDATE_FAILED: &str = "Failed to update user";
const DELETE_FAILED: &str = "Failed to delete user";

/// Executes [`ApiRequest`]s as independent tasks and reports outcomes.
///
/// Requests are independent and unordered with respect to each other; no
/// mutual exclusion is applied across them. The listing controller handles
/// out-of-order page responses itself via the fetch sequence.
#[derive(Debug, Clone)]
pub struct ApiWorker {
    client: ApiClient,
    outcomes: UnboundedSender<ApiOutcome>,
}

impl ApiWorker {
    /// Creates a worker sending outcomes on the given channel.
    #[must_use]
    pub fn new(client: ApiClient, outcomes: UnboundedSender<ApiOutcome>) -> Self {
        Self { client, outcomes }
    }

    /// Spawns a task for one request. Returns immediately.
    ///
    /// A send failure means the event loop has already shut down; the
    /// outcome is dropped, which is fine because nobody is left to apply it.
    pub fn submit(&self, request: ApiRequest) {
        tracing::debug!(request = request_name(&request), "submitting request");

        let client = self.client.clone();
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let outcome = execute(&client, request).await;
            let _ = outcomes.send(outcome);
        });
    }
}

/// Short name of a request for logging.
fn request_name(request: &ApiRequest) -> &'static str {
    match request {
        ApiRequest::Login { .. } => "login",
        ApiRequest::FetchPage { .. } => "fetch_page",
        ApiRequest::UpdateUser { .. } => "update_user",
        ApiRequest::DeleteUser { .. } => "delete_user",
    }
}

/// Runs one request to completion and maps both arms onto an outcome.
async fn execute(client: &ApiClient, request: ApiRequest) -> ApiOutcome {
    match request {
        ApiRequest::Login { email, password } => {
            match client.login(&email, &password).await {
                Ok(token) => ApiOutcome::LoginSucceeded { token },
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    ApiOutcome::LoginFailed {
                        message: LOGIN_FAILED.to_string(),
                    }
                }
            }
        }
        ApiRequest::FetchPage { page, seq } => match client.list_users(page).await {
            Ok(loaded) => ApiOutcome::PageLoaded {
                seq,
                page: loaded.page,
                total_pages: loaded.total_pages,
                users: loaded.data,
            },
            Err(e) => {
                tracing::warn!(page, error = %e, "page fetch failed");
                ApiOutcome::PageFailed {
                    seq,
                    message: FETCH_FAILED.to_string(),
                }
            }
        },
        ApiRequest::UpdateUser { id, fields } => {
            match client.update_user(id, &fields).await {
                Ok(echoed) => ApiOutcome::UserUpdated { id, fields: echoed },
                Err(e) => {
                    tracing::warn!(user_id = id, error = %e, "update failed");
                    ApiOutcome::UpdateFailed {
                        id,
                        message: UPDATE_FAILED.to_string(),
                    }
                }
            }
        }
        ApiRequest::DeleteUser { id } => match client.delete_user(id).await {
            Ok(()) => ApiOutcome::UserDeleted { id },
            Err(e) => {
                tracing::warn!(user_id = id, error = %e, "delete failed");
                ApiOutcome::DeleteFailed {
                    id,
                    message: DELETE_FAILED.to_string(),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::ApiWorker;
    use crate::api::ApiClient;
    use crate::session::SessionStore;
    use crate::worker::messages::{ApiOutcome, ApiRequest};

    #[tokio::test]
    async fn fetch_outcome_echoes_the_request_sequence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 2,
                "total_pages": 2,
                "data": [],
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), SessionStore::new(Some("tok".to_string())));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let worker = ApiWorker::new(client, tx);

        worker.submit(ApiRequest::FetchPage { page: 2, seq: 41 });

        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(
            outcome,
            ApiOutcome::PageLoaded {
                seq: 41,
                page: 2,
                total_pages: 2,
                users: vec![],
            }
        );
    }

    #[tokio::test]
    async fn failures_carry_generic_messages() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/9"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), SessionStore::default());
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let worker = ApiWorker::new(client, tx);

        worker.submit(ApiRequest::DeleteUser { id: 9 });

        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(
            outcome,
            ApiOutcome::DeleteFailed {
                id: 9,
                message: "Failed to delete user".to_string(),
            }
        );
    }
}
