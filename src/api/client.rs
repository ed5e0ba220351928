//! HTTP client for the directory backend.
//!
//! Thin accessor over `reqwest`: one method per backend operation, a single
//! request/response exchange each, no internal retries. The stored bearer
//! token is attached uniformly and transparently to every call; callers
//! never manage the header themselves.

use reqwest::RequestBuilder;

use crate::api::models::{LoginRequest, LoginResponse, UserFields, UserPage};
use crate::domain::error::{Result, RosterError};
use crate::session::SessionStore;

/// Client for the directory backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is a shared handle, and
/// the session store is a shared cell. Each spawned request task clones the
/// client rather than borrowing it across an await.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Creates a client against the given base URL.
    ///
    /// A trailing slash on the base URL is trimmed to prevent double slashes
    /// when paths are appended. The session store is the injected credential
    /// context read before every request.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    /// Attaches the bearer token to an outgoing request, if one is stored.
    ///
    /// When no token is present the request goes out without authorization
    /// metadata; the backend may then reject it, which surfaces as a normal
    /// failure to the caller.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Maps a non-success response to the uniform API failure class.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, body_len = body.len(), "request rejected");
        Err(RosterError::Api(format!("{status}: {body}")))
    }

    /// Authenticates with the backend and returns the issued token.
    ///
    /// The token is *not* persisted here; stashing it in the session store
    /// and on disk is the login flow's responsibility on receipt.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid credentials or network/server failure; no
    /// distinction is made between those classes at this layer.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let url = format!("{}/login", self.base_url);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.authorize(self.http.post(&url).json(&body)).send().await?;
        let parsed: LoginResponse = Self::check(response).await?.json().await?;
        Ok(parsed.token)
    }

    /// Fetches one 1-indexed page of user records.
    ///
    /// Out-of-range page numbers are passed through to the backend
    /// unmodified; whatever it returns (including an empty page) is surfaced
    /// as-is.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success response or transport failure.
    pub async fn list_users(&self, page: u32) -> Result<UserPage> {
        let url = format!("{}/users", self.base_url);
        let response = self
            .authorize(self.http.get(&url).query(&[("page", page)]))
            .send()
            .await?;
        let parsed: UserPage = Self::check(response).await?.json().await?;

        tracing::debug!(
            page = parsed.page,
            total_pages = parsed.total_pages,
            records = parsed.data.len(),
            "page fetched"
        );
        Ok(parsed)
    }

    /// Updates a user record and returns the fields echoed by the backend.
    ///
    /// Supplied fields overwrite the corresponding backend fields; omitted
    /// fields are left to backend semantics.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success response or transport failure.
    pub async fn update_user(&self, id: u64, fields: &UserFields) -> Result<UserFields> {
        let url = format!("{}/users/{id}", self.base_url);
        let response = self
            .authorize(self.http.put(&url).json(fields))
            .send()
            .await?;
        let echoed: UserFields = Self::check(response).await?.json().await?;

        tracing::debug!(user_id = id, "user updated");
        Ok(echoed)
    }

    /// Deletes a user record. No payload on success.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success response or transport failure.
    pub async fn delete_user(&self, id: u64) -> Result<()> {
        let url = format!("{}/users/{id}", self.base_url);
        let response = self.authorize(self.http.delete(&url)).send().await?;
        Self::check(response).await?;

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::ApiClient;
    use crate::api::models::UserFields;
    use crate::session::SessionStore;

    fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
        let session = SessionStore::new(token.map(str::to_string));
        ApiClient::new(server.uri(), session)
    }

    #[tokio::test]
    async fn login_posts_credentials_and_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({
                "email": "eve.holt@reqres.in",
                "password": "cityslicka",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "QpwL5tke4Pnpja7X4",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = client(&server, None)
            .login("eve.holt@reqres.in", "cityslicka")
            .await
            .expect("login");
        assert_eq!(token, "QpwL5tke4Pnpja7X4");
    }

    #[tokio::test]
    async fn login_failure_is_one_uniform_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "user not found"})),
            )
            .mount(&server)
            .await;

        let result = client(&server, None).login("bad", "creds").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn list_attaches_bearer_token_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "1"))
            .and(header("Authorization", "Bearer QpwL5tke4Pnpja7X4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "total_pages": 2,
                "data": [
                    {"id": 1, "email": "george.bluth@reqres.in",
                     "first_name": "George", "last_name": "Bluth",
                     "avatar": "https://reqres.in/img/faces/1-image.jpg"},
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client(&server, Some("QpwL5tke4Pnpja7X4"))
            .list_users(1)
            .await
            .expect("list");
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].first_name, "George");
    }

    #[tokio::test]
    async fn calls_without_token_carry_no_authorization_header() {
        let server = MockServer::start().await;
        // The mock only matches requests *lacking* the header via a bare
        // path match plus an assertion on the received request below.
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 7,
                "total_pages": 2,
                "data": [],
            })))
            .mount(&server)
            .await;

        let page = client(&server, None).list_users(7).await.expect("list");
        assert!(page.data.is_empty());

        let requests = server.received_requests().await.expect("requests");
        assert!(requests
            .iter()
            .all(|r| !r.headers.contains_key("authorization")));
    }

    #[tokio::test]
    async fn update_sends_fields_and_returns_echo() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/3"))
            .and(body_json(json!({"last_name": "Smith"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"last_name": "Smith"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let fields = UserFields {
            last_name: Some("Smith".to_string()),
            ..UserFields::default()
        };
        let echoed = client(&server, Some("tok"))
            .update_user(3, &fields)
            .await
            .expect("update");
        assert_eq!(echoed.last_name.as_deref(), Some("Smith"));
        assert_eq!(echoed.first_name, None);
    }

    #[tokio::test]
    async fn delete_succeeds_on_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server, Some("tok"))
            .delete_user(5)
            .await
            .expect("delete");
    }

    #[tokio::test]
    async fn server_errors_surface_as_failures() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/5"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client(&server, Some("tok")).delete_user(5).await.is_err());
    }
}
