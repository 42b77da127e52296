//! Tax1099 API client: session management, request dispatch, and the
//! public operation façade.
//!
//! Every authenticated dispatch checks token freshness first and re-runs
//! the login exchange when the lease has elapsed; a refresh failure aborts
//! the outer call as [`Tax1099Error::Reauthorize`]. The login dispatch is
//! explicitly auth-exempt, which breaks the recursion.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tax1099_domain::constants::DEFAULT_TIMEOUT_SECS;
use tax1099_domain::{
    DownloadFormRequest, LoginRequest, LoginResponse, Result, Submit1098BatchRequest,
    Submit1098BatchResponse, Submit1098Request, Submit1098Response, Tax1099Error,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::endpoints::{EndpointCategory, Environment, Router};
use crate::http::HttpClient;
use crate::session::{Credentials, Session};

const ACCEPT_JSON: &str = "application/json";
const ACCEPT_PDF: &str = "application/pdf";
const USER_AGENT: &str = concat!("tax1099-client/", env!("CARGO_PKG_VERSION"));

/// Operations exposed by the Tax1099 API.
///
/// Implemented by [`Tax1099Client`]; a seam for callers that want to mock
/// the service in their own tests.
#[async_trait]
pub trait Tax1099Api: Send + Sync {
    /// Exchange the stored credentials for a fresh session token.
    async fn authorize(&self) -> Result<()>;

    /// Validate a batch of 1098 forms without filing them. Business-rule
    /// violations come back in `validation_errors`, not as an `Err`.
    async fn validate_1098(&self, payload: &Submit1098Request) -> Result<Submit1098Response>;

    /// Import a batch of 1098 forms.
    async fn import_1098(&self, payload: &Submit1098Request) -> Result<Submit1098Response>;

    /// Submit an imported 1098 batch for filing, with scheduling and
    /// payment.
    async fn submit_1098_batch(
        &self,
        payload: &Submit1098BatchRequest,
    ) -> Result<Submit1098BatchResponse>;

    /// Download a filled form PDF. Validates the addressing mode locally
    /// before any network call.
    async fn download_filled_form(&self, payload: &DownloadFormRequest) -> Result<Vec<u8>>;
}

/// Whether a dispatch requires a fresh session token before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthScope {
    Required,
    /// The login call itself; exempt from the freshness check.
    Exempt,
}

/// Client for the Tax1099 e-filing API.
///
/// Holds the session token behind a lock; concurrent calls racing a
/// near-expiry token may each trigger a redundant re-authorization, which
/// is wasteful but idempotent.
pub struct Tax1099Client {
    router: Router,
    http: HttpClient,
    credentials: Credentials,
    session: RwLock<Session>,
}

impl Tax1099Client {
    /// Connect to the given environment and perform the initial login.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built or the initial login is
    /// rejected ([`Tax1099Error::BadLogin`] for bad credentials).
    pub async fn connect(env: Environment, credentials: Credentials) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        let client = Self {
            router: Router::new(env),
            http,
            credentials,
            session: RwLock::new(Session::empty()),
        };
        client.login().await?;
        Ok(client)
    }

    /// Run the login exchange and store the issued session token.
    async fn login(&self) -> Result<()> {
        info!("authorizing against the Tax1099 API");

        let request = LoginRequest {
            login: self.credentials.username.clone(),
            password: self.credentials.password.clone(),
            app_key: self.credentials.app_key.clone(),
        };

        let response: LoginResponse = self
            .post_json(EndpointCategory::Main, "login", &request, AuthScope::Exempt)
            .await?;

        let token = match response.session_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(Tax1099Error::BadLogin),
        };

        *self.session.write().await = Session::issued(token, Utc::now());
        info!("authorization complete");
        Ok(())
    }

    /// Re-authorize with the stored credentials if the lease has elapsed.
    async fn ensure_fresh_token(&self) -> Result<()> {
        let expired = self.session.read().await.is_expired(Utc::now());
        if expired {
            warn!("session token expired, re-authorizing");
            // Boxed to break the async type cycle login -> dispatch -> here.
            Box::pin(self.login())
                .await
                .map_err(|err| Tax1099Error::Reauthorize(Box::new(err)))?;
        }
        Ok(())
    }

    async fn post_json<B, T>(
        &self,
        category: EndpointCategory,
        path: &str,
        payload: &B,
        scope: AuthScope,
    ) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let (url, body) = self.dispatch(category, path, payload, scope, ACCEPT_JSON).await?;
        serde_json::from_slice(&body).map_err(|err| Tax1099Error::Decode(format!("{url}: {err}")))
    }

    async fn post_for_bytes<B>(
        &self,
        category: EndpointCategory,
        path: &str,
        payload: &B,
        scope: AuthScope,
    ) -> Result<Vec<u8>>
    where
        B: Serialize + Sync,
    {
        let (_url, body) = self.dispatch(category, path, payload, scope, ACCEPT_PDF).await?;
        Ok(body)
    }

    /// Shared pre-flight and send path for the JSON and binary call shapes.
    async fn dispatch<B>(
        &self,
        category: EndpointCategory,
        path: &str,
        payload: &B,
        scope: AuthScope,
        accept: &'static str,
    ) -> Result<(String, Vec<u8>)>
    where
        B: Serialize + Sync,
    {
        if scope == AuthScope::Required {
            self.ensure_fresh_token().await?;
        }

        let url = self.router.url(category, path);
        let body = serde_json::to_vec(payload)
            .map_err(|err| Tax1099Error::Serialize(err.to_string()))?;

        debug!(%url, "Tax1099 POST");

        let mut request = self.http.request(Method::POST, &url).header(ACCEPT, accept);
        if !body.is_empty() {
            request = request.header(CONTENT_TYPE, ACCEPT_JSON);
        }
        let token = self.session.read().await.token().to_string();
        if !token.is_empty() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = self.http.send(request.body(body)).await?;
        let status = response.status();
        let data = response.bytes().await.map_err(|err| {
            Tax1099Error::Network(format!("failed to read response body: {err}"))
        })?;

        if status != StatusCode::OK {
            return Err(Tax1099Error::UnexpectedStatus {
                status: status.as_u16(),
                url,
                body: String::from_utf8_lossy(&data).into_owned(),
            });
        }

        Ok((url, data.to_vec()))
    }

    /// Local shape validation for PDF downloads; runs before any network
    /// call. Exactly one addressing mode must be used: `form_id` alone, or
    /// the pair (`payer_tin`, `tax_year`).
    fn validate_download_request(payload: &DownloadFormRequest) -> Result<()> {
        if payload.form_id == Some(0) {
            // The API uses 0 as the "unset" sentinel; it never names a form.
            return Err(Tax1099Error::InvalidRequest(
                "formId must be greater than zero".to_string(),
            ));
        }
        if payload.form_id.is_some() {
            if payload.payer_tin.is_some() || payload.tax_year.is_some() {
                return Err(Tax1099Error::InvalidRequest(
                    "formId cannot be combined with payerTin or taxYear".to_string(),
                ));
            }
        } else if payload.payer_tin.is_none() || payload.tax_year.is_none() {
            return Err(Tax1099Error::InvalidRequest(
                "formId or payerTin with taxYear must be provided".to_string(),
            ));
        }

        if payload.form_type.is_empty() {
            return Err(Tax1099Error::InvalidRequest("formType is required".to_string()));
        }

        Ok(())
    }

    /// Client wired to a mock server instead of the real hosts; performs
    /// no initial login.
    #[cfg(test)]
    fn for_tests(base_url: String, credentials: Credentials) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("http client");
        Self {
            router: Router::with_override(Environment::Staging, base_url),
            http,
            credentials,
            session: RwLock::new(Session::empty()),
        }
    }

    #[cfg(test)]
    async fn force_expire_session(&self) {
        self.session.write().await.expire_now();
    }

    #[cfg(test)]
    async fn session_token(&self) -> String {
        self.session.read().await.token().to_string()
    }
}

#[async_trait]
impl Tax1099Api for Tax1099Client {
    async fn authorize(&self) -> Result<()> {
        self.login().await
    }

    async fn validate_1098(&self, payload: &Submit1098Request) -> Result<Submit1098Response> {
        info!(tax_year = %payload.tax_year, "validating 1098 forms");
        self.post_json(
            EndpointCategory::Form1098,
            "form/1098/validate",
            payload,
            AuthScope::Required,
        )
        .await
    }

    async fn import_1098(&self, payload: &Submit1098Request) -> Result<Submit1098Response> {
        info!(tax_year = %payload.tax_year, "importing 1098 forms");
        self.post_json(EndpointCategory::Form1098, "form/1098/import", payload, AuthScope::Required)
            .await
    }

    async fn submit_1098_batch(
        &self,
        payload: &Submit1098BatchRequest,
    ) -> Result<Submit1098BatchResponse> {
        info!(tax_year = %payload.tax_year, "submitting 1098 batch");
        self.post_json(
            EndpointCategory::Payment,
            "payment/forms/import/submit/1098",
            payload,
            AuthScope::Required,
        )
        .await
    }

    async fn download_filled_form(&self, payload: &DownloadFormRequest) -> Result<Vec<u8>> {
        Self::validate_download_request(payload)?;

        info!(form_type = %payload.form_type, "downloading filled form PDF");
        self.post_for_bytes(EndpointCategory::Main, "pdf/forms/getpdfs", payload, AuthScope::Required)
            .await
    }
}

#[cfg(test)]
mod tests {
    use tax1099_domain::FormStatus;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("user@example.com", "hunter2", "app-key-1")
    }

    fn test_client(server: &MockServer) -> Tax1099Client {
        Tax1099Client::for_tests(format!("{}/api/v1", server.uri()), test_credentials())
    }

    fn empty_1098_request() -> Submit1098Request {
        Submit1098Request { tax_year: "2024".to_string(), items: vec![] }
    }

    async fn mount_login(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/api/v1/login"))
            .and(body_partial_json(serde_json::json!({
                "login": "user@example.com",
                "password": "hunter2",
                "appKey": "app-key-1",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "sessionId": "sess-token" })),
            )
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn authorize_stores_the_issued_session_token() {
        let server = MockServer::start().await;
        mount_login(&server, 1).await;

        let client = test_client(&server);
        client.authorize().await.unwrap();

        assert_eq!(client.session_token().await, "sess-token");
    }

    #[tokio::test]
    async fn authorize_without_session_id_is_a_bad_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "validationMessages": ["invalid credentials"]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.authorize().await.unwrap_err();

        assert!(matches!(err, Tax1099Error::BadLogin));
        assert!(client.session_token().await.is_empty());
    }

    #[tokio::test]
    async fn authorize_surfaces_status_errors_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/login"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.authorize().await.unwrap_err();

        match err {
            Tax1099Error::UnexpectedStatus { status, url, body } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/api/v1/login"));
                assert_eq!(body, "maintenance window");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fresh_token_does_not_trigger_reauthorization() {
        let server = MockServer::start().await;
        mount_login(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/form/1098/validate"))
            .and(header("Authorization", "Bearer sess-token"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "totalCount": 0, "isError": false })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.authorize().await.unwrap();

        let response = client.validate_1098(&empty_1098_request()).await.unwrap();
        assert!(!response.is_error);

        let login_calls = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.url.path() == "/api/v1/login")
            .count();
        assert_eq!(login_calls, 1);
    }

    #[tokio::test]
    async fn expired_token_triggers_exactly_one_reauthorization() {
        let server = MockServer::start().await;
        mount_login(&server, 2).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/form/1098/validate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "totalCount": 0 })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.authorize().await.unwrap();
        client.force_expire_session().await;

        client.validate_1098(&empty_1098_request()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let login_calls = requests.iter().filter(|r| r.url.path() == "/api/v1/login").count();
        assert_eq!(login_calls, 2);
    }

    #[tokio::test]
    async fn reauthorization_failure_is_wrapped_and_aborts_the_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("login backend down"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/form/1098/validate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&server)
            .await;

        // Never authorized, so the session starts out expired.
        let client = test_client(&server);
        let err = client.validate_1098(&empty_1098_request()).await.unwrap_err();

        assert!(matches!(err, Tax1099Error::Reauthorize(_)));
        let msg = err.to_string();
        assert!(msg.contains("failed to re-authorize"));
    }

    #[tokio::test]
    async fn import_hits_the_import_path() {
        let server = MockServer::start().await;
        mount_login(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/form/1098/import"))
            .and(body_partial_json(serde_json::json!({ "taxYear": "2024" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": [{ "id": 9, "isInserted": true }],
                "totalCount": 1,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.authorize().await.unwrap();

        let response = client.import_1098(&empty_1098_request()).await.unwrap();
        assert_eq!(response.total_count, 1);
        assert_eq!(response.result[0].id, 9);
    }

    #[tokio::test]
    async fn batch_submit_hits_the_payment_path() {
        let server = MockServer::start().await;
        mount_login(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/payment/forms/import/submit/1098"))
            .and(body_partial_json(serde_json::json!({
                "taxYear": "2024",
                "formName": "1098",
                "cardReferenceId": "CARD-1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "traceIdentifier": "trace-1",
                "referenceIds": [10, 11],
                "totalCount": 2,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.authorize().await.unwrap();

        let payload = Submit1098BatchRequest {
            tax_year: "2024".to_string(),
            form_name: "1098".to_string(),
            scheduled_date: Utc::now(),
            is_corrected: false,
            coupon_code: String::new(),
            card_reference_id: "CARD-1".to_string(),
            items: vec![],
        };
        let response = client.submit_1098_batch(&payload).await.unwrap();

        assert_eq!(response.trace_identifier, "trace-1");
        assert_eq!(response.reference_ids, vec![10, 11]);
    }

    #[tokio::test]
    async fn download_returns_the_exact_bytes_served() {
        let server = MockServer::start().await;
        mount_login(&server, 1).await;
        let pdf_bytes: &[u8] = b"%PDF-1.4 mock pdf content";
        Mock::given(method("POST"))
            .and(path("/api/v1/pdf/forms/getpdfs"))
            .and(header("Accept", "application/pdf"))
            .and(header("Authorization", "Bearer sess-token"))
            .and(body_partial_json(serde_json::json!({
                "formId": 123,
                "formType": "1099-MISC",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf_bytes))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.authorize().await.unwrap();

        let payload = DownloadFormRequest {
            form_id: Some(123),
            form_type: "1099-MISC".to_string(),
            status: Some(FormStatus::Submitted),
            ..Default::default()
        };
        let data = client.download_filled_form(&payload).await.unwrap();

        assert_eq!(data, pdf_bytes);
    }

    #[tokio::test]
    async fn download_validation_failures_never_reach_the_network() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let cases = [
            (
                DownloadFormRequest {
                    form_id: Some(0),
                    form_type: "1099-MISC".to_string(),
                    ..Default::default()
                },
                "formId must be greater than zero",
            ),
            (
                DownloadFormRequest {
                    form_id: Some(123),
                    payer_tin: Some("123456789".to_string()),
                    form_type: "1099-MISC".to_string(),
                    ..Default::default()
                },
                "formId cannot be combined with payerTin or taxYear",
            ),
            (
                DownloadFormRequest {
                    form_id: Some(123),
                    tax_year: Some("2024".to_string()),
                    form_type: "1099-MISC".to_string(),
                    ..Default::default()
                },
                "formId cannot be combined with payerTin or taxYear",
            ),
            (
                DownloadFormRequest {
                    form_id: Some(123),
                    payer_tin: Some("123456789".to_string()),
                    tax_year: Some("2024".to_string()),
                    form_type: "1099-MISC".to_string(),
                    ..Default::default()
                },
                "formId cannot be combined with payerTin or taxYear",
            ),
            (
                DownloadFormRequest {
                    tax_year: Some("2024".to_string()),
                    form_type: "1099-MISC".to_string(),
                    ..Default::default()
                },
                "formId or payerTin with taxYear must be provided",
            ),
            (
                DownloadFormRequest {
                    payer_tin: Some("123456789".to_string()),
                    form_type: "1099-MISC".to_string(),
                    ..Default::default()
                },
                "formId or payerTin with taxYear must be provided",
            ),
            (
                DownloadFormRequest {
                    form_type: "1099-MISC".to_string(),
                    ..Default::default()
                },
                "formId or payerTin with taxYear must be provided",
            ),
            (
                DownloadFormRequest { form_id: Some(123), ..Default::default() },
                "formType is required",
            ),
            (
                DownloadFormRequest {
                    payer_tin: Some("123456789".to_string()),
                    tax_year: Some("2024".to_string()),
                    ..Default::default()
                },
                "formType is required",
            ),
        ];

        for (payload, expected) in cases {
            let err = client.download_filled_form(&payload).await.unwrap_err();
            match err {
                Tax1099Error::InvalidRequest(msg) => assert_eq!(msg, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_200_business_response_carries_status_url_and_body() {
        let server = MockServer::start().await;
        mount_login(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/form/1098/validate"))
            .respond_with(ResponseTemplate::new(400).set_body_string("malformed batch"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.authorize().await.unwrap();

        let err = client.validate_1098(&empty_1098_request()).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("malformed batch"));
        assert!(msg.contains("/api/v1/form/1098/validate"));
    }

    #[tokio::test]
    async fn malformed_response_body_is_a_decode_error() {
        let server = MockServer::start().await;
        mount_login(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/form/1098/validate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.authorize().await.unwrap();

        let err = client.validate_1098(&empty_1098_request()).await.unwrap_err();
        assert!(matches!(err, Tax1099Error::Decode(_)));
    }
}
