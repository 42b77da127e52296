//! Environment-aware URL routing.
//!
//! Each operation category resolves to one of two hard-coded base hosts
//! depending on the configured environment. Resolution is a pure function
//! of (category, environment, path) and is invoked before every request.

/// Deployment environment the client talks to. Immutable after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
}

/// Logical endpoint category, selecting the backend host for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EndpointCategory {
    /// Login and PDF retrieval.
    Main,
    /// 1098 form validation and import.
    Form1098,
    /// Batch submission with payment.
    Payment,
}

impl EndpointCategory {
    pub(crate) fn base_url(self, env: Environment) -> &'static str {
        match (self, env) {
            (Self::Main, Environment::Staging) => "https://tax1099api.1099cloud.com/api/v1",
            (Self::Main, Environment::Production) => "https://app.tax1099.com/api/v1",
            (Self::Form1098, Environment::Staging) => "https://apiforms.1099cloud.com/api/v1",
            (Self::Form1098, Environment::Production) => "https://form1098.tax1099.com/api/v1",
            (Self::Payment, Environment::Staging) => "https://apipayment.1099cloud.com/api/v1",
            (Self::Payment, Environment::Production) => "https://apipayment.tax1099.com/api/v1",
        }
    }
}

/// Resolves (category, path) pairs to fully qualified URLs for one
/// environment.
#[derive(Debug, Clone)]
pub(crate) struct Router {
    env: Environment,
    base_override: Option<String>,
}

impl Router {
    pub(crate) fn new(env: Environment) -> Self {
        Self { env, base_override: None }
    }

    /// Route every category to a single base URL (mock server) instead of
    /// the real hosts.
    #[cfg(test)]
    pub(crate) fn with_override(env: Environment, base: String) -> Self {
        Self { env, base_override: Some(base) }
    }

    pub(crate) fn url(&self, category: EndpointCategory, path: &str) -> String {
        let base =
            self.base_override.as_deref().unwrap_or_else(|| category.base_url(self.env));
        format!("{base}/{path}")
    }
}
