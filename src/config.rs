use reqwest::Url;

use crate::error::ClientError;

const DEFAULT_GRAPHQL_URL: &str = "/query";
const DEFAULT_GRAPHIQL_URL: &str = "http://localhost:8080/graphiql";

/// Endpoints and feature switches fixed at build time.
///
/// `CHOREQUEST_GRAPHQL_URL`, `CHOREQUEST_AUTH_URL` and `CHOREQUEST_GRAPHIQL_URL`
/// are read by the compiler, so changing them requires a rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GraphQL endpoint, absolute or relative to the page origin
    pub graphql_url: String,
    /// Base URL that serves `/auth/dev`; `None` means the page origin
    pub auth_base_url: Option<String>,
    /// GraphiQL explorer link shown in the header of dev builds
    pub graphiql_url: String,
    /// Show developer links (GraphiQL)
    pub dev_tools: bool,
}

impl AppConfig {
    /// Configuration baked in from the build environment.
    pub fn from_build_env() -> Self {
        Self {
            graphql_url: option_env!("CHOREQUEST_GRAPHQL_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_GRAPHQL_URL)
                .to_string(),
            auth_base_url: option_env!("CHOREQUEST_AUTH_URL")
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            graphiql_url: option_env!("CHOREQUEST_GRAPHIQL_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_GRAPHIQL_URL)
                .to_string(),
            dev_tools: cfg!(debug_assertions),
        }
    }

    /// Resolve relative endpoints against the page origin.
    pub fn resolve(&self, origin: &str) -> Result<Endpoints, ClientError> {
        let base = Url::parse(origin).map_err(|e| ClientError::InvalidUrl(format!("{origin}: {e}")))?;

        let graphql = base
            .join(&self.graphql_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.graphql_url)))?;

        let auth_base = match &self.auth_base_url {
            Some(url) => base
                .join(url)
                .map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?,
            None => base.clone(),
        };

        Ok(Endpoints {
            origin: base,
            graphql,
            auth_base,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Absolute URLs the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub origin: Url,
    pub graphql: Url,
    pub auth_base: Url,
}

impl Endpoints {
    /// `<auth_base>/auth/dev`, keeping any path prefix of the auth base.
    pub fn dev_auth(&self) -> Result<Url, ClientError> {
        let mut base = self.auth_base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("auth/dev")
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(graphql_url: &str, auth_base_url: Option<&str>) -> AppConfig {
        AppConfig {
            graphql_url: graphql_url.to_string(),
            auth_base_url: auth_base_url.map(str::to_string),
            graphiql_url: DEFAULT_GRAPHIQL_URL.to_string(),
            dev_tools: false,
        }
    }

    #[test]
    fn test_relative_graphql_url_uses_origin() {
        let endpoints = config("/query", None)
            .resolve("http://localhost:5173")
            .unwrap();

        assert_eq!(endpoints.graphql.as_str(), "http://localhost:5173/query");
        assert_eq!(
            endpoints.dev_auth().unwrap().as_str(),
            "http://localhost:5173/auth/dev"
        );
    }

    #[test]
    fn test_absolute_urls_override_origin() {
        let endpoints = config("http://api.local:8080/query", Some("http://api.local:8080"))
            .resolve("tauri://localhost")
            .unwrap();

        assert_eq!(endpoints.graphql.as_str(), "http://api.local:8080/query");
        assert_eq!(
            endpoints.dev_auth().unwrap().as_str(),
            "http://api.local:8080/auth/dev"
        );
    }

    #[test]
    fn test_auth_base_path_prefix_is_kept() {
        for base in ["http://h/api/", "http://h/api"] {
            let endpoints = config("/query", Some(base))
                .resolve("http://localhost:5173")
                .unwrap();
            assert_eq!(endpoints.dev_auth().unwrap().as_str(), "http://h/api/auth/dev");
        }
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let result = config("/query", None).resolve("not a url");
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
