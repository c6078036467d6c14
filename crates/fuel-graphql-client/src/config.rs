use std::{collections::BTreeMap, time::Duration};

use url::Url;

/// Connection settings of a [`Client`](crate::Client).
///
/// ```toml
/// endpoint = "https://beta-5.fuel.network/graphql"
/// timeout = "30s"
///
/// [headers]
/// x-api-key = "secret"
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// The GraphQL endpoint of the node.
    pub endpoint: Url,
    /// Overall timeout of a request, no timeout when unset.
    #[serde(default, deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
    /// Headers added to every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        ClientConfig {
            endpoint,
            timeout: None,
            headers: BTreeMap::new(),
            user_agent: None,
        }
    }

    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
