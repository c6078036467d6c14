use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ClientConfig, Error, QueryError, QueryErrors};

#[derive(serde::Serialize)]
struct Request<'a> {
    query: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(bound = "D: DeserializeOwned")]
struct Response<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Option<Vec<QueryError>>,
}

/// A client of a Fuel node GraphQL endpoint.
///
/// Cloning is cheap, clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(endpoint: Url) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(endpoint))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();

        for (name, value) in &config.headers {
            let invalid = || Error::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;

            headers.insert(header_name, header_value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Client {
            endpoint: config.endpoint,
            http: builder.build().map_err(Error::Build)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends `query` and deserializes the `data` member of the response into `D`.
    ///
    /// Any GraphQL error in the response fails the whole call, even when some data was returned.
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn execute_query<D: DeserializeOwned>(&self, query: &str) -> Result<D, Error> {
        tracing::debug!(query, "sending query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&Request { query })
            .send()
            .await
            .map_err(Error::Send)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::ReadBody)?;

        tracing::debug!(%status, size = body.len(), "received response");

        let response: Response<D> = match serde_json::from_slice(&body) {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                return Err(Error::Status {
                    status,
                    body: String::from_utf8_lossy(&body).into_owned(),
                })
            }
            Err(error) => return Err(Error::ParseBody(error)),
        };

        let errors = response.errors.unwrap_or_default();

        if !errors.is_empty() {
            let errors = QueryErrors(errors);
            tracing::warn!("{errors}");

            return Err(Error::Query(errors));
        }

        match response.data {
            Some(data) => Ok(data),
            None if !status.is_success() => Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
            None => Err(Error::MissingData),
        }
    }
}
