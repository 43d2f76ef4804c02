use crate::authentication::Auth13;
use crate::credentials::Config;
use crate::errors::ChefError;
use crate::search::SearchQuery;
use failure::Error;
use hyper::client::HttpConnector;
use hyper::header::{HeaderValue, ACCEPT};
use hyper::{Body, Client, Method, Request};
use hyper_openssl::HttpsConnector;
use openssl::ssl::{SslConnector, SslMethod, SslVerifyMode};
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};
use url::Url;

const CHEF_VERSION: &str = "13.0.0";

/// A signed, blocking connection to one Chef Server organization.
///
/// The HTTP client runs on a single-threaded runtime owned by this value;
/// dropping the client closes its pooled connections.
pub struct ApiClient {
    config: Config,
    base: Url,
    client: Client<HttpsConnector<HttpConnector>>,
    runtime: Runtime,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<ApiClient, Error> {
        let base = Url::parse(&config.url)?;

        let mut http = HttpConnector::new();
        http.enforce_http(false);
        let mut ssl = SslConnector::builder(SslMethod::tls())?;
        if !config.verify_ssl {
            warn!("TLS certificate verification is disabled for {}", base);
            ssl.set_verify(SslVerifyMode::NONE);
        }
        let https = HttpsConnector::with_connector(http, ssl)?;
        let client = Client::builder().build::<_, Body>(https);

        let runtime = Builder::new_current_thread().enable_all().build()?;

        debug!("Created client for {:?}", config);
        Ok(ApiClient {
            config,
            base,
            client,
            runtime,
        })
    }

    /// Build a client from whatever configuration `Config::autoconfigure`
    /// finds.
    pub fn autoconfigure(profile: Option<&str>) -> Result<ApiClient, Error> {
        ApiClient::new(Config::autoconfigure(profile)?)
    }

    pub fn search(&self) -> SearchQuery {
        SearchQuery::new(self)
    }

    /// The server URL with `segments` appended to its path.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ChefError::InvalidServerUrl(self.config.url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn get(&self, url: &Url) -> Result<Value, Error> {
        let path = url.path();
        let auth = Auth13::new(
            "GET",
            path,
            None,
            &self.config.client_name,
            &self.config.api_version,
            self.config.key(),
        )?;

        let mut req = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .body(Body::empty())?;
        {
            let headers = req.headers_mut();
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
            headers.insert("X-Chef-Version", HeaderValue::from_static(CHEF_VERSION));
            headers.insert(
                "X-Ops-Server-API-Version",
                HeaderValue::from_str(&self.config.api_version)?,
            );
            auth.apply(headers)?;
        }

        debug!("GET {}", url);
        let (status, body) = self.runtime.block_on(async {
            let res = self.client.request(req).await?;
            let status = res.status();
            let body = hyper::body::to_bytes(res.into_body()).await?;
            Ok::<_, Error>((status, body))
        })?;
        debug!("GET {} returned {}", path, status);

        if !status.is_success() {
            return Err(ChefError::ServerError {
                status: status.as_u16(),
                path: path.into(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }
            .into());
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
