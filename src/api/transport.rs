use crate::error::Error;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use url::Url;

/// A request against the story API, relative to its base url.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
	pub method: Method,
	pub path: String,
	pub query: Vec<(String, String)>,
	pub body: Option<Value>,
}
impl ApiRequest {
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			query: Vec::new(),
			body: None,
		}
	}

	/// The value of the `token` field, wherever the request carries it.
	pub fn token(&self) -> Option<&str> {
		if let Some((_, token)) = self.query.iter().find(|(key, _)| key == "token") {
			return Some(token.as_str());
		}
		self.body.as_ref()?.get("token")?.as_str()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}
impl TransportResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

#[async_trait(?Send)]
pub trait Transport {
	async fn execute(&self, request: ApiRequest) -> Result<TransportResponse, Error>;
}

pub struct HttpTransport {
	client: reqwest::Client,
	base_url: Url,
}
impl HttpTransport {
	pub fn new(base_url: Url) -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url,
		}
	}

	fn endpoint(&self, path: &str) -> Result<Url, Error> {
		let base = self.base_url.as_str().trim_end_matches('/');
		Ok(Url::parse(&format!("{base}{path}"))?)
	}
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
	async fn execute(&self, request: ApiRequest) -> Result<TransportResponse, Error> {
		let endpoint = self.endpoint(&request.path)?;
		let mut builder = self.client.request(request.method.clone(), endpoint);
		builder = builder.header("Accept", "application/json");
		if !request.query.is_empty() {
			builder = builder.query(&request.query);
		}
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}
		log::debug!(target: "api", "{} {}", request.method, request.path);
		let response = builder.send().await?;
		let status = response.status().as_u16();
		let body = response.text().await?;
		Ok(TransportResponse { status, body })
	}
}
