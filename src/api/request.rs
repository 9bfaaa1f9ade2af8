use super::{ApiClient, ApiRequest};
use crate::error::{Error, InvalidJson};
use serde::{de::DeserializeOwned, Serialize};

pub struct Request<'client, T> {
	client: &'client ApiClient,
	request: ApiRequest,
	marker: std::marker::PhantomData<T>,
}
impl<'client, T> std::fmt::Debug for Request<'client, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Debug::fmt(&self.request, f)
	}
}
impl<'client, T> Request<'client, T> {
	pub fn new(client: &'client ApiClient, request: ApiRequest) -> Self {
		Self {
			client,
			request,
			marker: Default::default(),
		}
	}

	pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
		self.request.query.push((key.to_owned(), value.into()));
		self
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Result<Self, Error>
	where
		Q: Serialize + ?Sized,
	{
		let body = serde_json::to_value(json).map_err(|err| InvalidJson(String::new(), err))?;
		self.request.body = Some(body);
		Ok(self)
	}

	/// Sends the request, requiring a success status but ignoring the body.
	pub async fn acknowledge(self) -> Result<(), Error> {
		let response = self.client.transport().execute(self.request).await?;
		if !response.is_success() {
			return Err(Error::rejected(response.status, &response.body));
		}
		Ok(())
	}
}
impl<'client, T> Request<'client, T>
where
	T: DeserializeOwned,
{
	pub async fn send(self) -> Result<T, Error> {
		let response = self.client.transport().execute(self.request).await?;
		if !response.is_success() {
			return Err(Error::rejected(response.status, &response.body));
		}
		let output = match serde_json::from_str(&response.body) {
			Ok(data) => data,
			Err(err) => {
				return Err(InvalidJson(response.body, err).into());
			}
		};
		Ok(output)
	}
}
