use crate::config::Config;
use reqwest::Method;
use std::rc::Rc;

mod request;
pub use request::*;
mod story;
pub use story::*;
mod story_list;
pub use story_list::*;
mod transport;
pub use transport::*;
mod user;
pub use user::*;

/// Handle to the remote story API. Cheap to clone; clones share a transport.
#[derive(Clone)]
pub struct ApiClient {
	transport: Rc<dyn Transport>,
}
impl PartialEq for ApiClient {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.transport, &other.transport)
	}
}
impl std::fmt::Debug for ApiClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ApiClient").finish_non_exhaustive()
	}
}
impl ApiClient {
	pub fn new(config: &Config) -> Self {
		Self::with_transport(Rc::new(HttpTransport::new(config.base_url.clone())))
	}

	pub fn with_transport(transport: Rc<dyn Transport>) -> Self {
		Self { transport }
	}

	pub(crate) fn transport(&self) -> &dyn Transport {
		&*self.transport
	}

	pub fn request<T>(&self, method: Method, path: impl Into<String>) -> Request<'_, T> {
		Request::new(self, ApiRequest::new(method, path))
	}
}

/// Percent-encodes one path segment.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
	urlencoding::encode(value)
}
