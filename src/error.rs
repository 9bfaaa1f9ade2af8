use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Http(#[from] reqwest::Error),
	#[error("{message}")]
	Rejected { status: u16, title: String, message: String },
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error(transparent)]
	InvalidUrl(#[from] url::ParseError),
	#[error(transparent)]
	Storage(#[from] gloo_storage::errors::StorageError),
}

impl Error {
	/// Builds the error for a non-success response.
	/// The API reports failures as `{"error": {"status", "title", "message"}}`;
	/// anything else falls back to the raw body.
	pub fn rejected(status: u16, body: &str) -> Self {
		#[derive(Deserialize)]
		struct Envelope {
			error: Body,
		}
		#[derive(Deserialize)]
		struct Body {
			#[serde(default)]
			title: String,
			#[serde(default)]
			message: String,
		}
		match serde_json::from_str::<Envelope>(body) {
			Ok(Envelope { error }) => Self::Rejected {
				status,
				title: error.title,
				message: match error.message.is_empty() {
					true => format!("request failed with status {status}"),
					false => error.message,
				},
			},
			Err(_) => Self::Rejected {
				status,
				title: String::new(),
				message: match body.trim().is_empty() {
					true => format!("request failed with status {status}"),
					false => body.trim().to_owned(),
				},
			},
		}
	}

	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Rejected { status, .. } => Some(*status),
			Self::Http(err) => err.status().map(|status| status.as_u16()),
			_ => None,
		}
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
