use super::{segment, ApiClient, User};
use crate::error::Error;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);
impl From<String> for StoryId {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for StoryId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl std::fmt::Display for StoryId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
impl std::fmt::Debug for StoryId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "StoryId({})", self.0)
	}
}
impl StoryId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// A single shared link, as the server reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
	pub author: String,
	pub title: String,
	pub url: String,
	pub username: String,
	pub story_id: StoryId,
	pub created_at: String,
	pub updated_at: String,
}

/// The fields a user supplies when posting a story.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewStory {
	pub author: String,
	pub title: String,
	pub url: String,
}

/// A partial edit; fields left as `None` are not sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StoryUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub author: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}
impl StoryUpdate {
	pub fn is_empty(&self) -> bool {
		self.author.is_none() && self.title.is_none() && self.url.is_none()
	}
}

#[derive(Deserialize)]
pub(super) struct StoryResponse {
	pub story: Story,
}

#[derive(Serialize)]
pub(super) struct StoryBody<'a, T> {
	pub token: &'a str,
	pub story: &'a T,
}

impl Story {
	pub fn host_name(&self) -> &str {
		crate::util::host_name(&self.url)
	}

	/// Patches this story on the server. Only author, title, url and the update
	/// timestamp are taken back from the response.
	pub async fn update(&mut self, client: &ApiClient, user: &User, changes: &StoryUpdate) -> Result<(), Error> {
		let response = client
			.request::<StoryResponse>(Method::PATCH, format!("/stories/{}", segment(self.story_id.as_str())))
			.with_json(&StoryBody {
				token: &user.login_token,
				story: changes,
			})?
			.send()
			.await?;
		let Story {
			author,
			title,
			url,
			updated_at,
			..
		} = response.story;
		self.author = author;
		self.title = title;
		self.url = url;
		self.updated_at = updated_at;
		Ok(())
	}
}
