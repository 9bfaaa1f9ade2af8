use super::{segment, ApiClient, Story, StoryId};
use crate::error::Error;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// The signed-in user along with snapshots of their favorites and posted stories.
/// Snapshots are only as fresh as the last call that fetched user details.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub username: String,
	pub name: String,
	pub created_at: String,
	pub updated_at: String,
	// never part of the user object; attached from the auth response or session
	#[serde(skip)]
	pub login_token: String,
	#[serde(default)]
	pub favorites: Vec<Story>,
	#[serde(default, rename = "stories")]
	pub own_stories: Vec<Story>,
}

/// Profile fields to change; fields left as `None` are not sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
}

#[derive(Deserialize)]
struct AuthResponse {
	token: String,
	user: User,
}

#[derive(Deserialize)]
struct UserResponse {
	user: User,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
	user: Credentials<'a>,
}
#[derive(Serialize)]
struct Credentials<'a> {
	username: &'a str,
	password: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<&'a str>,
}

#[derive(Serialize)]
struct TokenBody<'a> {
	token: &'a str,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
	token: &'a str,
	user: &'a UserUpdate,
}

impl User {
	/// Signs up a new account.
	pub async fn create(client: &ApiClient, username: &str, password: &str, name: &str) -> Result<Self, Error> {
		let body = CredentialsBody {
			user: Credentials {
				username,
				password,
				name: Some(name),
			},
		};
		let response = client.request::<AuthResponse>(Method::POST, "/signup").with_json(&body)?.send().await?;
		Ok(response.into_user())
	}

	pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<Self, Error> {
		let body = CredentialsBody {
			user: Credentials {
				username,
				password,
				name: None,
			},
		};
		let response = client.request::<AuthResponse>(Method::POST, "/login").with_json(&body)?.send().await?;
		Ok(response.into_user())
	}

	/// Rebuilds the user for a stored session.
	/// Resolves to `None` without touching the network when either value is missing or empty.
	pub async fn get_logged_in_user(
		client: &ApiClient,
		token: Option<&str>,
		username: Option<&str>,
	) -> Result<Option<Self>, Error> {
		let (Some(token), Some(username)) = (token.filter(|s| !s.is_empty()), username.filter(|s| !s.is_empty())) else {
			return Ok(None);
		};
		let mut user = Self::fetch(client, username, token).await?;
		user.login_token = token.to_owned();
		Ok(Some(user))
	}

	async fn fetch(client: &ApiClient, username: &str, token: &str) -> Result<Self, Error> {
		let response = client
			.request::<UserResponse>(Method::GET, format!("/users/{}", segment(username)))
			.with_query("token", token)
			.send()
			.await?;
		Ok(response.user)
	}

	/// Refreshes name, timestamps, favorites and own stories from the server.
	pub async fn retrieve_details(&mut self, client: &ApiClient) -> Result<(), Error> {
		let fresh = Self::fetch(client, &self.username, &self.login_token).await?;
		self.name = fresh.name;
		self.created_at = fresh.created_at;
		self.updated_at = fresh.updated_at;
		self.favorites = fresh.favorites;
		self.own_stories = fresh.own_stories;
		Ok(())
	}

	pub async fn add_favorite(&mut self, client: &ApiClient, story_id: &StoryId) -> Result<(), Error> {
		self.change_favorite(client, story_id, Method::POST).await
	}

	pub async fn remove_favorite(&mut self, client: &ApiClient, story_id: &StoryId) -> Result<(), Error> {
		self.change_favorite(client, story_id, Method::DELETE).await
	}

	/// Adds or removes the favorite depending on the current snapshot.
	/// Returns whether the story is a favorite afterwards.
	pub async fn toggle_favorite(&mut self, client: &ApiClient, story_id: &StoryId) -> Result<bool, Error> {
		match self.is_favorite(story_id) {
			true => self.remove_favorite(client, story_id).await?,
			false => self.add_favorite(client, story_id).await?,
		}
		Ok(self.is_favorite(story_id))
	}

	// The favorites list is refetched rather than patched locally.
	async fn change_favorite(&mut self, client: &ApiClient, story_id: &StoryId, method: Method) -> Result<(), Error> {
		let path = format!("/users/{}/favorites/{}", segment(&self.username), segment(story_id.as_str()));
		client
			.request::<()>(method, path)
			.with_json(&TokenBody {
				token: &self.login_token,
			})?
			.acknowledge()
			.await?;
		self.retrieve_details(client).await
	}

	/// Sends a partial profile update.
	///
	/// Only `name` is copied back from the response. Other fields the server
	/// may have changed (such as `updated_at`) stay stale until the next
	/// [`User::retrieve_details`].
	pub async fn update(&mut self, client: &ApiClient, changes: &UserUpdate) -> Result<(), Error> {
		let response = client
			.request::<UserResponse>(Method::PATCH, format!("/users/{}", segment(&self.username)))
			.with_json(&UpdateBody {
				token: &self.login_token,
				user: changes,
			})?
			.send()
			.await?;
		self.name = response.user.name;
		Ok(())
	}

	/// Deletes the account on the server. Stored session values are left alone.
	pub async fn remove(&self, client: &ApiClient) -> Result<(), Error> {
		client
			.request::<()>(Method::DELETE, format!("/users/{}", segment(&self.username)))
			.with_json(&TokenBody {
				token: &self.login_token,
			})?
			.acknowledge()
			.await
	}

	pub fn is_favorite(&self, story_id: &StoryId) -> bool {
		self.favorites.iter().any(|story| &story.story_id == story_id)
	}

	pub fn owns(&self, story_id: &StoryId) -> bool {
		self.own_stories.iter().any(|story| &story.story_id == story_id)
	}
}

impl AuthResponse {
	fn into_user(self) -> User {
		let mut user = self.user;
		user.login_token = self.token;
		user
	}
}
