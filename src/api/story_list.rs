use super::{segment, story::StoryBody, story::StoryResponse, ApiClient, NewStory, Story, StoryId, User};
use crate::error::Error;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// The most recently fetched stories, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoryList {
	pub stories: Vec<Story>,
}

impl StoryList {
	pub async fn get_stories(client: &ApiClient) -> Result<Self, Error> {
		#[derive(Deserialize)]
		struct Response {
			stories: Vec<Story>,
		}
		let response = client.request::<Response>(Method::GET, "/stories").send().await?;
		log::debug!(target: "api", "fetched {} stories", response.stories.len());
		Ok(Self {
			stories: response.stories,
		})
	}

	/// Posts a story for `user`. Once the server accepts it, the story is put
	/// at the front of both this list and the user's own stories.
	pub async fn add_story(&mut self, client: &ApiClient, user: &mut User, new_story: &NewStory) -> Result<Story, Error> {
		let response = client
			.request::<StoryResponse>(Method::POST, "/stories")
			.with_json(&StoryBody {
				token: &user.login_token,
				story: new_story,
			})?
			.send()
			.await?;
		let story = response.story;
		prepend(&mut self.stories, story.clone());
		prepend(&mut user.own_stories, story.clone());
		Ok(story)
	}

	/// Deletes the story remotely, then drops it from this list and the user's own stories.
	pub async fn remove_story(&mut self, client: &ApiClient, user: &mut User, story_id: &StoryId) -> Result<(), Error> {
		#[derive(Serialize)]
		struct Body<'a> {
			token: &'a str,
		}
		client
			.request::<()>(Method::DELETE, format!("/stories/{}", segment(story_id.as_str())))
			.with_json(&Body {
				token: &user.login_token,
			})?
			.acknowledge()
			.await?;
		self.stories.retain(|story| &story.story_id != story_id);
		user.own_stories.retain(|story| &story.story_id != story_id);
		Ok(())
	}

	pub fn get(&self, story_id: &StoryId) -> Option<&Story> {
		self.stories.iter().find(|story| &story.story_id == story_id)
	}

	pub fn len(&self) -> usize {
		self.stories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stories.is_empty()
	}
}

// Keeps story ids unique even if the server echoes one we already hold.
fn prepend(stories: &mut Vec<Story>, story: Story) {
	stories.retain(|existing| existing.story_id != story.story_id);
	stories.insert(0, story);
}
