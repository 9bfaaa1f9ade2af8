use crate::{
	api::{ApiClient, NewStory, Story, StoryId, StoryList, StoryUpdate, User, UserUpdate},
	config::Config,
	error::Error,
	session::{BrowserStorage, Credentials, SessionStore},
	state::{Action, Panel, Ticket},
};
use std::{cell::Cell, rc::Rc};

/// Fresh copies of both the user and the story list, taken after a write.
#[derive(Debug, Clone, PartialEq)]
pub struct Synced {
	pub user: User,
	pub stories: StoryList,
}
impl Synced {
	pub fn into_action(self, show: Panel) -> Action {
		Action::Synced {
			user: self.user,
			stories: self.stories,
			show,
		}
	}
}

/// Runs the page's workflows against the API and the session store.
pub struct Controller {
	client: ApiClient,
	session: Rc<dyn SessionStore>,
	tickets: Cell<u64>,
}

impl Controller {
	pub fn new(client: ApiClient, session: Rc<dyn SessionStore>) -> Self {
		Self {
			client,
			session,
			tickets: Cell::new(0),
		}
	}

	pub fn for_browser(config: &Config) -> Self {
		Self::new(ApiClient::new(config), Rc::new(BrowserStorage))
	}

	pub fn next_ticket(&self) -> Ticket {
		let next = self.tickets.get() + 1;
		self.tickets.set(next);
		Ticket(next)
	}

	/// Page load: resolve the stored session (if any) and fetch the stories.
	pub async fn restore(&self) -> Result<(Option<User>, StoryList), Error> {
		let credentials = Credentials::load(&*self.session);
		let user = match User::get_logged_in_user(&self.client, credentials.token(), credentials.username()).await {
			Ok(Some(user)) => {
				log::info!(target: "session", "restored session for {}", user.username);
				Some(user)
			}
			Ok(None) => {
				log::debug!(target: "session", "no stored session");
				None
			}
			Err(err @ Error::Rejected { .. }) => {
				log::warn!(target: "session", "stored session was rejected, forgetting it: {err}");
				Credentials::delete(&*self.session);
				None
			}
			Err(err) => {
				log::warn!(target: "session", "could not resolve stored session: {err:?}");
				None
			}
		};
		let stories = StoryList::get_stories(&self.client).await?;
		Ok((user, stories))
	}

	pub async fn login(&self, username: &str, password: &str) -> Result<User, Error> {
		let user = User::login(&self.client, username, password).await?;
		self.persist(&user)?;
		log::info!(target: "session", "logged in as {}", user.username);
		Ok(user)
	}

	pub async fn signup(&self, username: &str, password: &str, name: &str) -> Result<User, Error> {
		let user = User::create(&self.client, username, password, name).await?;
		self.persist(&user)?;
		log::info!(target: "session", "created account {}", user.username);
		Ok(user)
	}

	fn persist(&self, user: &User) -> Result<(), Error> {
		Credentials::of(user).save(&*self.session)
	}

	pub fn logout(&self) {
		Credentials::delete(&*self.session);
		log::info!(target: "session", "logged out");
	}

	pub async fn load_stories(&self) -> Result<StoryList, Error> {
		StoryList::get_stories(&self.client).await
	}

	async fn sync(&self, mut user: User) -> Result<Synced, Error> {
		let stories = StoryList::get_stories(&self.client).await?;
		user.retrieve_details(&self.client).await?;
		Ok(Synced { user, stories })
	}

	pub async fn submit_story(&self, mut user: User, mut stories: StoryList, new_story: NewStory) -> Result<Synced, Error> {
		let story = stories.add_story(&self.client, &mut user, &new_story).await?;
		log::info!(target: "stories", "posted {:?}", story.story_id);
		self.sync(user).await
	}

	pub async fn delete_story(&self, mut user: User, mut stories: StoryList, story_id: StoryId) -> Result<Synced, Error> {
		stories.remove_story(&self.client, &mut user, &story_id).await?;
		log::info!(target: "stories", "deleted {story_id:?}");
		self.sync(user).await
	}

	pub async fn edit_story(&self, user: User, mut story: Story, changes: StoryUpdate) -> Result<Synced, Error> {
		if !changes.is_empty() {
			story.update(&self.client, &user, &changes).await?;
			log::info!(target: "stories", "edited {:?}", story.story_id);
		}
		self.sync(user).await
	}

	pub async fn toggle_favorite(&self, mut user: User, story_id: StoryId) -> Result<User, Error> {
		let favorite = user.toggle_favorite(&self.client, &story_id).await?;
		log::debug!(target: "stories", "{story_id:?} favorite: {favorite}");
		Ok(user)
	}

	pub async fn update_profile(&self, mut user: User, changes: UserUpdate) -> Result<User, Error> {
		user.update(&self.client, &changes).await?;
		Ok(user)
	}

	/// Deletes the account, then forgets the stored session.
	pub async fn delete_account(&self, user: User) -> Result<(), Error> {
		user.remove(&self.client).await?;
		log::info!(target: "session", "deleted account {}", user.username);
		self.logout();
		Ok(())
	}
}
