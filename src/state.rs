use crate::api::{Story, StoryId, StoryList, User};
use yewdux::prelude::*;

/// Orders the results of async workflows. Issued by the controller when a workflow starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
	#[default]
	AllStories,
	Login,
	Submit,
	Profile,
	Favorites,
	MyStories,
	EditStory(StoryId),
}
impl Panel {
	pub fn requires_user(&self) -> bool {
		!matches!(self, Self::AllStories | Self::Login)
	}
}

/// The result of one request-response cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	Restored { user: Option<User>, stories: StoryList },
	LoggedIn(User),
	LoggedOut,
	StoriesLoaded(StoryList),
	UserRefreshed(User),
	Synced { user: User, stories: StoryList, show: Panel },
	Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct AppState {
	pub user: Option<User>,
	pub stories: Option<StoryList>,
	pub panel: Panel,
	pub notice: Option<String>,
	pub pending: usize,
	user_written: Ticket,
	stories_written: Ticket,
}

impl AppState {
	pub fn is_logged_in(&self) -> bool {
		self.user.is_some()
	}

	/// Switches the visible panel, redirecting when the panel doesn't fit the session.
	pub fn show(&mut self, panel: Panel) {
		self.panel = match (&self.user, panel) {
			(None, panel) if panel.requires_user() => Panel::Login,
			(Some(_), Panel::Login) => Panel::AllStories,
			(_, panel) => panel,
		};
		self.notice = None;
	}

	pub fn begin(&mut self) {
		self.pending += 1;
	}

	/// Applies the outcome of the workflow holding `ticket`.
	/// `user` and `stories` are ordered separately: each is only written when no newer
	/// workflow has written it already. Failures never advance either order.
	/// Returns false when nothing in the result was fresh enough to keep.
	pub fn apply(&mut self, ticket: Ticket, action: Action) -> bool {
		self.pending = self.pending.saturating_sub(1);
		let applied = match action {
			Action::Restored { user, stories } => {
				let stories = self.write_stories(ticket, stories);
				let user = self.write_user(ticket, user);
				if user {
					self.panel = Panel::AllStories;
				}
				user || stories
			}
			Action::LoggedIn(user) => self.write_session(ticket, Some(user)),
			Action::LoggedOut => self.write_session(ticket, None),
			Action::StoriesLoaded(stories) => self.write_stories(ticket, stories),
			Action::UserRefreshed(user) => self.write_user(ticket, Some(user)),
			Action::Synced { user, stories, show } => {
				let stories = self.write_stories(ticket, stories);
				let user = self.write_user(ticket, Some(user));
				if user || stories {
					self.show(show);
				}
				user || stories
			}
			Action::Failed(message) => {
				self.notice = Some(message);
				true
			}
		};
		if !applied {
			log::debug!(
				target: "state",
				"dropping stale result {ticket:?} (user at {:?}, stories at {:?})",
				self.user_written,
				self.stories_written
			);
		}
		applied
	}

	fn write_user(&mut self, ticket: Ticket, user: Option<User>) -> bool {
		if ticket < self.user_written {
			return false;
		}
		self.user_written = ticket;
		self.user = user;
		true
	}

	fn write_stories(&mut self, ticket: Ticket, stories: StoryList) -> bool {
		if ticket < self.stories_written {
			return false;
		}
		self.stories_written = ticket;
		self.stories = Some(stories);
		true
	}

	fn write_session(&mut self, ticket: Ticket, user: Option<User>) -> bool {
		if !self.write_user(ticket, user) {
			return false;
		}
		self.panel = Panel::AllStories;
		self.notice = None;
		true
	}

	pub fn story(&self, story_id: &StoryId) -> Option<&Story> {
		let in_list = self.stories.as_ref().and_then(|list| list.get(story_id));
		let owned = || {
			let user = self.user.as_ref()?;
			user.own_stories.iter().find(|story| &story.story_id == story_id)
		};
		in_list.or_else(owned)
	}
}
