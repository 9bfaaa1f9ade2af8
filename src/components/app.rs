use super::{CreateAccountForm, EditStoryForm, LoginForm, Nav, Profile, StoryCollection, SubmitForm};
use crate::{
	config::Config,
	controller::Controller,
	hooks::{use_task, Services},
	state::{Action, AppState, Panel},
};
use yew::prelude::*;
use yew_hooks::use_mount;
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AppProps {
	pub config: Config,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
	let controller = use_memo(props.config.clone(), |config| Controller::for_browser(config));
	html! {
		<ContextProvider<Services> context={Services(controller)}>
			<Page />
		</ContextProvider<Services>>
	}
}

#[function_component]
fn Page() -> Html {
	let state = use_store_value::<AppState>();
	let task = use_task();
	use_mount({
		let task = task.clone();
		move || {
			task.run("session", |controller| async move {
				controller
					.restore()
					.await
					.map(|(user, stories)| Action::Restored { user, stories })
			});
		}
	});

	let notice = match &state.notice {
		Some(message) => html! { <div id="notice" class="notice">{message}</div> },
		None => html! {},
	};
	let progress = match state.pending {
		0 => html! {},
		_ => html! { <i class="fas fa-circle-notch fa-spin" id="loading" /> },
	};

	let panel = match (&state.panel, &state.user) {
		(Panel::AllStories, _) => {
			let stories = state.stories.as_ref().map(|list| list.stories.clone()).unwrap_or_default();
			html! { <StoryCollection id="all-articles-list" {stories} empty="No stories yet!" /> }
		}
		(Panel::Login, _) => html! {<>
			<LoginForm />
			<CreateAccountForm />
		</>},
		(Panel::Submit, Some(_)) => html! { <SubmitForm /> },
		(Panel::Profile, Some(_)) => html! { <Profile /> },
		(Panel::Favorites, Some(user)) => html! {
			<StoryCollection id="favorited-articles" stories={user.favorites.clone()} empty="No favorites!" />
		},
		(Panel::MyStories, Some(user)) => html! {
			<StoryCollection id="my-articles" stories={user.own_stories.clone()} empty="No stories added yet!" own=true />
		},
		(Panel::EditStory(story_id), Some(_)) => match state.story(story_id) {
			Some(story) => html! { <EditStoryForm story={story.clone()} /> },
			None => html! { <h5>{"That story no longer exists."}</h5> },
		},
		(_, None) => html! {},
	};

	html! {<>
		<Nav />
		<section class="articles-container container">
			{notice}
			{progress}
			{panel}
		</section>
	</>}
}
