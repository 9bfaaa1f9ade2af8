use crate::{
	api::{NewStory, Story, StoryUpdate},
	hooks::use_task,
	state::{Action, AppState, Panel},
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

fn input_value(node: &NodeRef) -> String {
	node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
}

// Only fields that differ from the current value are sent.
fn changed(node: &NodeRef, current: &str) -> Option<String> {
	let value = input_value(node);
	(value != current).then_some(value)
}

#[function_component]
pub fn LoginForm() -> Html {
	let task = use_task();
	let username = use_node_ref();
	let password = use_node_ref();
	let onsubmit = {
		let (username, password) = (username.clone(), password.clone());
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let username = input_value(&username);
			let password = input_value(&password);
			task.run("session", move |controller| async move {
				controller.login(&username, &password).await.map(Action::LoggedIn)
			});
		})
	};
	html! {
		<form id="login-form" class="account-form" {onsubmit}>
			<h4>{"Login"}</h4>
			<div class="login-input">
				<label for="login-username">{"username"}</label>
				<input id="login-username" ref={username} type="text" autocomplete="username" required=true />
			</div>
			<div class="login-input">
				<label for="login-password">{"password"}</label>
				<input id="login-password" ref={password} type="password" autocomplete="current-password" required=true />
			</div>
			<button type="submit">{"login"}</button>
		</form>
	}
}

#[function_component]
pub fn CreateAccountForm() -> Html {
	let task = use_task();
	let name = use_node_ref();
	let username = use_node_ref();
	let password = use_node_ref();
	let onsubmit = {
		let (name, username, password) = (name.clone(), username.clone(), password.clone());
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let name = input_value(&name);
			let username = input_value(&username);
			let password = input_value(&password);
			task.run("session", move |controller| async move {
				controller.signup(&username, &password, &name).await.map(Action::LoggedIn)
			});
		})
	};
	html! {
		<form id="create-account-form" class="account-form" {onsubmit}>
			<h4>{"Create Account"}</h4>
			<div class="login-input">
				<label for="create-account-name">{"name"}</label>
				<input id="create-account-name" ref={name} type="text" required=true />
			</div>
			<div class="login-input">
				<label for="create-account-username">{"username"}</label>
				<input id="create-account-username" ref={username} type="text" autocomplete="username" required=true />
			</div>
			<div class="login-input">
				<label for="create-account-password">{"password"}</label>
				<input id="create-account-password" ref={password} type="password" autocomplete="new-password" required=true />
			</div>
			<button type="submit">{"create account"}</button>
		</form>
	}
}

#[function_component]
pub fn SubmitForm() -> Html {
	let state = use_store_value::<AppState>();
	let task = use_task();
	let author = use_node_ref();
	let title = use_node_ref();
	let url = use_node_ref();
	let onsubmit = {
		let (author, title, url) = (author.clone(), title.clone(), url.clone());
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let Some(user) = state.user.clone() else {
				return;
			};
			let stories = state.stories.clone().unwrap_or_default();
			let new_story = NewStory {
				author: input_value(&author),
				title: input_value(&title),
				url: input_value(&url),
			};
			task.run("stories", move |controller| async move {
				let synced = controller.submit_story(user, stories, new_story).await;
				synced.map(|synced| synced.into_action(Panel::AllStories))
			});
		})
	};
	html! {
		<form id="submit-form" {onsubmit}>
			<div>
				<label for="author">{"author"}</label>
				<input id="author" ref={author} type="text" placeholder="author name" required=true />
			</div>
			<div>
				<label for="title">{"title"}</label>
				<input id="title" ref={title} type="text" placeholder="article title" required=true />
			</div>
			<div>
				<label for="url">{"url"}</label>
				<input id="url" ref={url} type="url" placeholder="article url" required=true />
			</div>
			<button type="submit">{"submit"}</button>
		</form>
	}
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct EditStoryProps {
	pub story: Story,
}

#[function_component]
pub fn EditStoryForm(props: &EditStoryProps) -> Html {
	let state = use_store_value::<AppState>();
	let task = use_task();
	let author = use_node_ref();
	let title = use_node_ref();
	let url = use_node_ref();
	let onsubmit = {
		let (author, title, url) = (author.clone(), title.clone(), url.clone());
		let story = props.story.clone();
		let task = task.clone();
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let Some(user) = state.user.clone() else {
				return;
			};
			let changes = StoryUpdate {
				author: changed(&author, &story.author),
				title: changed(&title, &story.title),
				url: changed(&url, &story.url),
			};
			let story = story.clone();
			task.run("stories", move |controller| async move {
				let synced = controller.edit_story(user, story, changes).await;
				synced.map(|synced| synced.into_action(Panel::MyStories))
			});
		})
	};
	let cancel = Callback::from(move |_: MouseEvent| task.show(Panel::MyStories));
	let story = &props.story;
	html! {
		<form id="edit-story-form" {onsubmit}>
			<div>
				<label for="edit-author">{"author"}</label>
				<input id="edit-author" ref={author} type="text" value={story.author.clone()} required=true />
			</div>
			<div>
				<label for="edit-title">{"title"}</label>
				<input id="edit-title" ref={title} type="text" value={story.title.clone()} required=true />
			</div>
			<div>
				<label for="edit-url">{"url"}</label>
				<input id="edit-url" ref={url} type="url" value={story.url.clone()} required=true />
			</div>
			<button type="submit">{"save"}</button>
			<button type="button" onclick={cancel}>{"cancel"}</button>
		</form>
	}
}
