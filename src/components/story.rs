use crate::{
	api::Story,
	hooks::use_task,
	state::{Action, AppState, Panel},
};
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct StoryCollectionProps {
	pub id: AttrValue,
	pub stories: Vec<Story>,
	pub empty: AttrValue,
	#[prop_or_default]
	pub own: bool,
}

#[function_component]
pub fn StoryCollection(props: &StoryCollectionProps) -> Html {
	if props.stories.is_empty() {
		return html! {
			<ul id={props.id.clone()} class="articles-list">
				<h5>{&props.empty}</h5>
			</ul>
		};
	}
	html! {
		<ul id={props.id.clone()} class="articles-list">
			{props.stories.iter().map(|story| html! {
				<StoryItem key={story.story_id.to_string()} story={story.clone()} own={props.own} />
			}).collect::<Html>()}
		</ul>
	}
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct StoryItemProps {
	pub story: Story,
	#[prop_or_default]
	pub own: bool,
}

#[function_component]
pub fn StoryItem(props: &StoryItemProps) -> Html {
	let state = use_store_value::<AppState>();
	let task = use_task();
	let story = &props.story;

	let star = match &state.user {
		None => html! {},
		Some(user) => {
			let star_type = match user.is_favorite(&story.story_id) {
				true => "fas",
				false => "far",
			};
			let onclick = {
				let task = task.clone();
				let user = user.clone();
				let story_id = story.story_id.clone();
				Callback::from(move |_: MouseEvent| {
					let user = user.clone();
					let story_id = story_id.clone();
					task.run("stories", move |controller| async move {
						controller.toggle_favorite(user, story_id).await.map(Action::UserRefreshed)
					});
				})
			};
			html! {
				<span class="star" {onclick}>
					<i class={classes!(star_type, "fa-star")}></i>
				</span>
			}
		}
	};

	let controls = match (&state.user, props.own) {
		(Some(user), true) => {
			let delete = {
				let task = task.clone();
				let user = user.clone();
				let stories = state.stories.clone().unwrap_or_default();
				let story_id = story.story_id.clone();
				Callback::from(move |_: MouseEvent| {
					let (user, stories, story_id) = (user.clone(), stories.clone(), story_id.clone());
					task.run("stories", move |controller| async move {
						let synced = controller.delete_story(user, stories, story_id).await;
						synced.map(|synced| synced.into_action(Panel::AllStories))
					});
				})
			};
			let edit = {
				let task = task.clone();
				let story_id = story.story_id.clone();
				Callback::from(move |_: MouseEvent| task.show(Panel::EditStory(story_id.clone())))
			};
			html! {<>
				<span class="trash-can" onclick={delete}>
					<i class="fas fa-trash-alt"></i>
				</span>
				<span class="edit-story" onclick={edit}>
					<i class="fas fa-pen"></i>
				</span>
			</>}
		}
		_ => html! {},
	};

	let host_name = story.host_name();
	html! {
		<li id={story.story_id.to_string()}>
			{controls}
			{star}
			<a class="article-link" href={story.url.clone()} target="a_blank">
				<strong>{&story.title}</strong>
			</a>
			<small class="article-author">{format!("by {}", story.author)}</small>
			<small class="article-hostname">{format!("({host_name})")}</small>
			<small class="article-username">{format!("posted by {}", story.username)}</small>
		</li>
	}
}
