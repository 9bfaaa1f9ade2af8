use super::AuthSwitch;
use crate::{
	error::Error,
	hooks::use_task,
	state::{Action, AppState, Panel},
};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Nav() -> Html {
	let state = use_store_value::<AppState>();
	let task = use_task();
	let show = |panel: Panel| {
		let task = task.clone();
		Callback::from(move |_: MouseEvent| task.show(panel.clone()))
	};
	let all_stories = {
		let task = task.clone();
		Callback::from(move |_: MouseEvent| {
			task.show(Panel::AllStories);
			task.run("stories", |controller| async move {
				controller.load_stories().await.map(Action::StoriesLoaded)
			});
		})
	};
	let logout = {
		let task = task.clone();
		Callback::from(move |_: MouseEvent| {
			task.run("session", |controller| {
				controller.logout();
				futures::future::ready(Ok::<_, Error>(Action::LoggedOut))
			});
		})
	};
	let username = state.user.as_ref().map(|user| user.username.clone()).unwrap_or_default();

	html! {
		<nav>
			<div class="navbar-brand">
				<a id="nav-all" onclick={all_stories}>{"Hack or Snooze"}</a>
			</div>
			<AuthSwitch
				identified={html! {<>
					<div class="main-nav-links">
						<a id="nav-submit" onclick={show(Panel::Submit)}>{"submit"}</a>
						{" | "}
						<a id="nav-favorites" onclick={show(Panel::Favorites)}>{"favorites"}</a>
						{" | "}
						<a id="nav-my-stories" onclick={show(Panel::MyStories)}>{"my stories"}</a>
					</div>
					<div class="nav-right">
						<span id="nav-welcome">
							{"hi, "}
							<a id="nav-user-profile" onclick={show(Panel::Profile)}>{username}</a>
						</span>
						<a id="nav-logout" onclick={logout}>{"(logout)"}</a>
					</div>
				</>}}
				anonymous={html! {
					<div class="nav-right">
						<a id="nav-login" onclick={show(Panel::Login)}>{"login/create user"}</a>
					</div>
				}}
			/>
		</nav>
	}
}
