use crate::{
	api::UserUpdate,
	hooks::use_task,
	state::{Action, AppState},
	util::account_date,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Profile() -> Html {
	let state = use_store_value::<AppState>();
	let task = use_task();
	let name_input = use_node_ref();
	let Some(user) = state.user.clone() else {
		return html! {};
	};

	let rename = {
		let task = task.clone();
		let user = user.clone();
		let name_input = name_input.clone();
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let Some(name) = name_input.cast::<HtmlInputElement>().map(|input| input.value()) else {
				return;
			};
			if name.trim().is_empty() || name == user.name {
				return;
			}
			let user = user.clone();
			task.run("profile", move |controller| async move {
				let changes = UserUpdate {
					name: Some(name),
					password: None,
				};
				controller.update_profile(user, changes).await.map(Action::UserRefreshed)
			});
		})
	};

	let delete_account = {
		let user = user.clone();
		Callback::from(move |_: MouseEvent| {
			let confirmed = gloo_utils::window()
				.confirm_with_message("Delete your account? This cannot be undone.")
				.unwrap_or(false);
			if !confirmed {
				return;
			}
			let user = user.clone();
			task.run("profile", move |controller| async move {
				controller.delete_account(user).await.map(|_| Action::LoggedOut)
			});
		})
	};

	html! {
		<section id="user-profile" class="container">
			<h4>{"User Profile Info"}</h4>
			<section>
				<div id="profile-name">{format!("Name: {}", user.name)}</div>
				<div id="profile-username">{format!("Username: {}", user.username)}</div>
				<div id="profile-account-date">{format!("Account Created: {}", account_date(&user.created_at))}</div>
			</section>
			<form id="profile-form" onsubmit={rename}>
				<label for="profile-new-name">{"name"}</label>
				<input id="profile-new-name" ref={name_input} type="text" value={user.name.clone()} />
				<button type="submit">{"update name"}</button>
			</form>
			<button id="profile-delete" class="danger" onclick={delete_account}>{"delete account"}</button>
		</section>
	}
}
