use crate::state::AppState;
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders `identified` while a user is signed in, `anonymous` otherwise.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let state = use_store_value::<AppState>();
	let empty = || html! {};
	match state.is_logged_in() {
		true => props.identified.clone().unwrap_or_else(empty),
		false => props.anonymous.clone().unwrap_or_else(empty),
	}
}
