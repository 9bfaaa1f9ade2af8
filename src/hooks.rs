use crate::{
	controller::Controller,
	error::Error,
	state::{Action, AppState, Panel},
};
use std::{future::Future, rc::Rc};
use yew::prelude::*;
use yewdux::prelude::*;

/// Shared services handed to every component through context.
#[derive(Clone)]
pub struct Services(pub Rc<Controller>);
impl PartialEq for Services {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}
impl std::ops::Deref for Services {
	type Target = Controller;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Starts workflows and writes each one's outcome back to [`AppState`] in a single update.
#[derive(Clone)]
pub struct Task {
	controller: Rc<Controller>,
	dispatch: Dispatch<AppState>,
}
impl Task {
	pub fn show(&self, panel: Panel) {
		self.dispatch.reduce_mut(move |state| state.show(panel));
	}

	pub fn run<F, Fut>(&self, target: &'static str, make_future: F)
	where
		F: FnOnce(Rc<Controller>) -> Fut,
		Fut: Future<Output = Result<Action, Error>> + 'static,
	{
		let ticket = self.controller.next_ticket();
		let future = make_future(self.controller.clone());
		self.dispatch.reduce_mut(|state| state.begin());
		let dispatch = self.dispatch.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let action = match future.await {
				Ok(action) => action,
				Err(err) => {
					log::error!(target: target, "{err:?}");
					Action::Failed(err.to_string())
				}
			};
			dispatch.reduce_mut(move |state| {
				state.apply(ticket, action);
			});
		});
	}
}

#[hook]
pub fn use_services() -> Services {
	use_context::<Services>().expect("Services context is provided by App")
}

#[hook]
pub fn use_task() -> Task {
	let services = use_services();
	let (_, dispatch) = use_store::<AppState>();
	Task {
		controller: services.0,
		dispatch,
	}
}
