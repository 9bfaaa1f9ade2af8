//! In-memory stand-in for the story API, speaking its JSON shapes over the `Transport` seam.
#![allow(dead_code)]

use async_trait::async_trait;
use hack_or_snooze::{
	api::{ApiClient, ApiRequest, Transport, TransportResponse},
	error::Error,
};
use serde_json::{json, Value};
use std::{
	cell::RefCell,
	collections::{BTreeMap, HashMap},
	rc::Rc,
};

pub static CREATED_AT: &str = "2026-10-19T12:00:00.000Z";
pub static UPDATED_AT: &str = "2026-10-19T13:30:00.000Z";

#[derive(Debug, Clone)]
struct Account {
	password: String,
	name: String,
	updated_at: String,
	favorites: Vec<String>,
}

#[derive(Debug, Clone)]
struct StoryRecord {
	id: String,
	author: String,
	title: String,
	url: String,
	username: String,
	updated_at: String,
}
impl StoryRecord {
	fn to_json(&self) -> Value {
		json!({
			"storyId": self.id,
			"author": self.author,
			"title": self.title,
			"url": self.url,
			"username": self.username,
			"createdAt": CREATED_AT,
			"updatedAt": self.updated_at,
		})
	}
}

#[derive(Default)]
struct Server {
	accounts: BTreeMap<String, Account>,
	tokens: HashMap<String, String>,
	// newest first
	stories: Vec<StoryRecord>,
	next_story: u64,
}

#[derive(Default)]
pub struct FakeApi {
	server: RefCell<Server>,
	requests: RefCell<Vec<ApiRequest>>,
}

pub fn token_for(username: &str) -> String {
	format!("token-{username}")
}

impl FakeApi {
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	pub fn client(self: &Rc<Self>) -> ApiClient {
		let transport: Rc<dyn Transport> = self.clone();
		ApiClient::with_transport(transport)
	}

	pub fn seed_user(&self, username: &str, password: &str, name: &str) -> String {
		let mut server = self.server.borrow_mut();
		server.accounts.insert(
			username.to_owned(),
			Account {
				password: password.to_owned(),
				name: name.to_owned(),
				updated_at: CREATED_AT.to_owned(),
				favorites: Vec::new(),
			},
		);
		let token = token_for(username);
		server.tokens.insert(token.clone(), username.to_owned());
		token
	}

	pub fn seed_story(&self, username: &str, title: &str, url: &str) -> String {
		let mut server = self.server.borrow_mut();
		server.insert_story(username, "Seeded Author", title, url)
	}

	pub fn seed_favorite(&self, username: &str, story_id: &str) {
		let mut server = self.server.borrow_mut();
		if let Some(account) = server.accounts.get_mut(username) {
			account.favorites.push(story_id.to_owned());
		}
	}

	pub fn requests(&self) -> Vec<ApiRequest> {
		self.requests.borrow().clone()
	}

	pub fn request_count(&self) -> usize {
		self.requests.borrow().len()
	}

	pub fn clear_requests(&self) {
		self.requests.borrow_mut().clear();
	}

	pub fn story_ids(&self) -> Vec<String> {
		self.server.borrow().stories.iter().map(|story| story.id.clone()).collect()
	}

	pub fn has_account(&self, username: &str) -> bool {
		self.server.borrow().accounts.contains_key(username)
	}
}

fn ok(status: u16, body: Value) -> TransportResponse {
	TransportResponse {
		status,
		body: body.to_string(),
	}
}

fn fail(status: u16, title: &str, message: &str) -> TransportResponse {
	ok(
		status,
		json!({ "error": { "status": status, "title": title, "message": message } }),
	)
}

fn field<'a>(body: &'a Value, path: &[&str]) -> Option<&'a str> {
	let mut value = body;
	for key in path {
		value = value.get(key)?;
	}
	value.as_str()
}

impl Server {
	fn insert_story(&mut self, username: &str, author: &str, title: &str, url: &str) -> String {
		self.next_story += 1;
		let id = format!("story-{}", self.next_story);
		self.stories.insert(
			0,
			StoryRecord {
				id: id.clone(),
				author: author.to_owned(),
				title: title.to_owned(),
				url: url.to_owned(),
				username: username.to_owned(),
				updated_at: CREATED_AT.to_owned(),
			},
		);
		id
	}

	fn user_json(&self, username: &str) -> Value {
		let account = &self.accounts[username];
		let favorites = account
			.favorites
			.iter()
			.filter_map(|id| self.stories.iter().find(|story| &story.id == id))
			.map(StoryRecord::to_json)
			.collect::<Vec<_>>();
		let own = self
			.stories
			.iter()
			.filter(|story| story.username == username)
			.map(StoryRecord::to_json)
			.collect::<Vec<_>>();
		json!({
			"username": username,
			"name": account.name,
			"createdAt": CREATED_AT,
			"updatedAt": account.updated_at,
			"favorites": favorites,
			"stories": own,
		})
	}

	fn authenticate(&self, request: &ApiRequest) -> Result<String, TransportResponse> {
		let token = request.token().ok_or_else(|| fail(401, "Unauthorized", "Only that user or admin can edit a user."))?;
		self.tokens
			.get(token)
			.filter(|username| self.accounts.contains_key(*username))
			.cloned()
			.ok_or_else(|| fail(401, "Unauthorized", "Invalid token"))
	}

	fn handle(&mut self, request: &ApiRequest) -> Result<TransportResponse, TransportResponse> {
		let segments = request
			.path
			.trim_start_matches('/')
			.split('/')
			.map(|segment| urlencoding::decode(segment).map(|s| s.into_owned()).unwrap_or_default())
			.collect::<Vec<_>>();
		let segments = segments.iter().map(String::as_str).collect::<Vec<_>>();
		let body = request.body.clone().unwrap_or(Value::Null);
		match (request.method.as_str(), segments.as_slice()) {
			("GET", ["stories"]) => {
				let stories = self.stories.iter().map(StoryRecord::to_json).collect::<Vec<_>>();
				Ok(ok(200, json!({ "stories": stories })))
			}
			("POST", ["stories"]) => {
				let username = self.authenticate(request)?;
				let (Some(author), Some(title), Some(url)) = (
					field(&body, &["story", "author"]),
					field(&body, &["story", "title"]),
					field(&body, &["story", "url"]),
				) else {
					return Err(fail(400, "Bad Request", "story requires author, title and url"));
				};
				let id = self.insert_story(&username, author, title, url);
				Ok(ok(201, json!({ "story": self.stories[0].to_json(), "id": id })))
			}
			(method @ ("DELETE" | "PATCH"), ["stories", story_id]) => {
				let username = self.authenticate(request)?;
				let Some(index) = self.stories.iter().position(|story| story.id == *story_id) else {
					return Err(fail(404, "Not Found", "Could not find a story with that ID"));
				};
				if self.stories[index].username != username {
					return Err(fail(403, "Forbidden", "Only the owner can modify a story"));
				}
				if method == "DELETE" {
					let removed = self.stories.remove(index);
					for account in self.accounts.values_mut() {
						account.favorites.retain(|id| id != &removed.id);
					}
					return Ok(ok(200, json!({ "message": "Deleted", "story": removed.to_json() })));
				}
				let story = &mut self.stories[index];
				if let Some(author) = field(&body, &["story", "author"]) {
					story.author = author.to_owned();
				}
				if let Some(title) = field(&body, &["story", "title"]) {
					story.title = title.to_owned();
				}
				if let Some(url) = field(&body, &["story", "url"]) {
					story.url = url.to_owned();
				}
				story.updated_at = UPDATED_AT.to_owned();
				Ok(ok(200, json!({ "story": story.to_json() })))
			}
			("POST", ["signup"]) => {
				let (Some(username), Some(password), Some(name)) = (
					field(&body, &["user", "username"]),
					field(&body, &["user", "password"]),
					field(&body, &["user", "name"]),
				) else {
					return Err(fail(400, "Bad Request", "user requires username, password and name"));
				};
				if self.accounts.contains_key(username) {
					return Err(fail(409, "Conflict", "There is already a user with that username"));
				}
				self.accounts.insert(
					username.to_owned(),
					Account {
						password: password.to_owned(),
						name: name.to_owned(),
						updated_at: CREATED_AT.to_owned(),
						favorites: Vec::new(),
					},
				);
				let token = token_for(username);
				self.tokens.insert(token.clone(), username.to_owned());
				Ok(ok(201, json!({ "token": token, "user": self.user_json(username) })))
			}
			("POST", ["login"]) => {
				let (Some(username), Some(password)) =
					(field(&body, &["user", "username"]), field(&body, &["user", "password"]))
				else {
					return Err(fail(400, "Bad Request", "user requires username and password"));
				};
				let Some(account) = self.accounts.get(username) else {
					return Err(fail(404, "Not Found", "Could not find user with that username"));
				};
				if account.password != password {
					return Err(fail(401, "Unauthorized", "Invalid password"));
				}
				Ok(ok(200, json!({ "token": token_for(username), "user": self.user_json(username) })))
			}
			(method, ["users", target]) => {
				let username = self.authenticate(request)?;
				if username != *target {
					return Err(fail(401, "Unauthorized", "Only that user or admin can edit a user."));
				}
				match method {
					"GET" => Ok(ok(200, json!({ "user": self.user_json(target) }))),
					"PATCH" => {
						let account = self.accounts.get_mut(*target).expect("authenticated account");
						if let Some(name) = field(&body, &["user", "name"]) {
							account.name = name.to_owned();
						}
						if let Some(password) = field(&body, &["user", "password"]) {
							account.password = password.to_owned();
						}
						account.updated_at = UPDATED_AT.to_owned();
						Ok(ok(200, json!({ "user": self.user_json(target) })))
					}
					"DELETE" => {
						let user = self.user_json(target);
						self.accounts.remove(*target);
						self.stories.retain(|story| story.username != *target);
						Ok(ok(200, json!({ "message": "Deleted", "user": user })))
					}
					_ => Err(fail(405, "Method Not Allowed", "unsupported method")),
				}
			}
			(method, ["users", target, "favorites", story_id]) => {
				let username = self.authenticate(request)?;
				if username != *target {
					return Err(fail(401, "Unauthorized", "Only that user or admin can edit a user."));
				}
				if !self.stories.iter().any(|story| story.id == *story_id) {
					return Err(fail(404, "Not Found", "Could not find a story with that ID"));
				}
				let account = self.accounts.get_mut(*target).expect("authenticated account");
				match method {
					"POST" => {
						if !account.favorites.iter().any(|id| id.as_str() == *story_id) {
							account.favorites.push((*story_id).to_owned());
						}
					}
					"DELETE" => account.favorites.retain(|id| id.as_str() != *story_id),
					_ => return Err(fail(405, "Method Not Allowed", "unsupported method")),
				}
				Ok(ok(200, json!({ "message": "Favorite updated", "user": self.user_json(target) })))
			}
			_ => Err(fail(404, "Not Found", "no such route")),
		}
	}
}

#[async_trait(?Send)]
impl Transport for FakeApi {
	async fn execute(&self, request: ApiRequest) -> Result<TransportResponse, Error> {
		self.requests.borrow_mut().push(request.clone());
		let response = match self.server.borrow_mut().handle(&request) {
			Ok(response) => response,
			Err(response) => response,
		};
		Ok(response)
	}
}
