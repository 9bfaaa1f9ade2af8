use crate::{api::User, error::Error};
use gloo_storage::{LocalStorage, Storage};
use std::{cell::RefCell, collections::HashMap};

/// String key-value storage that outlives a page load.
pub trait SessionStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> Result<(), Error>;
	fn delete(&self, key: &str);
}

/// The browser's `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;
impl SessionStore for BrowserStorage {
	fn get(&self, key: &str) -> Option<String> {
		LocalStorage::get::<String>(key).ok()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), Error> {
		Ok(LocalStorage::set(key, value)?)
	}

	fn delete(&self, key: &str) {
		LocalStorage::delete(key);
	}
}

#[derive(Debug, Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);
impl SessionStore for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), Error> {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn delete(&self, key: &str) {
		self.0.borrow_mut().remove(key);
	}
}

pub trait SessionValue: Sized {
	fn id() -> &'static str;
	fn as_stored(&self) -> &str;
	fn from_stored(value: String) -> Self;

	fn load(store: &dyn SessionStore) -> Option<Self> {
		store.get(Self::id()).filter(|value| !value.is_empty()).map(Self::from_stored)
	}

	fn save(&self, store: &dyn SessionStore) -> Result<(), Error> {
		store.set(Self::id(), self.as_stored())
	}

	fn delete(store: &dyn SessionStore) {
		store.delete(Self::id());
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token(pub String);
impl SessionValue for Token {
	fn id() -> &'static str {
		"token"
	}

	fn as_stored(&self) -> &str {
		&self.0
	}

	fn from_stored(value: String) -> Self {
		Self(value)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Username(pub String);
impl SessionValue for Username {
	fn id() -> &'static str {
		"username"
	}

	fn as_stored(&self) -> &str {
		&self.0
	}

	fn from_stored(value: String) -> Self {
		Self(value)
	}
}

/// The persisted session identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
	pub token: Option<Token>,
	pub username: Option<Username>,
}
impl Credentials {
	pub fn of(user: &User) -> Self {
		Self {
			token: Some(Token(user.login_token.clone())),
			username: Some(Username(user.username.clone())),
		}
	}

	pub fn load(store: &dyn SessionStore) -> Self {
		Self {
			token: Token::load(store),
			username: Username::load(store),
		}
	}

	pub fn save(&self, store: &dyn SessionStore) -> Result<(), Error> {
		if let Some(token) = &self.token {
			token.save(store)?;
		}
		if let Some(username) = &self.username {
			username.save(store)?;
		}
		Ok(())
	}

	pub fn delete(store: &dyn SessionStore) {
		Token::delete(store);
		Username::delete(store);
	}

	pub fn token(&self) -> Option<&str> {
		self.token.as_ref().map(|token| token.0.as_str())
	}

	pub fn username(&self) -> Option<&str> {
		self.username.as_ref().map(|username| username.0.as_str())
	}
}
