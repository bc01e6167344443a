use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

use crate::data::{AuthData, User};

/// Values persisted in browser local storage under fixed keys.
pub trait StoredValue {
	fn id() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		LocalStorage::get::<Self>(Self::id()).ok()
	}

	fn store(self)
	where
		Self: Sized + Serialize,
	{
		let _ = LocalStorage::set(Self::id(), self);
	}

	fn delete() {
		LocalStorage::delete(Self::id());
	}
}

/// The opaque bearer token. Read synchronously before every outgoing
/// request; only the session writers below may store or delete it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken(pub String);
impl StoredValue for AuthToken {
	fn id() -> &'static str {
		"token"
	}
}

impl StoredValue for User {
	fn id() -> &'static str {
		"user"
	}
}

/// Process-wide authentication state. Initialized from local storage at
/// startup, set by login/register, updated by profile saves, cleared by
/// logout. The router branches on `is_authenticated`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
	pub token: Option<String>,
	pub user: Option<User>,
}
impl Store for Session {
	fn new(_cx: &yewdux::Context) -> Self {
		Self {
			token: AuthToken::load().map(|AuthToken(token)| token),
			user: User::load(),
		}
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}
impl Session {
	pub fn is_authenticated(&self) -> bool {
		self.token.is_some()
	}
}

/// Install the token and the minimal profile from an auth response. The
/// full profile, when it arrives, comes in through [`set_user`].
pub fn start(auth: &AuthData) {
	log::debug!(target: "session", "session started for user {}", auth.id);
	let user = User::with_default_goals(auth.id.clone(), auth.email.clone(), auth.name.clone());
	AuthToken(auth.token.clone()).store();
	user.clone().store();
	Dispatch::<Session>::global().reduce_mut(|session| {
		session.token = Some(auth.token.clone());
		session.user = Some(user);
	});
}

/// Overwrite the stored profile in place (login's follow-up fetch, profile
/// updates). Leaves the token untouched.
pub fn set_user(user: User) {
	user.clone().store();
	Dispatch::<Session>::global().reduce_mut(|session| {
		session.user = Some(user);
	});
}

/// Clear the session entirely.
pub fn end() {
	AuthToken::delete();
	<User as StoredValue>::delete();
	Dispatch::<Session>::global().reduce_mut(|session| {
		session.token = None;
		session.user = None;
	});
}
