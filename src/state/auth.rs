//! Signed-in user session backed by local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth forms store the user returned by the backend; the product page's
//! profile menu reads it back and sign-out removes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::storage::{KeyValueStore, SAVED_KEY, USER_KEY, array_len, load_json, save_json};

/// Current user, if any.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Read the stored user; malformed entries read as signed out.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self { user: load_json(store, USER_KEY) }
    }

    /// Persist `user` as the signed-in user.
    pub fn sign_in(&mut self, store: &impl KeyValueStore, user: User) {
        save_json(store, USER_KEY, &user);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self, store: &impl KeyValueStore) {
        store.remove(USER_KEY);
        self.user = None;
    }

    /// Profile-menu view of the current user.
    pub fn profile(&self, store: &impl KeyValueStore) -> Profile {
        let user = self.user.as_ref();
        let name = user.map(|u| u.name.trim()).filter(|n| !n.is_empty());
        Profile {
            name: name.unwrap_or(GUEST_NAME).to_owned(),
            member_since: user.and_then(|u| u.created_at.as_deref()).and_then(member_since),
            initial: name.and_then(avatar_initial).unwrap_or_else(|| GUEST_INITIAL.to_owned()),
            saved_items: array_len(store, SAVED_KEY),
        }
    }
}

pub const GUEST_NAME: &str = "Guest";
const GUEST_INITIAL: &str = "G";

/// What the profile dropdown shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// `Member since {year}` when the account date is readable.
    pub member_since: Option<String>,
    pub initial: String,
    pub saved_items: usize,
}

/// Year of an account timestamp.
///
/// Accepts ISO-8601 (`2024-03-01T...`) and other date strings containing a
/// standalone four-digit year (`Fri, 01 Mar 2024 10:00:00 GMT`).
pub fn account_year(created_at: &str) -> Option<u32> {
    let trimmed = created_at.trim();
    let leading: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    if leading.len() == 4 {
        return leading.parse().ok();
    }
    trimmed
        .split(|c: char| !c.is_ascii_digit())
        .find(|token| token.len() == 4)
        .and_then(|token| token.parse().ok())
}

pub fn member_since(created_at: &str) -> Option<String> {
    account_year(created_at).map(|year| format!("Member since {year}"))
}

/// First character of the trimmed name, uppercased.
pub fn avatar_initial(name: &str) -> Option<String> {
    name.trim().chars().next().map(|c| c.to_uppercase().collect())
}
