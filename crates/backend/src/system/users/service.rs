//! In-memory user store built from the `[[users]]` configuration section.

use anyhow::{anyhow, Result};
use contracts::system::auth::UserInfo;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

use crate::shared::config::UserConfig;
use crate::system::auth::password;

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
    password_hash: String,
}

impl User {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            is_admin: self.is_admin,
        }
    }
}

#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

static USER_STORE: OnceCell<UserStore> = OnceCell::new();

impl UserStore {
    /// Hashes every configured password; usernames must be non-empty and unique.
    pub fn from_config(users: &[UserConfig]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(users.len());

        for user in users {
            let username = user.username.trim();
            if username.is_empty() {
                return Err(anyhow!("Username cannot be empty"));
            }
            if !seen.insert(username.to_string()) {
                return Err(anyhow!("Duplicate username in configuration: {}", username));
            }

            records.push(User {
                id: uuid::Uuid::new_v4().to_string(),
                username: username.to_string(),
                full_name: user.full_name.clone(),
                is_admin: user.is_admin,
                password_hash: password::hash_password(&user.password)?,
            });
        }

        Ok(Self { users: records })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns the user when the credentials match, `None` otherwise
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<Option<&User>> {
        let Some(user) = self.users.iter().find(|u| u.username == username) else {
            return Ok(None);
        };

        if password::verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Build the global store from configuration. Called once at startup.
pub fn initialize(users: &[UserConfig]) -> Result<()> {
    let store = UserStore::from_config(users)?;
    if store.is_empty() {
        tracing::warn!("No users configured, nobody will be able to log in");
    } else {
        tracing::info!("Loaded {} user(s) from configuration", store.len());
    }

    USER_STORE
        .set(store)
        .map_err(|_| anyhow!("User store already initialized"))
}

pub fn store() -> Result<&'static UserStore> {
    USER_STORE
        .get()
        .ok_or_else(|| anyhow!("User store is not initialized"))
}

pub fn verify_credentials(username: &str, password: &str) -> Result<Option<&'static User>> {
    store()?.verify_credentials(username, password)
}

pub fn get_by_id(id: &str) -> Result<Option<&'static User>> {
    Ok(store()?.get_by_id(id))
}

#[cfg(test)]
pub(crate) fn init_for_tests() {
    let _ = USER_STORE.get_or_init(|| {
        UserStore::from_config(&crate::shared::config::default_config().users)
            .expect("default users must build")
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, password: &str) -> UserConfig {
        UserConfig {
            username: username.to_string(),
            password: password.to_string(),
            full_name: None,
            is_admin: false,
        }
    }

    #[test]
    fn test_verify_credentials() {
        let store = UserStore::from_config(&[user("admin", "admin"), user("clerk", "pw")]).unwrap();

        let found = store.verify_credentials("clerk", "pw").unwrap();
        assert_eq!(found.map(|u| u.username.as_str()), Some("clerk"));
        assert!(store.verify_credentials("clerk", "wrong").unwrap().is_none());
        assert!(store.verify_credentials("nobody", "pw").unwrap().is_none());
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let store = UserStore::from_config(&[user("admin", "admin")]).unwrap();
        assert!(store.verify_credentials("Admin", "admin").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_usernames_are_rejected() {
        let err = UserStore::from_config(&[user("admin", "a"), user(" admin ", "b")]).unwrap_err();
        assert!(err.to_string().contains("Duplicate username"));
    }

    #[test]
    fn test_empty_username_is_rejected() {
        assert!(UserStore::from_config(&[user("  ", "a")]).is_err());
    }

    #[test]
    fn test_get_by_id_and_info() {
        let store = UserStore::from_config(&[user("admin", "admin")]).unwrap();
        let admin = store.verify_credentials("admin", "admin").unwrap().unwrap();

        let by_id = store.get_by_id(&admin.id).unwrap();
        let info = by_id.to_info();
        assert_eq!(info.username, "admin");
        assert_eq!(info.id, admin.id);
        assert!(store.get_by_id("missing").is_none());
    }
}
