use tracing::{debug, info};

use super::keys;
use super::storage::{SessionStorage, StorageError};

/// Snapshot of the persisted session. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub auth_token: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
    pub profile_image_path: Option<String>,
}

impl Session {
    /// Logged in means a non-empty token; expiry is the backend's call.
    pub fn is_logged_in(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Partial update. `None` fields are left untouched by `hydrate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFields {
    pub auth_token: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
    pub profile_image_path: Option<String>,
}

impl SessionFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn user_id(mut self, id: Option<String>) -> Self {
        self.user_id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.user_phone = Some(phone.into());
        self
    }

    pub fn profile_image(mut self, path: impl Into<String>) -> Self {
        self.profile_image_path = Some(path.into());
        self
    }

    fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            (keys::TOKEN, self.auth_token.as_deref()),
            (keys::USER_ID, self.user_id.as_deref()),
            (keys::USER_NAME, self.user_name.as_deref()),
            (keys::USER_PHONE, self.user_phone.as_deref()),
            (keys::PROFILE_IMAGE, self.profile_image_path.as_deref()),
        ]
    }
}

/// Single source of truth for "is someone logged in".
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write each provided field under its own key.
    ///
    /// Keys are written one at a time with no rollback: if a write fails,
    /// the keys before it stay written and the error is returned.
    pub fn hydrate(&self, fields: &SessionFields) -> Result<(), StorageError> {
        for (key, value) in fields.entries() {
            if let Some(value) = value {
                self.storage.set(key, value)?;
                debug!(key, "Session key written");
            }
        }
        Ok(())
    }

    /// Start a new identity: drop every key, then write `fields`.
    ///
    /// Used at login and registration, where a key the new account does not
    /// supply must not survive from the previous one.
    pub fn replace(&self, fields: &SessionFields) -> Result<(), StorageError> {
        for key in keys::ALL {
            self.storage.remove(key)?;
        }
        self.hydrate(fields)
    }

    pub fn read(&self) -> Session {
        Session {
            auth_token: self.storage.get(keys::TOKEN),
            user_id: self.storage.get(keys::USER_ID),
            user_name: self.storage.get(keys::USER_NAME),
            user_phone: self.storage.get(keys::USER_PHONE),
            profile_image_path: self.storage.get(keys::PROFILE_IMAGE),
        }
    }

    /// Remove every known key (logout). Keeps going past failures and
    /// reports the first one.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in keys::ALL {
            if let Err(e) = self.storage.remove(key) {
                first_err.get_or_insert(e);
            }
        }
        info!("Session cleared");
        first_err.map_or(Ok(()), Err)
    }

    /// Profile-edit screens overwrite display fields without touching the token.
    pub fn update_profile(
        &self,
        name: Option<&str>,
        profile_image_path: Option<&str>,
    ) -> Result<(), StorageError> {
        let mut fields = SessionFields::new();
        fields.user_name = name.map(str::to_string);
        fields.profile_image_path = profile_image_path.map(str::to_string);
        self.hydrate(&fields)
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().is_logged_in()
    }

    /// Token for `Authorization: Bearer`, if logged in.
    pub fn bearer_token(&self) -> Option<String> {
        self.storage.get(keys::TOKEN).filter(|t| !t.is_empty())
    }
}
