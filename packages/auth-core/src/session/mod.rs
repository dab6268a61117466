//! Client-side session: auth token plus cached profile fields.
//!
//! Every field lives under its own storage key and is written
//! independently, so readers must treat each one as optional.

mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::{Session, SessionFields, SessionStore};

/// Storage keys shared with every other consumer of the session.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER_ID: &str = "userId";
    pub const USER_NAME: &str = "userName";
    pub const USER_PHONE: &str = "userPhone";
    pub const PROFILE_IMAGE: &str = "profileImage";

    pub const ALL: [&str; 5] = [TOKEN, USER_ID, USER_NAME, USER_PHONE, PROFILE_IMAGE];
}
