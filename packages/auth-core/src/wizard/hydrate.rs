//! Session fields written when a wizard run completes. They replace the
//! stored session wholesale.

use crate::outcome::KnownUser;
use crate::session::SessionFields;

pub(super) fn known_user_fields(user: &KnownUser) -> SessionFields {
    SessionFields::new()
        .token(user.token.clone())
        .user_id(user.id.clone())
        .name(user.name.clone())
        .phone(user.phone.clone())
}

pub(super) fn registered_fields(
    token: &str,
    user_id: Option<String>,
    name: &str,
    phone: &str,
) -> SessionFields {
    SessionFields::new()
        .token(token)
        .user_id(user_id)
        .name(name)
        .phone(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_user_without_id_leaves_id_unset() {
        let fields = known_user_fields(&KnownUser {
            token: "abc".into(),
            name: "Asha".into(),
            phone: "9876543210".into(),
            id: None,
        });
        assert_eq!(fields.auth_token.as_deref(), Some("abc"));
        assert_eq!(fields.user_id, None);
        assert_eq!(fields.profile_image_path, None);
    }
}
