use crate::shared::storage;
use contracts::system::users::SessionUser;

const USER_KEY: &str = "glowup_user";

/// Corrupt or foreign JSON counts as "no session".
pub fn decode_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring stored session: {}", e);
            None
        }
    }
}

/// Save the signed-in user to localStorage
pub fn save_user(user: &SessionUser) {
    match serde_json::to_string(user) {
        Ok(json) => storage::set_item(USER_KEY, &json),
        Err(e) => log::error!("Could not serialize session user: {}", e),
    }
}

/// Get the stored user from localStorage
pub fn load_user() -> Option<SessionUser> {
    decode_user(&storage::get_item(USER_KEY)?)
}

/// Forget the stored user
pub fn clear_user() {
    storage::remove_item(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stored_user() {
        let raw = r#"{"id":3,"name":"Ioana Pop","email":"ioana@example.com","gender":"female","age_range":"26-35","skin_type":"dry","allergies":["fragrance"]}"#;
        let user = decode_user(raw).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.skin_type.as_deref(), Some("dry"));
        assert_eq!(user.allergies, vec!["fragrance".to_string()]);

        let again = decode_user(&serde_json::to_string(&user).unwrap()).unwrap();
        assert_eq!(again, user);
    }

    #[test]
    fn test_corrupt_session_is_ignored() {
        assert!(decode_user("{not json").is_none());
        assert!(decode_user(r#"{"name":"no id"}"#).is_none());
        assert!(decode_user("null").is_none());
    }
}
