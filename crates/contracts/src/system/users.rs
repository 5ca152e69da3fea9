use serde::{Deserialize, Deserializer, Serialize};

/// Gender choices offered by the registration wizard and the profile editor.
pub const GENDER_OPTIONS: [(&str, &str); 3] =
    [("female", "Female"), ("male", "Male"), ("other", "Other")];

/// Age ranges of the cold-start profile.
pub const AGE_RANGES: [&str; 6] = ["13-17", "18-25", "26-35", "36-45", "46-55", "55+"];

pub fn gender_label(value: Option<&str>) -> &'static str {
    value
        .and_then(|v| GENDER_OPTIONS.iter().find(|(key, _)| *key == v))
        .map(|(_, label)| *label)
        .unwrap_or("-")
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The signed-in user as returned by `POST /login` and kept in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub age_range: Option<String>,

    #[serde(default)]
    pub skin_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub allergies: Vec<String>,
}

impl SessionUser {
    /// Copies the editable cold-start fields from a saved profile.
    pub fn apply_profile(&mut self, profile: &UpdateProfileDto) {
        self.name = profile.name.clone();
        self.gender = profile.gender.clone();
        self.age_range = profile.age_range.clone();
        self.skin_type = profile.skin_type.clone();
        self.allergies = profile.allergies.clone();
    }
}

/// Body of `PUT /user/{id}`. Unset choices are sent as `null` so the server clears them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub name: String,
    pub gender: Option<String>,
    pub age_range: Option<String>,
    pub skin_type: Option<String>,
    pub allergies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_tolerates_null_allergies() {
        let json = r#"{"id": 7, "name": "Ana", "email": "ana@example.com", "allergies": null}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.allergies.is_empty());
        assert!(user.skin_type.is_none());
    }

    #[test]
    fn test_apply_profile_overwrites_cold_start_fields() {
        let mut user = SessionUser {
            id: 1,
            name: "Old".into(),
            email: "old@example.com".into(),
            gender: Some("female".into()),
            age_range: None,
            skin_type: Some("dry".into()),
            allergies: vec!["retinol".into()],
        };
        let profile = UpdateProfileDto {
            name: "New".into(),
            gender: None,
            age_range: Some("26-35".into()),
            skin_type: Some("oily".into()),
            allergies: vec![],
        };
        user.apply_profile(&profile);
        assert_eq!(user.name, "New");
        assert_eq!(user.email, "old@example.com");
        assert_eq!(user.gender, None);
        assert_eq!(user.age_range.as_deref(), Some("26-35"));
        assert!(user.allergies.is_empty());
    }

    #[test]
    fn test_update_profile_sends_nulls() {
        let value = serde_json::to_value(UpdateProfileDto {
            name: "Ana".into(),
            ..Default::default()
        })
        .unwrap();
        assert!(value["gender"].is_null());
        assert_eq!(value["allergies"], serde_json::json!([]));
    }

    #[test]
    fn test_gender_label() {
        assert_eq!(gender_label(Some("male")), "Male");
        assert_eq!(gender_label(Some("unknown")), "-");
        assert_eq!(gender_label(None), "-");
    }
}
