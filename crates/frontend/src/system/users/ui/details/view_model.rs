use std::collections::HashSet;

use contracts::domain::a001_product::aggregate::SkinType;
use contracts::system::users::{SessionUser, UpdateProfileDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::allergies::{merge_allergies, split_allergies, COMMON_ALLERGENS};
use crate::shared::error::ApiError;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionContext;
use crate::system::users::api;

/// Editable copy of the cold-start profile. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub gender: String,
    pub age_range: String,
    pub skin_type: String,
    pub common_allergies: Vec<String>,
    pub other_allergies: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ProfileForm {
    pub fn from_user(user: &SessionUser) -> Self {
        let (common_allergies, other_allergies) = split_allergies(&user.allergies);
        Self {
            name: user.name.clone(),
            gender: user.gender.clone().unwrap_or_default(),
            age_range: user.age_range.clone().unwrap_or_default(),
            // Radio values are the canonical lowercase keys
            skin_type: user
                .skin_type
                .as_deref()
                .map(|raw| SkinType::parse(raw).map(|st| st.as_str().to_string()).unwrap_or_else(|| raw.to_string()))
                .unwrap_or_default(),
            common_allergies,
            other_allergies,
        }
    }

    /// The request body, or a validation error when the name is blank.
    pub fn validate(&self) -> Result<UpdateProfileDto, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Name is required.".into()));
        }
        Ok(UpdateProfileDto {
            name: name.to_string(),
            gender: non_empty(&self.gender),
            age_range: non_empty(&self.age_range),
            skin_type: non_empty(&self.skin_type),
            allergies: merge_allergies(&self.common_allergies, &self.other_allergies),
        })
    }
}

/// ViewModel for the profile editor modal
#[derive(Clone, Copy)]
pub struct ProfileEditorViewModel {
    pub name: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub age_range: RwSignal<String>,
    pub skin_type: RwSignal<String>,
    pub common_allergies: RwSignal<HashSet<String>>,
    pub other_allergies: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProfileEditorViewModel {
    pub fn new(user: Option<&SessionUser>) -> Self {
        let form = user.map(ProfileForm::from_user).unwrap_or_default();
        Self {
            name: RwSignal::new(form.name),
            gender: RwSignal::new(form.gender),
            age_range: RwSignal::new(form.age_range),
            skin_type: RwSignal::new(form.skin_type),
            common_allergies: RwSignal::new(form.common_allergies.into_iter().collect()),
            other_allergies: RwSignal::new(form.other_allergies),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn form(&self) -> ProfileForm {
        let checked = self.common_allergies.get_untracked();
        ProfileForm {
            name: self.name.get_untracked(),
            gender: self.gender.get_untracked(),
            age_range: self.age_range.get_untracked(),
            skin_type: self.skin_type.get_untracked(),
            common_allergies: COMMON_ALLERGENS
                .iter()
                .filter(|a| checked.contains(**a))
                .map(|a| a.to_string())
                .collect(),
            other_allergies: self.other_allergies.get_untracked(),
        }
    }

    /// Save to the server. On failure the profile is still kept locally.
    /// `on_saved` runs in both cases, after the session was updated.
    pub fn save_command(&self, session: SessionContext, toasts: ToastService, on_saved: Callback<()>) {
        let dto = match self.form().validate() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.user_message()));
                return;
            }
        };
        let Some(user_id) = session.user.with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            self.error.set(Some("You are not signed in.".into()));
            return;
        };

        self.error.set(None);
        self.saving.set(true);
        let saving = self.saving;
        spawn_local(async move {
            match api::update_profile(user_id, &dto).await {
                Ok(_) => {
                    session.update_profile(&dto);
                    toasts.success("Profile updated");
                }
                Err(e) => {
                    log::warn!("Profile save failed, keeping local copy: {}", e);
                    session.update_profile(&dto);
                    toasts.warning("Could not reach the server. Your profile was saved locally.");
                }
            }
            let _ = saving.try_set(false);
            on_saved.run(());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            name: "Elena".into(),
            email: "elena@example.com".into(),
            gender: Some("female".into()),
            age_range: None,
            skin_type: Some("combination".into()),
            allergies: vec!["Fragrance".into(), "lanolin".into()],
        }
    }

    #[test]
    fn test_form_prefilled_from_user() {
        let form = ProfileForm::from_user(&user());
        assert_eq!(form.name, "Elena");
        assert_eq!(form.age_range, "");
        assert_eq!(form.skin_type, "combination");
        assert_eq!(form.common_allergies, vec!["fragrance".to_string()]);
        assert_eq!(form.other_allergies, "lanolin");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut form = ProfileForm::from_user(&user());
        form.name = "   ".into();
        assert_eq!(form.validate(), Err(ApiError::Validation("Name is required.".into())));
    }

    #[test]
    fn test_validate_builds_body() {
        let mut form = ProfileForm::from_user(&user());
        form.skin_type = String::new();
        form.other_allergies = "lanolin, Shea Butter".into();
        let dto = form.validate().unwrap();
        assert_eq!(dto.skin_type, None);
        assert_eq!(dto.gender.as_deref(), Some("female"));
        assert_eq!(
            dto.allergies,
            vec!["fragrance".to_string(), "lanolin".to_string(), "shea butter".to_string()]
        );

        let mut u = user();
        u.apply_profile(&dto);
        assert_eq!(u.skin_type, None);
        assert_eq!(u.allergies.len(), 3);
    }
}
