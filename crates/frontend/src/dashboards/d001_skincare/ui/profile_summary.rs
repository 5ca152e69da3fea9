use contracts::domain::a001_product::aggregate::skin_type_label;
use contracts::system::users::{gender_label, SessionUser};
use leptos::prelude::*;

use crate::shared::allergies::summarize;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Rows of the sidebar profile card.
pub fn summary_rows(user: &SessionUser) -> [(&'static str, String); 4] {
    [
        ("Skin type", skin_type_label(user.skin_type.as_deref())),
        ("Allergies", summarize(&user.allergies)),
        ("Age range", user.age_range.clone().filter(|a| !a.is_empty()).unwrap_or_else(|| "-".to_string())),
        ("Gender", gender_label(user.gender.as_deref()).to_string()),
    ]
}

/// Cold-start profile card of the sidebar.
#[component]
pub fn ProfileSummary(on_edit: Callback<()>) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="profile-summary">
            <h3>{icon("user")}" My skin profile"</h3>
            {move || session.user.with(|u| u.as_ref().map(|user| {
                summary_rows(user).into_iter().map(|(label, value)| view! {
                    <div class="profile-row">
                        <span class="profile-label">{label}</span>
                        <span class="profile-value">{value}</span>
                    </div>
                }).collect_view()
            }))}
            <button class="btn-secondary btn-block" on:click=move |_| on_edit.run(())>
                "Edit profile"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rows() {
        let user = SessionUser {
            id: 3,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            gender: Some("female".into()),
            age_range: None,
            skin_type: Some("OILY".into()),
            allergies: vec!["fragrance".into()],
        };
        let rows = summary_rows(&user);
        assert_eq!(rows[0].1, "Oily");
        assert_eq!(rows[1].1, "fragrance");
        assert_eq!(rows[2].1, "-");
        assert_eq!(rows[3].1, "Female");
    }
}
