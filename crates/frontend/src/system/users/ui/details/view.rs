use contracts::domain::a001_product::aggregate::SkinType;
use contracts::system::users::{AGE_RANGES, GENDER_OPTIONS};
use leptos::prelude::*;
use thaw::*;

use super::view_model::ProfileEditorViewModel;
use crate::shared::allergies::COMMON_ALLERGENS;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Modal form for the cold-start profile.
#[component]
pub fn ProfileEditor(
    on_close: Callback<()>,
    /// Runs after the profile was stored (remotely or locally)
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let vm = session.user.with_untracked(|u| ProfileEditorViewModel::new(u.as_ref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(
            session,
            toasts,
            Callback::new(move |_| {
                on_saved.run(());
                on_close.run(());
            }),
        );
    };

    view! {
        <Modal title="My profile" class="profile-modal" on_close=on_close>
            <form class="profile-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="profileName">"Name"</label>
                    <input
                        type="text"
                        id="profileName"
                        prop:value=move || vm.name.get()
                        on:input=move |ev| vm.name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="profileGender">"Gender"</label>
                        <Select value=vm.gender>
                            <option value="">"Not specified"</option>
                            {GENDER_OPTIONS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <div class="form-group">
                        <label for="profileAge">"Age range"</label>
                        <Select value=vm.age_range>
                            <option value="">"Not specified"</option>
                            {AGE_RANGES.iter().map(|range| view! {
                                <option value=*range>{*range}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </div>

                <div class="form-group">
                    <label>"Skin type"</label>
                    <RadioGroup value=vm.skin_type>
                        {SkinType::PROFILE_CHOICES.iter().map(|st| view! {
                            <Radio value=st.as_str().to_string() label=st.label() />
                        }).collect_view()}
                    </RadioGroup>
                </div>

                <div class="form-group">
                    <label>"Known allergies"</label>
                    <CheckboxGroup value=vm.common_allergies>
                        <div class="allergy-grid">
                            {COMMON_ALLERGENS.iter().map(|a| view! {
                                <Checkbox value=a.to_string() label=*a />
                            }).collect_view()}
                        </div>
                    </CheckboxGroup>
                </div>

                <div class="form-group">
                    <label for="profileOtherAllergies">"Other allergies"</label>
                    <input
                        type="text"
                        id="profileOtherAllergies"
                        placeholder="Comma separated"
                        prop:value=move || vm.other_allergies.get()
                        on:input=move |ev| vm.other_allergies.set(event_target_value(&ev))
                    />
                </div>

                {move || vm.error.get().map(|e| view! {
                    <div class="form-message error" role="alert">{e}</div>
                })}

                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                        <Show when=move || vm.saving.get() fallback=|| view! { <span class="btn-text">"Save profile"</span> }>
                            <Spinner />
                        </Show>
                    </button>
                </div>
            </form>
        </Modal>
    }
}
