use std::collections::HashSet;

use contracts::domain::a001_product::aggregate::SkinType;
use contracts::system::users::{AGE_RANGES, GENDER_OPTIONS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::allergies::COMMON_ALLERGENS;
use crate::shared::components::form_message::{FormMessage, FormMessageView};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::theme::theme_select::ThemeToggle;
use crate::system::auth::context::use_session;
use crate::system::auth::password::PasswordStrength;
use crate::system::auth::wizard::{RegisterForm, RegisterWizard, STEP_TITLES};
use crate::system::auth::{api, storage};

const LOGIN_REDIRECT_MS: u32 = 1000;
const REGISTER_RESET_MS: u32 = 2000;
const FORGOT_CLOSE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

/// Sign-in / sign-up screen shown while there is no session.
#[component]
pub fn AuthPage() -> impl IntoView {
    let tab = RwSignal::new(AuthTab::Login);
    let forgot_open = RwSignal::new(false);

    let tab_class = move |t: AuthTab| {
        if tab.get() == t {
            "tab-btn active"
        } else {
            "tab-btn"
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="logo">
                        <span class="logo-icon">{icon("sparkles")}</span>
                        <h1>"GlowUp"</h1>
                    </div>
                    <p class="auth-subtitle">"Skincare recommendations made for your skin"</p>
                    <ThemeToggle />
                </div>

                <div class="auth-tabs">
                    <button class=move || tab_class(AuthTab::Login) on:click=move |_| tab.set(AuthTab::Login)>
                        "Sign in"
                    </button>
                    <button class=move || tab_class(AuthTab::Register) on:click=move |_| tab.set(AuthTab::Register)>
                        "Create account"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == AuthTab::Login
                    fallback=move || view! { <SignUpForm on_done=Callback::new(move |_| tab.set(AuthTab::Login)) /> }
                >
                    <SignInForm
                        on_forgot=Callback::new(move |_| forgot_open.set(true))
                        on_register=Callback::new(move |_| tab.set(AuthTab::Register))
                    />
                </Show>

                <Show when=move || tab.get() == AuthTab::Register>
                    <p class="auth-switch">
                        "Already have an account? "
                        <button class="link-btn" on:click=move |_| tab.set(AuthTab::Login)>"Sign in"</button>
                    </p>
                </Show>
            </div>

            <Show when=move || forgot_open.get()>
                <ForgotPasswordModal on_close=Callback::new(move |_| forgot_open.set(false)) />
            </Show>
        </div>
    }
}

/// Password field with a visibility toggle.
#[component]
fn PasswordInput(
    value: RwSignal<String>,
    #[prop(into)] id: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="input-wrapper">
            <input
                id=id
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
                required
            />
            <button
                type="button"
                class="toggle-password"
                class:visible=move || visible.get()
                title=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { icon("eye-off") } else { icon("eye") }}
            </button>
        </div>
    }
}

#[component]
fn SignInForm(on_forgot: Callback<()>, on_register: Callback<()>) -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let message = FormMessage::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        is_loading.set(true);
        message.hide();

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(user) => {
                    storage::save_user(&user);
                    message.success("Signed in! Redirecting...");
                    TimeoutFuture::new(LOGIN_REDIRECT_MS).await;
                    session.sign_in(user);
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    message.error(e.user_message());
                }
            }
            let _ = is_loading.try_set(false);
        });
    };

    view! {
        <form class="auth-form active" on:submit=on_submit>
            <div class="form-group">
                <label for="loginEmail">"Email"</label>
                <input
                    type="email"
                    id="loginEmail"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                    required
                />
            </div>

            <div class="form-group">
                <label for="loginPassword">"Password"</label>
                <PasswordInput value=password id="loginPassword" placeholder="Your password" disabled=is_loading />
            </div>

            <div class="form-options">
                <button type="button" class="link-btn" on:click=move |_| on_forgot.run(())>
                    "Forgot password?"
                </button>
            </div>

            <FormMessageView message=message />

            <button type="submit" class="btn btn-primary btn-block" disabled=move || is_loading.get()>
                <Show when=move || is_loading.get() fallback=|| view! { <span class="btn-text">"Sign in"</span> }>
                    <Spinner />
                </Show>
            </button>

            <p class="auth-switch">
                "New here? "
                <button type="button" class="link-btn" on:click=move |_| on_register.run(())>"Create an account"</button>
            </p>
        </form>
    }
}

#[component]
fn SignUpForm(on_done: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(RegisterWizard::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let age_range = RwSignal::new(String::new());
    let skin_type = RwSignal::new(String::new());
    let common_allergies: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let other_allergies = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let message = FormMessage::new();

    let collect = move || {
        // Keep the common list in display order
        let checked = common_allergies.get_untracked();
        RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            gender: gender.get_untracked(),
            age_range: age_range.get_untracked(),
            skin_type: skin_type.get_untracked(),
            common_allergies: COMMON_ALLERGENS
                .iter()
                .filter(|a| checked.contains(**a))
                .map(|a| a.to_string())
                .collect(),
            other_allergies: other_allergies.get_untracked(),
        }
    };

    // Runs after a delay, when the form may already be gone.
    let reset = move || {
        for field in [name, email, password, gender, age_range, skin_type, other_allergies] {
            let _ = field.try_set(String::new());
        }
        let _ = common_allergies.try_set(HashSet::new());
        let _ = wizard.try_set(RegisterWizard::default());
    };

    let go_next = move |_| {
        if wizard.get_untracked().step() == 1 {
            if let Err(e) = collect().validate_account() {
                message.error(e.user_message());
                return;
            }
        }
        message.hide();
        wizard.update(RegisterWizard::next);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !wizard.get_untracked().is_last() {
            return;
        }
        let form = collect();
        if let Err(e) = form.validate_account() {
            wizard.update(|w| w.go_to(1));
            message.error(e.user_message());
            return;
        }

        let request = form.to_request();
        is_loading.set(true);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => {
                    message.success("Account created! You can sign in now.");
                    let _ = is_loading.try_set(false);
                    TimeoutFuture::new(REGISTER_RESET_MS).await;
                    reset();
                    on_done.run(());
                }
                Err(e) => {
                    log::error!("Registration failed: {}", e);
                    message.error(e.user_message());
                    let _ = is_loading.try_set(false);
                }
            }
        });
    };

    let strength = move || PasswordStrength::evaluate(&password.get());
    let step_visible = move |n: usize| wizard.get().step() == n;

    view! {
        <form class="auth-form active" on:submit=on_submit>
            <div class="register-steps">
                {STEP_TITLES.iter().enumerate().map(|(i, title)| {
                    let n = i + 1;
                    view! {
                        <div class=move || wizard.get().indicator_class(n)>
                            <span class="step-number">{n}</span>
                            <span class="step-title">{*title}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="form-step" class:active=move || step_visible(1)>
                <div class="form-group">
                    <label for="registerName">"Name"</label>
                    <input
                        type="text"
                        id="registerName"
                        placeholder="Your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="registerEmail">"Email"</label>
                    <input
                        type="email"
                        id="registerEmail"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="registerPassword">"Password"</label>
                    <PasswordInput value=password id="registerPassword" placeholder="At least 8 characters" disabled=is_loading />
                    <div class="password-strength">
                        <div class=move || match strength() {
                            Some(s) => format!("strength-bar {}", s.class()),
                            None => "strength-bar".to_string(),
                        }></div>
                        <span class="strength-text">{move || strength().map(|s| s.label()).unwrap_or("")}</span>
                    </div>
                </div>
            </div>

            <div class="form-step" class:active=move || step_visible(2)>
                <div class="form-group">
                    <label>"Gender"</label>
                    <RadioGroup value=gender>
                        {GENDER_OPTIONS.iter().map(|(value, label)| view! {
                            <Radio value=value.to_string() label=*label />
                        }).collect_view()}
                    </RadioGroup>
                </div>
                <div class="form-group">
                    <label>"Age range"</label>
                    <RadioGroup value=age_range>
                        {AGE_RANGES.iter().map(|range| view! {
                            <Radio value=range.to_string() label=*range />
                        }).collect_view()}
                    </RadioGroup>
                </div>
            </div>

            <div class="form-step" class:active=move || step_visible(3)>
                <div class="form-group">
                    <label>"Skin type"</label>
                    <RadioGroup value=skin_type>
                        {SkinType::PROFILE_CHOICES.iter().map(|st| view! {
                            <Radio value=st.as_str().to_string() label=st.label() />
                        }).collect_view()}
                    </RadioGroup>
                </div>
                <div class="form-group">
                    <label>"Known allergies"</label>
                    <CheckboxGroup value=common_allergies>
                        <div class="allergy-grid">
                            {COMMON_ALLERGENS.iter().map(|a| view! {
                                <Checkbox value=a.to_string() label=*a />
                            }).collect_view()}
                        </div>
                    </CheckboxGroup>
                </div>
                <div class="form-group">
                    <label for="additionalAllergies">"Other allergies"</label>
                    <input
                        type="text"
                        id="additionalAllergies"
                        placeholder="Comma separated, e.g. lanolin, shea butter"
                        prop:value=move || other_allergies.get()
                        on:input=move |ev| other_allergies.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <FormMessageView message=message />

            <div class="wizard-actions">
                <Show when=move || { wizard.get().step() > 1 }>
                    <button type="button" class="btn btn-secondary btn-prev" on:click=move |_| wizard.update(RegisterWizard::prev)>
                        "Back"
                    </button>
                </Show>
                <Show
                    when=move || wizard.get().is_last()
                    fallback=move || view! {
                        <button type="button" class="btn btn-primary btn-next" on:click=go_next>"Next"</button>
                    }
                >
                    <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                        <Show when=move || is_loading.get() fallback=|| view! { <span class="btn-text">"Create account"</span> }>
                            <Spinner />
                        </Show>
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[component]
fn ForgotPasswordModal(on_close: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let message = FormMessage::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked().trim().to_string();
        if email_val.is_empty() {
            message.error("Please enter your email address.");
            return;
        }

        is_loading.set(true);
        spawn_local(async move {
            match api::forgot_password(email_val.clone()).await {
                Ok(_) => {
                    message.success(format!(
                        "If an account exists for {}, you will receive an email with reset instructions.",
                        email_val
                    ));
                    let _ = is_loading.try_set(false);
                    TimeoutFuture::new(FORGOT_CLOSE_MS).await;
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Password reset request failed: {}", e);
                    message.error(e.user_message());
                    let _ = is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Reset password" class="forgot-modal" on_close=on_close>
            <form on:submit=on_submit>
                <p class="modal-hint">"Enter the email you signed up with and we will send you a reset link."</p>
                <div class="form-group">
                    <label for="forgotEmail">"Email"</label>
                    <input
                        type="email"
                        id="forgotEmail"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />
                </div>
                <FormMessageView message=message />
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Back to sign in"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                        <Show when=move || is_loading.get() fallback=|| view! { <span class="btn-text">"Send link"</span> }>
                            <Spinner />
                        </Show>
                    </button>
                </div>
            </form>
        </Modal>
    }
}
