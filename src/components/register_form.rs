use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;
use crate::services::registration::RegistrationClient;
use crate::state::{RegistrationForm, SubmissionState};
use crate::validation::{
    LOGIN_HINT, LOGIN_MAX_LEN, LOGIN_MIN_LEN, LOGIN_PATTERN, PASSWORD_HINT, PASSWORD_MIN_LEN,
};

#[component]
pub fn RegisterForm(
    /// Backend location; defaults to the `API_URL` baked in at build time.
    #[prop(optional)]
    config: Option<ApiConfig>,
) -> impl IntoView {
    let client = StoredValue::new(RegistrationClient::new(
        config.unwrap_or_else(ApiConfig::from_build_env),
    ));
    let form = RwSignal::new(RegistrationForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // The button is disabled while in flight, but Enter can still submit
        let Some(credentials) = form.try_update(RegistrationForm::begin).flatten() else {
            return;
        };
        let client = client.get_value();
        spawn_local(async move {
            let outcome = client
                .register(&credentials.login, &credentials.password)
                .await;
            form.update(|f| f.finish(outcome));
        });
    };

    let submitting = move || form.with(RegistrationForm::is_submitting);

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"User Registration"</h1>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="login">"Login:"</label>
                        <input
                            type="text"
                            id="login"
                            name="login"
                            required
                            minlength=LOGIN_MIN_LEN.to_string()
                            maxlength=LOGIN_MAX_LEN.to_string()
                            pattern=LOGIN_PATTERN
                            placeholder=LOGIN_HINT
                            prop:value=move || form.with(|f| f.credentials().login.clone())
                            on:input=move |ev| form.update(|f| f.set_login(event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password:"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            required
                            minlength=PASSWORD_MIN_LEN.to_string()
                            placeholder=PASSWORD_HINT
                            prop:value=move || form.with(|f| f.credentials().password.clone())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || if submitting() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                {move || form.with(|f| match f.state() {
                    SubmissionState::Succeeded(message) if !message.is_empty() => {
                        Some(view! { <div class="success-message">{message.clone()}</div> }.into_any())
                    }
                    SubmissionState::Failed(text) if !text.is_empty() => {
                        Some(view! { <div class="error-message">{text.clone()}</div> }.into_any())
                    }
                    _ => None,
                })}
            </div>
        </div>
    }
}
