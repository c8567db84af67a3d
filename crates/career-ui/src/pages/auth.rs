use career_types::Failure;
use leptos::prelude::*;

use crate::backend::to_failure;

/// Session lifetime used when the provider does not say.
#[cfg(feature = "ssr")]
const DEFAULT_SESSION_SECS: u64 = 3600;

#[server]
pub async fn session_status() -> Result<bool, ServerFnError<Failure>> {
    Ok(crate::backend::ssr::request_session().is_signed_in())
}

#[server]
async fn sign_in(email: String, password: String) -> Result<(), ServerFnError<Failure>> {
    use crate::backend::ssr::{auth_provider, reject};
    use career_services::{session_cookie, AccessToken, ApiError};
    use http::header::{HeaderValue, SET_COOKIE};
    use leptos_axum::ResponseOptions;

    let provider = auth_provider()?;
    let session = provider
        .sign_in_with_password(email.trim(), &password)
        .await
        .map_err(|e| match e {
            ApiError::Status { message, .. } => {
                ServerFnError::WrappedServerError(Failure::Validation(message))
            }
            other => reject(other),
        })?;

    let token = AccessToken::parse(&session.access_token)
        .ok_or(ServerFnError::WrappedServerError(Failure::Unauthorized))?;
    let cookieValue = session_cookie(&token, session.expires_in.unwrap_or(DEFAULT_SESSION_SECS));

    let responseOptions = expect_context::<ResponseOptions>();
    responseOptions.insert_header(
        SET_COOKIE,
        HeaderValue::from_str(&cookieValue)
            .map_err(|e| ServerFnError::ServerError(format!("cookie error: {e}")))?,
    );

    leptos_axum::redirect("/dashboard");

    Ok(())
}

#[server]
async fn sign_up(email: String, password: String) -> Result<(), ServerFnError<Failure>> {
    use crate::backend::ssr::{auth_provider, reject};
    use career_services::ApiError;

    auth_provider()?
        .sign_up(email.trim(), &password)
        .await
        .map_err(|e| match e {
            ApiError::Status { message, .. } => {
                ServerFnError::WrappedServerError(Failure::Validation(message))
            }
            other => reject(other),
        })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

fn error_text(result: Option<Result<(), ServerFnError<Failure>>>) -> Option<String> {
    result
        .and_then(Result::err)
        .map(|e| to_failure(e).user_message())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let signInAction = ServerAction::<SignIn>::new();
    let signUpAction = ServerAction::<SignUp>::new();
    let signInValue = signInAction.value();
    let signUpValue = signUpAction.value();
    let mode = RwSignal::new(AuthMode::SignIn);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_navigate;
        use wasm_bindgen_futures::spawn_local;

        let navigate = use_navigate();
        spawn_local(async move {
            if let Ok(true) = session_status().await {
                navigate("/dashboard", Default::default());
            }
        });
    }

    let signedUp = move || signUpValue.get().is_some_and(|r| r.is_ok());

    Effect::new(move |_| {
        if signedUp() {
            mode.set(AuthMode::SignIn);
        }
    });

    let errorMessage = move || match mode.get() {
        AuthMode::SignIn => error_text(signInValue.get()),
        AuthMode::SignUp => error_text(signUpValue.get()),
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"C"</div>
                    <h1>"Careers Builder"</h1>
                    <p>
                        {move || match mode.get() {
                            AuthMode::SignIn => "Sign in to manage your careers pages",
                            AuthMode::SignUp => "Create a recruiter account",
                        }}
                    </p>
                </div>

                {move || errorMessage().map(|message| view! { <div class="login-error">{message}</div> })}

                {move || {
                    (signedUp() && mode.get() == AuthMode::SignIn)
                        .then(|| {
                            view! {
                                <div class="login-notice">
                                    "Check your email to confirm your account, then sign in."
                                </div>
                            }
                        })
                }}

                {move || match mode.get() {
                    AuthMode::SignIn => {
                        view! {
                            <ActionForm action=signInAction>
                                <CredentialFields />
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || signInAction.pending().get()
                                >
                                    "Sign In"
                                </button>
                            </ActionForm>
                        }
                            .into_any()
                    }
                    AuthMode::SignUp => {
                        view! {
                            <ActionForm action=signUpAction>
                                <CredentialFields />
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || signUpAction.pending().get()
                                >
                                    "Create account"
                                </button>
                            </ActionForm>
                        }
                            .into_any()
                    }
                }}

                <p class="login-switch">
                    {move || match mode.get() {
                        AuthMode::SignIn => {
                            view! {
                                "No account yet? "
                                <button class="link-button" on:click=move |_| mode.set(AuthMode::SignUp)>
                                    "Sign up"
                                </button>
                            }
                                .into_any()
                        }
                        AuthMode::SignUp => {
                            view! {
                                "Already registered? "
                                <button class="link-button" on:click=move |_| mode.set(AuthMode::SignIn)>
                                    "Sign in"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </p>
            </div>
        </div>
    }
}

#[component]
fn CredentialFields() -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="email">"Email"</label>
            <input type="email" id="email" name="email" autocomplete="email" required />
        </div>
        <div class="form-group">
            <label for="password">"Password"</label>
            <input
                type="password"
                id="password"
                name="password"
                autocomplete="current-password"
                minlength="6"
                required
            />
        </div>
    }
}
