use crate::{
    api::StorefrontClient,
    components::{CredentialsForm, DemoCredentials},
    error::ApiError,
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::Session;
use shared::models::{AuthResponse, LoginRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::{Link, Navigator};
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

/// Store the new session and move to the page matching the user's role.
pub(crate) fn complete_sign_in(
    auth: AuthResponse,
    dispatch: &Dispatch<AppState>,
    navigator: Option<&Navigator>,
) {
    let session = Session::from(auth);
    let landing: MainRoute = session.landing().into();
    if let Some(user) = session.user() {
        log::info!("signed in as {}", user.badge());
    }
    dispatch.set(AppState::signed_in(session));
    if let Some(nav) = navigator {
        nav.push(&landing);
    }
}

/// Message shown under the form for a failed sign-in.
pub(crate) fn failure_message(err: &ApiError, fallback: &str) -> String {
    if !err.is_rejection() {
        log::error!("sign-in request failed: {err}");
    }
    err.user_message(fallback)
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_state(LoginRequest::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        let fallback = i18n.t("login.error");
        Callback::from(move |()| {
            let request = (*form).clone();
            error.set(None);
            loading.set(true);
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let fallback = fallback.clone();
            spawn_local(async move {
                match StorefrontClient::shared().login(&request).await {
                    Ok(auth) => complete_sign_in(auth, &dispatch, navigator.as_ref()),
                    Err(err) => {
                        error.set(Some(failure_message(&err, &fallback)));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_change = {
        let form = form.clone();
        Callback::from(move |value: LoginRequest| form.set(value))
    };

    html! {
        <div class="flex items-center justify-center">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-bold">{i18n.t("login.title")}</h2>
                <div class="card bg-base-100 border border-base-300">
                    <div class="card-body">
                        <CredentialsForm
                            value={(*form).clone()}
                            on_change={on_change.clone()}
                            {on_submit}
                            error={(*error).clone()}
                            busy={*loading}
                            submit_label="login.submit"
                            busy_label="login.submitting"
                        />
                        <DemoCredentials on_pick={on_change} />
                        <p class="mt-4 text-center text-sm">
                            {i18n.t("login.no_account")}{" "}
                            <Link<MainRoute> to={MainRoute::Register} classes="link">
                                {i18n.t("login.register")}
                            </Link<MainRoute>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
