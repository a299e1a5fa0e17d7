use crate::{
    api::StorefrontClient,
    components::CredentialsForm,
    models::app_state::AppState,
    pages::login::{complete_sign_in, failure_message},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::models::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
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
        let fallback = i18n.t("register.error");
        Callback::from(move |()| {
            let LoginRequest { email, password } = (*form).clone();
            let request = RegisterRequest { email, password };
            error.set(None);
            loading.set(true);
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let fallback = fallback.clone();
            spawn_local(async move {
                match StorefrontClient::shared().register(&request).await {
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
                <h2 class="text-center text-3xl font-bold">{i18n.t("register.title")}</h2>
                <div class="card bg-base-100 border border-base-300">
                    <div class="card-body">
                        <CredentialsForm
                            value={(*form).clone()}
                            {on_change}
                            {on_submit}
                            error={(*error).clone()}
                            busy={*loading}
                            submit_label="register.submit"
                            busy_label="register.submitting"
                        />
                        <p class="mt-4 text-center text-sm">
                            {i18n.t("register.have_account")}{" "}
                            <Link<MainRoute> to={MainRoute::Login} classes="link">
                                {i18n.t("register.login")}
                            </Link<MainRoute>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
