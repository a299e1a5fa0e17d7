use i18nrs::yew::use_translation;
use shared::models::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ErrorAlert;

#[derive(Properties, PartialEq)]
pub struct CredentialsFormProps {
    pub value: LoginRequest,
    pub on_change: Callback<LoginRequest>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub busy: bool,
    /// Translation key of the idle button label.
    pub submit_label: AttrValue,
    /// Translation key of the label shown while the request runs.
    pub busy_label: AttrValue,
}

/// Controlled email/password form shared by the login and register pages.
#[function_component(CredentialsForm)]
pub fn credentials_form(props: &CredentialsFormProps) -> Html {
    let (i18n, ..) = use_translation();

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let on_email_change = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(LoginRequest {
                    email: input.value(),
                    ..value.clone()
                });
            }
        })
    };

    let on_password_change = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(LoginRequest {
                    password: input.value(),
                    ..value.clone()
                });
            }
        })
    };

    let disable_submit = props.busy || !props.value.is_complete();

    html! {
        <form class="space-y-4" onsubmit={onsubmit}>
            if let Some(message) = &props.error {
                <ErrorAlert message={message.clone()} />
            }
            <div class="form-control">
                <label class="label" for="email">
                    <span class="label-text">{i18n.t("login.email")}</span>
                </label>
                <input
                    id="email"
                    class="input input-bordered w-full"
                    type="email"
                    required=true
                    value={props.value.email.clone()}
                    oninput={on_email_change}
                />
            </div>
            <div class="form-control">
                <label class="label" for="password">
                    <span class="label-text">{i18n.t("login.password")}</span>
                </label>
                <input
                    id="password"
                    class="input input-bordered w-full"
                    type="password"
                    required=true
                    value={props.value.password.clone()}
                    oninput={on_password_change}
                />
            </div>
            <button class="btn btn-neutral w-full" type="submit" disabled={disable_submit}>
                {
                    if props.busy {
                        i18n.t(&props.busy_label)
                    } else {
                        i18n.t(&props.submit_label)
                    }
                }
            </button>
        </form>
    }
}
