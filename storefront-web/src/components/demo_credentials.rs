use i18nrs::yew::use_translation;
use shared::models::{LoginRequest, UserRole};
use yew::{Callback, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

/// A seeded account the login page offers to prefill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub role: UserRole,
    pub email: &'static str,
    pub password: &'static str,
}

impl DemoAccount {
    pub fn request(self) -> LoginRequest {
        LoginRequest::new(self.email, self.password)
    }

    fn label_key(self) -> &'static str {
        match self.role {
            UserRole::Admin => "demo.admin",
            UserRole::Customer => "demo.customer",
        }
    }

    fn tone(self) -> &'static str {
        match self.role {
            UserRole::Admin => "bg-info/10 border-info/40",
            UserRole::Customer => "bg-success/10 border-success/40",
        }
    }
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        role: UserRole::Admin,
        email: "admin@marketplace.com",
        password: "admin123",
    },
    DemoAccount {
        role: UserRole::Customer,
        email: "cliente@marketplace.com",
        password: "cliente123",
    },
];

#[derive(Properties, PartialEq)]
pub struct DemoCredentialsProps {
    pub on_pick: Callback<LoginRequest>,
}

#[function_component(DemoCredentials)]
pub fn demo_credentials(props: &DemoCredentialsProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="mt-6 pt-6 border-t border-base-300">
            <p class="text-sm font-semibold mb-3 flex items-center gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineKey} class="w-4 h-4" />
                {i18n.t("demo.title")}
            </p>
            <div class="space-y-3">
            {
                for DEMO_ACCOUNTS.into_iter().map(|account| {
                    let on_pick = props.on_pick.clone();
                    html! {
                        <div class={classes!("p-3", "rounded", "border", account.tone())}>
                            <p class="text-xs font-semibold mb-1">{i18n.t(account.label_key())}</p>
                            <p class="text-xs">{format!("Email: {}", account.email)}</p>
                            <p class="text-xs mb-2">{format!("Password: {}", account.password)}</p>
                            <button
                                type="button"
                                class="btn btn-xs btn-primary"
                                onclick={Callback::from(move |_: yew::MouseEvent| on_pick.emit(account.request()))}
                            >
                                {i18n.t("demo.use")}
                            </button>
                        </div>
                    }
                })
            }
            </div>
        </div>
    }
}
