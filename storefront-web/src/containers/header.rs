use crate::{
    components::{language_selector::LanguageSelector, nav_link::NavLink},
    config::FrontendConfig,
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Top navigation. The admin link only shows for admin sessions.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_selector(|state: &AppState| state.session.clone());
    let dispatch = use_dispatch::<AppState>();
    let navigator = use_navigator();
    let store_name = FrontendConfig::new().store_name;

    let on_logout = {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            log::info!("signing out");
            dispatch.set(AppState::signed_out());
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Login);
            }
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-100 border-b border-base-300 px-4">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-xl gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineShoppingBag} class="w-6 h-6" />
                {store_name}
            </Link<MainRoute>>
            <div class="flex gap-4 items-center">
                <ul class="menu menu-horizontal gap-1">
                    <NavLink
                        route={MainRoute::Home}
                        label="nav.products"
                        current_route={props.current_route.clone()}
                    />
                    if session.is_admin() {
                        <NavLink
                            route={MainRoute::Admin}
                            label="nav.admin"
                            current_route={props.current_route.clone()}
                        />
                    }
                </ul>
                {
                    session.user().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                                {i18n.t("nav.login")}
                            </Link<MainRoute>>
                        },
                        |user| html! {
                            <div class="flex items-center gap-4">
                                <span class="text-sm text-base-content/70">{user.badge()}</span>
                                <button class="btn btn-ghost btn-sm text-error" onclick={on_logout.clone()}>
                                    {i18n.t("nav.logout")}
                                </button>
                            </div>
                        },
                    )
                }
                <LanguageSelector />
            </div>
        </nav>
    }
}
