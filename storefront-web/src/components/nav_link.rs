use i18nrs::yew::use_translation;
use yew::{AttrValue, Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub route: MainRoute,
    /// Translation key of the link text.
    pub label: AttrValue,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let (i18n, ..) = use_translation();
    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-active"
    } else {
        ""
    };

    html! {
        <li>
            <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "btn-sm", active_route_class)}>
                {i18n.t(&props.label)}
            </Link<MainRoute>>
        </li>
    }
}
