use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::{Access, GuardOutcome, LoginDestination};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/products/:id")]
    ProductDetail { id: i64 },
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// What the visitor needs before this page renders.
    pub fn access(&self) -> Access {
        match self {
            Self::Admin => Access::Admin,
            _ => Access::Public,
        }
    }
}

impl From<LoginDestination> for MainRoute {
    fn from(destination: LoginDestination) -> Self {
        match destination {
            LoginDestination::Admin => Self::Admin,
            LoginDestination::Home => Self::Home,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let route = props.route.clone();

    match session.guard(route.access()) {
        GuardOutcome::Allow => {}
        GuardOutcome::RedirectLogin => {
            return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
        }
        GuardOutcome::RedirectHome => {
            return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
        }
    }

    let page = match route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::ProductDetail { id } => html! { <ProductPage {id} /> },
        MainRoute::Login | MainRoute::Register if session.is_authenticated() => {
            let landing: MainRoute = session.landing().into();
            return html! { <Redirect<MainRoute> to={landing} /> };
        }
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Admin => html! { <AdminPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <Layout current_route={route}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route: {route:?}");
    html! { <MainRouteView {route} /> }
}
