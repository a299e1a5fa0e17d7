use crate::containers::header::Header;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-200 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "w-full",
                "max-w-7xl",
                "mx-auto",
                "px-4",
                "py-12"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{i18n.t("footer.text")}</p>
            </footer>
        </div>
    </>
    }
}
