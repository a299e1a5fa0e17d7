use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="text-center py-12 bg-base-100 rounded-lg border border-base-300">
            <span class="loading loading-dots loading-md"></span>
            <p class="text-base-content/60">{props.label.clone()}</p>
        </div>
    }
}
