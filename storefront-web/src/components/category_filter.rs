use i18nrs::yew::use_translation;
use shared::CategoryFilter;
use shared::models::Category;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CategoryFilterBarProps {
    pub categories: Vec<Category>,
    pub selected: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

/// "All" plus one button per category; the active filter is highlighted.
#[function_component(CategoryFilterBar)]
pub fn category_filter_bar(props: &CategoryFilterBarProps) -> Html {
    let (i18n, ..) = use_translation();

    let button = |filter: CategoryFilter, label: String| {
        let on_select = props.on_select.clone();
        let style = if filter.is_selected(props.selected) {
            "btn-neutral"
        } else {
            "btn-outline"
        };
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-sm", style)}
                onclick={Callback::from(move |_: yew::MouseEvent| on_select.emit(filter))}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="flex gap-2 flex-wrap">
            {button(CategoryFilter::All, i18n.t("catalog.all"))}
            {
                for props.categories.iter().map(|category| {
                    button(CategoryFilter::for_category(category), category.name.clone())
                })
            }
        </div>
    }
}
