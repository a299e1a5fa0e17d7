use i18nrs::yew::use_translation;
use yew::use_state_eq;
use yew::{Callback, function_component, html, use_effect_with};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language;

#[function_component(LanguageSelector)]
pub fn language_selector() -> yew::Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    let language_label = i18n.t("nav.language");

    let language_state_for_effect = language_state.clone();
    use_effect_with(i18n, move |i18n| {
        language_state_for_effect.set(i18n.get_current_language().to_string());
        || ()
    });

    let on_click = {
        let language_state = language_state.clone();
        Callback::from(move |value: String| {
            log::debug!("switching language to {value}");
            language_state.set(value.clone());
            set_language.emit(value);
        })
    };

    let lang_code = &*language_state;
    let active_lang_flag = language::get_language_info(lang_code.as_str())
        .map_or("🌐", |info| info.flag);
    let supported = language::supported_languages();
    let mut languages: Vec<_> = supported.values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle" aria-label={language_label}>
                <span>{active_lang_flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-44">
            {
                for languages.into_iter().map(|info| {
                    html! {
                        <LanguageSelectorButton
                            is_active={info.code == lang_code}
                            info={info.clone()}
                            on_click={on_click.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
