use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Language picker shown in the header's top-right corner.
///
/// Updates the loader and, if the platform provided one, the global language
/// code signal so every localized view re-renders.
#[component]
pub fn LocaleSwitcher() -> Element {
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if langs().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        div { class: "Header__locale",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("header-language-label")}
            }
            select {
                id: "locale-select",
                value: "{current_lang()}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
