//! Translations for the header and page chrome.
//!
//! Messages live in `i18n/<locale>/feedline-ui.ftl` (fallback `en-US`) and are
//! embedded into the binary. Lookups go through [`t!`](crate::t), which checks
//! message IDs against the fallback file at compile time. The requested
//! locale comes from `navigator.languages` on the web and from the OS
//! elsewhere; the header's locale switcher can change it at runtime.
use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Looks a message up in [`LOADER`]: `t!("feed-title")`,
/// `t!("listing-profile-heading", user = name)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must equal the package name: `fl!` resolves `i18n/en-US/{DOMAIN}.ftl` from it.
const DOMAIN: &str = "feedline-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Fluent wraps interpolated values in bidi isolation marks by default.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Selects the requested locales on first call; later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Tags that do not parse leave the current language in place.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(locale) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparsable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[locale])?;
    Ok(())
}

/// Language currently driving lookups (first entry of the loader's chain).
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Locales embedded in this build, sorted.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|file| file.split_once('/').map(|(locale, _)| locale.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
