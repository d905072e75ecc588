//! Internationalization (i18n) support for `darsak-ui`.
//!
//! The localized strings are also the default content bundle for the hero
//! section, so every visible marketing line lives in the `.ftl` files.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/darsak-ui.ftl   (fallback/reference)
//!   ar-EG/darsak-ui.ftl   (primary audience, right-to-left)
//! ```
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let home_label = t!("nav-home");
//! ```
//!
//! To add a new locale, copy `en-US/darsak-ui.ftl` to
//! `i18n/<lang-id>/darsak-ui.ftl`, translate the values and register the file
//! in `tests/i18n_missing_keys.rs`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{CharacterDirection, LanguageIdentifier};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("courses-welcome", name = "Amina")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "darsak-ui";

/// Tag every loader falls back to when a lookup or selection fails.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Held by tests that switch or depend on the global language, so they do not
/// race each other.
#[cfg(test)]
pub(crate) fn language_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language currently used for lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Value for the HTML `dir` attribute matching the active language.
pub fn text_direction() -> &'static str {
    let rtl = LOADER
        .current_languages()
        .first()
        .is_some_and(|lang| matches!(lang.character_direction(), CharacterDirection::RTL));
    if rtl {
        "rtl"
    } else {
        "ltr"
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
