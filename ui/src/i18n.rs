//! Internationalization (i18n) support for `credentials-ui`.
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
//!   en-US/credentials-ui.ftl   (fallback/reference)
//!   es-ES/credentials-ui.ftl   (additional locale)
//!   fr-FR/credentials-ui.ftl   (additional locale)
//! ```
//!
//! Record views do not reach for the global loader. They take a [`Catalog`],
//! a gettext-style lookup from English source text to the localized template,
//! so tests and embedders can swap the lookup out. Chrome such as the navbar
//! uses the shorter `t!` macro.
//!
//! Templates keep their `{name}` / `{}` placeholders after lookup; the FTL
//! files spell literal braces as `{"{"}` and `{"}"}`.
use std::rc::Rc;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-records")
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
pub(crate) const DOMAIN: &str = "credentials-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Source text → Fluent message id for every string the record views translate.
pub const MESSAGES: &[(&str, &str)] = &[
    ("Back to My Records", "record-back-link"),
    ("Share", "record-share"),
    ("{program_name} Record", "record-title"),
    ("{platform} | {school}", "record-school"),
    ("Name", "learner-name"),
    ("{platform} User ID", "learner-user-id"),
    ("Email", "learner-email"),
    ("Name: {}", "learner-name-folded"),
    ("{platform} User ID: {}", "learner-user-id-folded"),
    ("Email: {}", "learner-email-folded"),
    ("Course Name", "grade-course-name"),
    ("School", "grade-school"),
    ("Verified Attempts", "grade-attempts"),
    ("Course ID", "grade-course-id"),
    ("Issue Date", "grade-issue-date"),
    ("Highest Grade Earned", "grade-percent"),
    ("Letter Grade", "grade-letter"),
    ("Verified Attempts: {}", "grade-attempts-folded"),
    ("Course ID: {}", "grade-course-id-folded"),
    ("Start Date: {}", "grade-start-folded"),
    ("End Date: {}", "grade-end-folded"),
    ("Percent Grade: {}", "grade-percent-folded"),
    ("Letter Grade: {}", "grade-letter-folded"),
    ("Share this program record", "share-title"),
    (
        "Anyone with this link can view the program record of {username}.",
        "share-description",
    ),
    ("Public link", "share-link-label"),
    ("Copy Link", "share-copy"),
    ("Copied!", "share-copied"),
    ("Close", "share-close"),
];

/// Message id for a source string, if it is part of the catalog.
pub fn message_id(source: &str) -> Option<&'static str> {
    MESSAGES
        .iter()
        .find(|(text, _)| *text == source)
        .map(|(_, id)| *id)
}

/// Gettext-style text lookup handed to views.
///
/// Equality is identity of the underlying lookup, which is what Dioxus needs
/// to decide whether props changed.
#[derive(Clone)]
pub struct Catalog {
    lookup: Rc<dyn Fn(&str) -> String>,
}

impl Catalog {
    pub fn new(lookup: impl Fn(&str) -> String + 'static) -> Self {
        Self {
            lookup: Rc::new(lookup),
        }
    }

    /// Returns the English source text unchanged.
    pub fn source() -> Self {
        Self::new(str::to_string)
    }

    /// Looks strings up in the embedded Fluent bundles for the active language.
    /// Unknown source strings pass through untranslated.
    pub fn fluent() -> Self {
        init();
        Self::new(|source| match message_id(source) {
            Some(id) => LOADER.get(id),
            None => {
                debug!("[i18n] no message id for {source:?}");
                source.to_string()
            }
        })
    }

    pub fn gettext(&self, source: &str) -> String {
        (self.lookup)(source)
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.lookup, &other.lookup)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
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
