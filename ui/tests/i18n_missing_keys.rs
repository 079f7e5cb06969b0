//! Locale parity for the embedded FTL bundles.
//!
//! en-US is the reference bundle. Every other locale must define the same
//! message ids, once each, and keep the `{"{"}name{"}"}` / `{"{"}{"}"}`
//! placeholders the record views fill in after lookup.
//!
//! Adding a locale means adding its file to `BUNDLES`.

use std::collections::{BTreeMap, BTreeSet};

const FALLBACK: &str = "en-US";

const BUNDLES: &[(&str, &str)] = &[
    ("en-US", include_str!("../i18n/en-US/credentials-ui.ftl")),
    ("es-ES", include_str!("../i18n/es-ES/credentials-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/credentials-ui.ftl")),
];

/// One `id = value` definition and the line it came from.
struct Message {
    id: String,
    value: String,
    line: usize,
}

/// Top-level message definitions. Comments, terms, attributes and indented
/// continuation lines are skipped.
fn messages(src: &str) -> Vec<Message> {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.starts_with(char::is_whitespace))
        .filter(|(_, line)| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|(index, line)| {
            let (id, value) = line.split_once('=')?;
            let id = id.trim();
            (!id.is_empty() && !id.contains(char::is_whitespace)).then(|| Message {
                id: id.to_string(),
                value: value.trim().to_string(),
                line: index + 1,
            })
        })
        .collect()
}

fn bundle(locale: &str) -> BTreeMap<String, String> {
    let (_, src) = BUNDLES
        .iter()
        .find(|(name, _)| *name == locale)
        .unwrap_or_else(|| panic!("no bundle for {locale}"));
    messages(src)
        .into_iter()
        .map(|message| (message.id, message.value))
        .collect()
}

/// Sorted placeholder names in a value; the positional `{}` is an empty name.
fn placeholders(value: &str) -> Vec<String> {
    const OPEN: &str = r#"{"{"}"#;
    const CLOSE: &str = r#"{"}"}"#;

    let mut names = Vec::new();
    let mut rest = value;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            break;
        };
        names.push(after[..end].to_string());
        rest = &after[end + CLOSE.len()..];
    }
    names.sort();
    names
}

#[test]
fn every_locale_defines_exactly_the_fallback_ids() {
    let fallback: BTreeSet<String> = bundle(FALLBACK).into_keys().collect();
    assert!(fallback.contains("record-share"), "fallback bundle looks truncated");

    let mut failures = Vec::new();
    for (locale, _) in BUNDLES.iter().filter(|(name, _)| *name != FALLBACK) {
        let ids: BTreeSet<String> = bundle(locale).into_keys().collect();
        let missing: Vec<_> = fallback.difference(&ids).collect();
        let extra: Vec<_> = ids.difference(&fallback).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing {missing:?}"));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} defines ids unknown to {FALLBACK}: {extra:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n  {}\nHint: copy the ids from en-US, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn no_locale_defines_an_id_twice() {
    for (locale, src) in BUNDLES {
        let mut first_seen: BTreeMap<String, usize> = BTreeMap::new();
        for message in messages(src) {
            if let Some(line) = first_seen.insert(message.id.clone(), message.line) {
                panic!(
                    "{locale}: `{}` defined on line {line} and again on line {}",
                    message.id, message.line
                );
            }
        }
    }
}

#[test]
fn translations_keep_placeholders() {
    let fallback = bundle(FALLBACK);
    assert_eq!(
        fallback.get("learner-user-id-folded").map(|v| placeholders(v)),
        Some(vec![String::new(), "platform".to_string()]),
        "fallback folded user id should carry both placeholders"
    );

    let mut failures = Vec::new();
    for (locale, _) in BUNDLES.iter().filter(|(name, _)| *name != FALLBACK) {
        let translated = bundle(locale);
        for (id, value) in &fallback {
            let expected = placeholders(value);
            let actual = translated.get(id).map(|v| placeholders(v)).unwrap_or_default();
            if actual != expected {
                failures.push(format!("{locale} {id}: expected {expected:?}, found {actual:?}"));
            }
        }
    }

    assert!(
        failures.is_empty(),
        "Placeholder mismatches:\n  {}",
        failures.join("\n  ")
    );
}
