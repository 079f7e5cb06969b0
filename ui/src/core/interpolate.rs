//! Placeholder substitution for localized templates.
//!
//! Translators see templates such as `"{platform} User ID"` or `"Name: {}"`.
//! Named placeholders are filled from a slice of `(name, value)` pairs, the
//! bare `{}` placeholder from a single positional value.

/// Replace every `{name}` whose name appears in `values`.
///
/// Unknown placeholders and stray braces are copied through untouched, and
/// substituted values are never scanned again.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        if name.contains('{') {
            // Nested opener: emit this brace and retry from the inner one.
            out.push('{');
            rest = after;
            continue;
        }

        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) if !name.is_empty() => out.push_str(value),
            _ => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Replace every positional `{}` with `value`.
pub fn interpolate_positional(template: &str, value: &str) -> String {
    template.replace("{}", value)
}
