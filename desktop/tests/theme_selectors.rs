#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop launcher embeds `ui/assets/theme/main.css`, so a renamed or dropped
selector only shows up as broken styling at runtime. These tests fail early
instead.

If you intentionally rename or remove a selector, update the component markup
and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors the shared components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    ".dark {",
    "body {",
    ".app-shell",
    ".page {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Hero structure
    ".hero {",
    ".hero__backdrop",
    ".hero__tint",
    ".hero__grid",
    ".hero__section",
    ".hero__layout",
    ".hero__logo",
    ".hero__glow",
    ".hero__underline",
    ".hero__badge",
    ".hero__title",
    ".hero__subtitle",
    ".hero__button",
    ".hero__button-sheen",
    ".hero__button-label",
    ".hero__cta-note",
    // Sign-up & courses
    ".signup__card",
    ".signup__input",
    ".page-courses__empty",
    // Responsive blocks
    "@media (min-width: 1024px)",
    "@media (max-width: 720px)",
];

/// Decorative position modifiers emitted by the hero model.
const DECOR_MODIFIERS: &[&str] = &[
    ".hero__shape--top-left",
    ".hero__shape--top-right",
    ".hero__shape--bottom-left",
    ".hero__spark--top-right",
    ".hero__spark--bottom-left",
    ".hero__spark--bottom-right",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .chain(DECOR_MODIFIERS)
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn hero_decor_modifiers_match_model() {
    for class in ui::hero::DECOR_SHAPES.iter().chain(ui::hero::DECOR_SPARKS.iter()) {
        let selector = format!(".{class}");
        assert!(
            DECOR_MODIFIERS.contains(&selector.as_str()),
            "hero model emits `{class}` but the lint does not check it"
        );
    }
}

#[test]
fn every_hero_variant_is_styled() {
    // Each themed part needs a rule for both variants.
    for part in ["__backdrop", "__tint", "__shape", "__glow", "__underline", "__spark", "__subtitle"] {
        for variant in ["hero--light", "hero--dark"] {
            let selector = format!(".{variant} .hero{part}");
            assert!(
                THEME_CSS.contains(&selector),
                "Missing themed rule `{selector}`"
            );
        }
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
