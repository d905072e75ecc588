#![cfg(test)]
//! The desktop launcher embeds the shared theme and the navbar stylesheet from
//! `ui/assets`. A broken path or truncated file would only degrade styling at
//! runtime, so check both here.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const HERO_LOGO: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/hero/logo.svg"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-primary", "body {", ".hero--dark", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn navbar_styles_theme_toggle() {
    for token in [".navbar__inner", ".navbar__theme-toggle", ".navbar__locale"] {
        assert!(NAVBAR_CSS.contains(token), "Navbar CSS lacks `{token}`");
    }
}

#[test]
fn hero_logo_is_svg() {
    assert!(HERO_LOGO.trim_start().starts_with("<svg"));
}
