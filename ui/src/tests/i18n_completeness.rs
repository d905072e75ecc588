//! Guards that every `t!("...")` key used in the sources exists in the
//! fallback bundle, and that every locale defines every fallback key.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file name inside each locale folder.
const FTL_FILENAME: &str = "darsak-ui.ftl";

const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Comments, terms (`-` prefix),
/// attributes and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(' ') && !line.starts_with('\t'))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!(...)` calls in `.rs` files under `root`.
///
/// Direct `fl!` usage and computed IDs are not detected.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(NEEDLE) {
            rest = &rest[pos + NEEDLE.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    let referenced = referenced_keys(&crate_root.join("src"));
    let missing_in_fallback: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing_in_fallback.len(),
        missing_in_fallback.join("\n")
    );

    let mut per_locale_missing: HashMap<String, Vec<String>> = HashMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale folder {locale:?} missing {path:?}"));
        let keys = parse_ftl_keys(&content);
        let missing: Vec<String> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (loc, miss) in &per_locale_missing {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }

    let unused: Vec<_> = fallback_keys.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback keys unused in Rust sources: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}

#[test]
fn parser_skips_comments_and_terms() {
    let keys = parse_ftl_keys("# heading\n-brand = Darsak\nhero-title = Hi\n    .attr = x\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["hero-title"]);
}
