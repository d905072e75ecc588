use crate::t;

/// Display strings for the hero. Fields are rendered as given; empty ones
/// render empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroContent {
    pub top_text: String,
    pub main_title: String,
    pub subtitle: String,
    pub cta_button_text: String,
    pub brand_name: String,
    /// Image source overriding the bundled logo.
    pub image: Option<String>,
}

impl HeroContent {
    /// Bundle for the active language.
    pub fn localized() -> Self {
        crate::i18n::init();
        Self {
            top_text: t!("hero-top-text"),
            main_title: t!("hero-main-title"),
            subtitle: t!("hero-subtitle"),
            cta_button_text: t!("hero-cta-text"),
            brand_name: t!("brand-name"),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_bundle_is_filled() {
        let _guard = crate::i18n::language_lock();
        let content = HeroContent::localized();
        assert!(!content.main_title.is_empty());
        assert!(!content.cta_button_text.is_empty());
        assert!(!content.brand_name.is_empty());
        assert_eq!(content.image, None);
    }

    #[test]
    fn localized_bundle_follows_language() {
        let _guard = crate::i18n::language_lock();
        crate::i18n::init();

        crate::i18n::set_language("ar-EG").unwrap();
        let arabic = HeroContent::localized();
        crate::i18n::set_language(crate::i18n::FALLBACK_LANGUAGE).unwrap();
        let english = HeroContent::localized();

        assert_ne!(arabic.main_title, english.main_title);
    }
}
