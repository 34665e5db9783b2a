use serde::{Deserialize, Serialize};

/// URL templates for company logos. `{slug}` is the lower-cased company
/// name without spaces; `{company}` is the raw name and `{initial}` its
/// first character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub logo_template: String,
    pub fallback_template: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            logo_template: "https://logo.clearbit.com/{slug}.com".to_string(),
            fallback_template: "https://avatar.vercel.sh/{company}.png?text={initial}".to_string(),
        }
    }
}

impl LogoConfig {
    pub fn logo_url(&self, company: &str) -> String {
        if company.is_empty() {
            return self.fallback_url(company);
        }
        let slug = company.to_lowercase().replace(' ', "");
        self.logo_template.replace("{slug}", &slug)
    }

    /// Source to switch to after `current` failed to load. The placeholder
    /// is tried once; an empty company already starts on it.
    pub fn next_logo_src(&self, company: &str, current: &str) -> Option<String> {
        if company.is_empty() {
            return None;
        }
        let fallback = self.fallback_url(company);
        (current != fallback).then_some(fallback)
    }

    pub fn fallback_url(&self, company: &str) -> String {
        let initial = company.chars().next().map(String::from).unwrap_or_else(|| "?".to_string());
        self.fallback_template
            .replace("{company}", company)
            .replace("{initial}", &initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_url_uses_compacted_lowercase_name() {
        let logos = LogoConfig::default();
        assert_eq!(logos.logo_url("Acme Corp"), "https://logo.clearbit.com/acmecorp.com");
        assert_eq!(logos.logo_url("OpenAI"), "https://logo.clearbit.com/openai.com");
    }

    #[test]
    fn fallback_uses_first_letter() {
        let logos = LogoConfig::default();
        assert_eq!(logos.fallback_url("Globex"), "https://avatar.vercel.sh/Globex.png?text=G");
    }

    #[test]
    fn failed_logo_swaps_to_placeholder_once() {
        let logos = LogoConfig::default();
        let first = logos.logo_url("Globex");
        let fallback = logos.next_logo_src("Globex", &first).unwrap();
        assert_eq!(fallback, "https://avatar.vercel.sh/Globex.png?text=G");
        assert_eq!(logos.next_logo_src("Globex", &fallback), None);
    }

    #[test]
    fn empty_company_never_swaps() {
        let logos = LogoConfig::default();
        assert_eq!(logos.next_logo_src("", &logos.logo_url("")), None);
    }

    #[test]
    fn empty_company_goes_straight_to_placeholder() {
        let logos = LogoConfig::default();
        assert_eq!(logos.logo_url(""), "https://avatar.vercel.sh/.png?text=?");
        assert_eq!(logos.fallback_url(""), logos.logo_url(""));
    }
}
