//! Presentation facets for each air quality level.
//!
//! Badges, map markers, and chart legends all style themselves from these
//! lookups. Every function is an exhaustive match over the closed level
//! enum; there is no fallback for an "unknown" level.
//!
//! Color tokens are Tailwind utility classes. The border variant reuses the
//! fill's severity color, so there are four colors in total, not eight.

use super::levels::AirQualityLevel;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Language used for labels and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    En,
    /// Brazilian Portuguese, the dashboard's native language.
    #[default]
    PtBr,
}

// ---------------------------------------------------------------------------
// Color tokens
// ---------------------------------------------------------------------------

/// Background fill class for badges and list markers.
pub fn color_token(level: AirQualityLevel) -> &'static str {
    match level {
        AirQualityLevel::Good => "bg-green-500",
        AirQualityLevel::Moderate => "bg-yellow-500",
        AirQualityLevel::Unhealthy => "bg-orange-500",
        AirQualityLevel::Hazardous => "bg-purple-900",
    }
}

/// Border class; same severity color as `color_token`.
pub fn border_color_token(level: AirQualityLevel) -> &'static str {
    match level {
        AirQualityLevel::Good => "border-green-500",
        AirQualityLevel::Moderate => "border-yellow-500",
        AirQualityLevel::Unhealthy => "border-orange-500",
        AirQualityLevel::Hazardous => "border-purple-900",
    }
}

/// Foreground text class, a darker shade of the severity color.
pub fn text_color_token(level: AirQualityLevel) -> &'static str {
    match level {
        AirQualityLevel::Good => "text-green-700",
        AirQualityLevel::Moderate => "text-yellow-700",
        AirQualityLevel::Unhealthy => "text-orange-700",
        AirQualityLevel::Hazardous => "text-purple-900",
    }
}

/// Hex fill for map markers, matching the `color_token` palette.
pub fn marker_color_hex(level: AirQualityLevel) -> &'static str {
    match level {
        AirQualityLevel::Good => "#22c55e",
        AirQualityLevel::Moderate => "#eab308",
        AirQualityLevel::Unhealthy => "#f97316",
        AirQualityLevel::Hazardous => "#581c87",
    }
}

// ---------------------------------------------------------------------------
// Labels and descriptions
// ---------------------------------------------------------------------------

/// Short English label.
pub fn label(level: AirQualityLevel) -> &'static str {
    label_in(level, Locale::En)
}

/// Short label in the requested locale.
pub fn label_in(level: AirQualityLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::En, AirQualityLevel::Good) => "Good",
        (Locale::En, AirQualityLevel::Moderate) => "Moderate",
        (Locale::En, AirQualityLevel::Unhealthy) => "Unhealthy",
        (Locale::En, AirQualityLevel::Hazardous) => "Hazardous",
        (Locale::PtBr, AirQualityLevel::Good) => "Bom",
        (Locale::PtBr, AirQualityLevel::Moderate) => "Moderado",
        (Locale::PtBr, AirQualityLevel::Unhealthy) => "Ruim",
        (Locale::PtBr, AirQualityLevel::Hazardous) => "Péssimo",
    }
}

/// One-sentence English health guidance.
pub fn description(level: AirQualityLevel) -> &'static str {
    description_in(level, Locale::En)
}

/// One-sentence health guidance in the requested locale.
///
/// Urgency escalates with severity: `Unhealthy` addresses sensitive groups,
/// `Hazardous` is an emergency telling everyone to avoid outdoor activity.
pub fn description_in(level: AirQualityLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::En, AirQualityLevel::Good) => {
            "Air quality is satisfactory and air pollution poses little or no risk."
        }
        (Locale::En, AirQualityLevel::Moderate) => {
            "Air quality is acceptable. However, there may be a moderate risk for some people."
        }
        (Locale::En, AirQualityLevel::Unhealthy) => {
            "Members of sensitive groups may experience health effects. \
             The general public is not likely to be affected."
        }
        (Locale::En, AirQualityLevel::Hazardous) => {
            "Health emergency: everyone may experience serious health effects. \
             Avoid all outdoor activities."
        }
        (Locale::PtBr, AirQualityLevel::Good) => {
            "A qualidade do ar é satisfatória e a poluição do ar apresenta pouco ou nenhum risco."
        }
        (Locale::PtBr, AirQualityLevel::Moderate) => {
            "A qualidade do ar é aceitável. No entanto, pode haver um risco moderado para algumas pessoas."
        }
        (Locale::PtBr, AirQualityLevel::Unhealthy) => {
            "Membros de grupos sensíveis podem experimentar efeitos na saúde. \
             O público em geral não é susceptível de ser afetado."
        }
        (Locale::PtBr, AirQualityLevel::Hazardous) => {
            "Emergência de saúde: todos podem experimentar efeitos graves na saúde. \
             Evite atividades ao ar livre."
        }
    }
}

// ---------------------------------------------------------------------------
// Bundled view
// ---------------------------------------------------------------------------

/// All presentation facets of one level, as served to legend renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelPresentation {
    pub level: AirQualityLevel,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub marker_color: &'static str,
}

impl LevelPresentation {
    pub fn for_level(level: AirQualityLevel, locale: Locale) -> Self {
        Self {
            level,
            label: label_in(level, locale),
            description: description_in(level, locale),
            color: color_token(level),
            border_color: border_color_token(level),
            text_color: text_color_token(level),
            marker_color: marker_color_hex(level),
        }
    }

    /// The full legend, least severe level first.
    pub fn table(locale: Locale) -> Vec<Self> {
        AirQualityLevel::ALL
            .into_iter()
            .map(|level| Self::for_level(level, locale))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_color_tokens_match_dashboard_palette() {
        assert_eq!(color_token(AirQualityLevel::Good), "bg-green-500");
        assert_eq!(color_token(AirQualityLevel::Moderate), "bg-yellow-500");
        assert_eq!(color_token(AirQualityLevel::Unhealthy), "bg-orange-500");
        assert_eq!(color_token(AirQualityLevel::Hazardous), "bg-purple-900");
    }

    #[test]
    fn test_each_level_has_a_distinct_color() {
        let fills: HashSet<_> = AirQualityLevel::ALL.iter().map(|l| color_token(*l)).collect();
        let markers: HashSet<_> = AirQualityLevel::ALL.iter().map(|l| marker_color_hex(*l)).collect();
        assert_eq!(fills.len(), 4);
        assert_eq!(markers.len(), 4);
    }

    #[test]
    fn test_border_reuses_fill_severity_color() {
        for level in AirQualityLevel::ALL {
            let fill = color_token(level).trim_start_matches("bg-");
            let border = border_color_token(level).trim_start_matches("border-");
            assert_eq!(fill, border, "border color for {} should match its fill", level);
        }
    }

    #[test]
    fn test_english_labels() {
        assert_eq!(label(AirQualityLevel::Good), "Good");
        assert_eq!(label(AirQualityLevel::Moderate), "Moderate");
        assert_eq!(label(AirQualityLevel::Unhealthy), "Unhealthy");
        assert_eq!(label(AirQualityLevel::Hazardous), "Hazardous");
    }

    #[test]
    fn test_portuguese_labels() {
        assert_eq!(label_in(AirQualityLevel::Good, Locale::PtBr), "Bom");
        assert_eq!(label_in(AirQualityLevel::Moderate, Locale::PtBr), "Moderado");
        assert_eq!(label_in(AirQualityLevel::Unhealthy, Locale::PtBr), "Ruim");
        assert_eq!(label_in(AirQualityLevel::Hazardous, Locale::PtBr), "Péssimo");
    }

    #[test]
    fn test_descriptions_escalate_in_urgency() {
        assert!(description_in(AirQualityLevel::Good, Locale::PtBr).contains("satisfatória"));
        assert!(description_in(AirQualityLevel::Moderate, Locale::PtBr).contains("aceitável"));
        assert!(description_in(AirQualityLevel::Unhealthy, Locale::PtBr).contains("grupos sensíveis"));
        assert!(description_in(AirQualityLevel::Hazardous, Locale::PtBr).contains("Emergência"));

        assert!(description(AirQualityLevel::Unhealthy).contains("sensitive groups"));
        let hazardous = description(AirQualityLevel::Hazardous);
        assert!(hazardous.contains("emergency"));
        assert!(hazardous.contains("Avoid all outdoor activities"));
    }

    #[test]
    fn test_every_facet_is_non_empty_in_every_locale() {
        for locale in [Locale::En, Locale::PtBr] {
            for entry in LevelPresentation::table(locale) {
                assert!(!entry.label.is_empty());
                assert!(!entry.description.is_empty());
                assert!(!entry.color.is_empty());
                assert!(!entry.border_color.is_empty());
                assert!(!entry.text_color.is_empty());
                assert!(entry.marker_color.starts_with('#'));
            }
        }
    }

    #[test]
    fn test_table_is_ordered_by_severity() {
        let levels: Vec<_> = LevelPresentation::table(Locale::En)
            .into_iter()
            .map(|p| p.level)
            .collect();
        assert_eq!(levels, AirQualityLevel::ALL.to_vec());
    }

    #[test]
    fn test_locale_uses_kebab_case_in_config() {
        let locale: Locale = serde_json::from_str("\"pt-br\"").unwrap();
        assert_eq!(locale, Locale::PtBr);
        assert_eq!(Locale::default(), Locale::PtBr);
    }
}
