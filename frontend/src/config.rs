use std::collections::BTreeMap;

use log::Level;
use serde::Deserialize;
use web_sys::Document;

use crate::error::BehaviorError;
use crate::routes::CourseRoutes;

/// Id of the optional `<script type="application/json">` block a page can
/// use to override any of the settings below.
pub const CONFIG_ELEMENT_ID: &str = "site-behaviors";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub faq_toggle: String,
    pub faq_item: String,
    pub week_toggle: String,
    pub reveal: String,
    pub staggered: String,
    pub card: String,
    pub card_glow: String,
    pub card_heading: String,
    pub know_more: String,
    pub tab_control: String,
    pub tab_panel: String,
    pub nav: String,
    pub nav_link: String,
    pub header: String,
    pub menu_toggle: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            faq_toggle: ".faq-q".into(),
            faq_item: ".faq-item".into(),
            week_toggle: ".week-header".into(),
            reveal: ".reveal".into(),
            staggered: ".course-card, .why-tile, .path-card, .testi-card, .cert-step, .bundle-card"
                .into(),
            card: ".course-card".into(),
            card_glow: ".card-glow".into(),
            card_heading: "h3".into(),
            know_more: ".btn-know".into(),
            tab_control: ".tab-nav button[data-tab]".into(),
            tab_panel: ".tab-panel".into(),
            nav: "nav".into(),
            nav_link: "a".into(),
            header: "header".into(),
            menu_toggle: ".menu-toggle".into(),
        }
    }
}

/// Class names that carry UI state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub open: String,
    pub active: String,
    pub visible: String,
    pub reveal: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            open: "open".into(),
            active: "active".into(),
            visible: "visible".into(),
            reveal: "reveal".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Effects {
    /// Fraction of a reveal target that must be on screen.
    pub reveal_threshold: f64,
    pub stagger_step_ms: u32,
    pub glow_color: String,
    pub header_scroll_threshold: f64,
    pub header_shadow: String,
    pub menu_open_glyph: String,
    pub menu_closed_glyph: String,
    pub tab_panel_prefix: String,
    pub tab_target_attribute: String,
    pub page_extension: String,
    pub default_page: String,
}

impl Default for Effects {
    fn default() -> Self {
        Effects {
            reveal_threshold: 0.08,
            stagger_step_ms: 60,
            glow_color: "rgba(245,158,11,0.1)".into(),
            header_scroll_threshold: 10.0,
            header_shadow: "0 2px 24px rgba(0,0,0,0.4)".into(),
            menu_open_glyph: "✕".into(),
            menu_closed_glyph: "☰".into(),
            tab_panel_prefix: "tab-".into(),
            tab_target_attribute: "data-tab".into(),
            page_extension: ".html".into(),
            default_page: "index".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub markers: Markers,
    pub effects: Effects,
    /// Extra heading -> page routes merged over the built-in table.
    pub course_routes: BTreeMap<String, String>,
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, BehaviorError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Defaults, overridden by the page's config block when it has one.
    /// A malformed block is logged and ignored.
    pub fn from_page(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return SiteConfig::default();
        };

        match SiteConfig::from_json(&text) {
            Ok(config) => {
                log::debug!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Falling back to default config: {}", e);
                SiteConfig::default()
            }
        }
    }

    pub fn course_routes(&self) -> CourseRoutes {
        CourseRoutes::builtin().with_overrides(&self.course_routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.effects.reveal_threshold, 0.08);
        assert_eq!(config.effects.stagger_step_ms, 60);
        assert_eq!(config.effects.header_scroll_threshold, 10.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "selectors": { "header": ".site-header" },
                "effects": { "stagger_step_ms": 90 },
                "course_routes": { "Rust for ML": "course-rust.html" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.selectors.header, ".site-header");
        assert_eq!(config.selectors.faq_toggle, ".faq-q");
        assert_eq!(config.effects.stagger_step_ms, 90);
        assert_eq!(config.markers.open, "open");
        assert_eq!(
            config.course_routes().lookup("rust for ml"),
            Some("course-rust.html")
        );
        assert_eq!(
            config.course_routes().lookup("python for ai"),
            Some("course-python-for-ai.html")
        );
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, BehaviorError::Config(_)));
        assert!(err.to_string().starts_with("invalid site-behaviors config"));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(SiteConfig::from_json(r#"{"effects": {"stagger_step_ms": "fast"}}"#).is_err());
    }
}
