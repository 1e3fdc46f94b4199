use std::fmt;
use std::str::FromStr;

use log::{warn, Level};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;
use yew_router::prelude::*;

/// How many FAQ answers may be visible at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccordionMode {
    MultiOpen,
    SingleOpen,
}

/// What activating a navigation target does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavMode {
    /// Smooth-scroll the current page to the target's anchor.
    Scroll,
    /// Push the target's route through the router.
    Route,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseModeError {
    kind: &'static str,
    value: String,
}

impl FromStr for AccordionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multi-open" | "multi" => Ok(AccordionMode::MultiOpen),
            "single-open" | "single" => Ok(AccordionMode::SingleOpen),
            _ => Err(ParseModeError { kind: "accordion mode", value: s.to_string() }),
        }
    }
}

impl FromStr for NavMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scroll" => Ok(NavMode::Scroll),
            "route" => Ok(NavMode::Route),
            _ => Err(ParseModeError { kind: "navigation mode", value: s.to_string() }),
        }
    }
}

impl fmt::Display for AccordionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccordionMode::MultiOpen => f.write_str("multi-open"),
            AccordionMode::SingleOpen => f.write_str("single-open"),
        }
    }
}

/// Raw `?accordion=..&nav=..` query values. Kept as strings so a bad value
/// only discards itself instead of the whole query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accordion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.accordion.is_none() && self.nav.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub accordion: AccordionMode,
    pub nav: NavMode,
}

impl PageConfig {
    /// Single-page landing: scroll navigation, any number of answers open.
    pub const HOME: PageConfig = PageConfig {
        accordion: AccordionMode::MultiOpen,
        nav: NavMode::Scroll,
    };

    /// Standalone about page: routed navigation, one answer at a time.
    pub const ABOUT: PageConfig = PageConfig {
        accordion: AccordionMode::SingleOpen,
        nav: NavMode::Route,
    };

    pub fn with_overrides(self, overrides: &ConfigOverrides) -> PageConfig {
        PageConfig {
            accordion: overrides
                .accordion
                .as_deref()
                .and_then(|value| value.parse().ok())
                .unwrap_or(self.accordion),
            nav: overrides
                .nav
                .as_deref()
                .and_then(|value| value.parse().ok())
                .unwrap_or(self.nav),
        }
    }
}

/// Overrides present in the current query string.
#[hook]
pub fn use_config_overrides() -> ConfigOverrides {
    use_location()
        .and_then(|location| location.query::<ConfigOverrides>().ok())
        .unwrap_or_default()
}

/// Resolves the page configuration from `defaults` and the current query string.
#[hook]
pub fn use_page_config(defaults: PageConfig) -> PageConfig {
    let overrides = use_config_overrides();
    defaults.with_overrides(&overrides)
}

/// Navigates to `route`, keeping the current overrides in the query string so
/// the next page is configured the same way.
pub fn push_keeping_overrides<R: Routable>(
    navigator: &Navigator,
    route: &R,
    overrides: &ConfigOverrides,
) {
    if overrides.is_empty() {
        navigator.push(route);
        return;
    }
    if let Err(e) = navigator.push_with_query(route, overrides) {
        warn!("Could not carry page settings over: {:?}", e);
        navigator.push(route);
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Navigation and FAQ events show up while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(name: &str) -> String {
    format!("/assets/{}", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_accordion_modes() {
        assert_eq!("multi-open".parse::<AccordionMode>(), Ok(AccordionMode::MultiOpen));
        assert_eq!("Single-Open".parse::<AccordionMode>(), Ok(AccordionMode::SingleOpen));
        assert_eq!("single".parse::<AccordionMode>(), Ok(AccordionMode::SingleOpen));
        assert!("both".parse::<AccordionMode>().is_err());
    }

    #[test]
    fn parse_error_names_the_value() {
        let err = "sideways".parse::<NavMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown navigation mode 'sideways'");
    }

    #[test]
    fn modes_deserialize_from_kebab_case() {
        let mode: AccordionMode = serde_json::from_value(json!("single-open")).unwrap();
        assert_eq!(mode, AccordionMode::SingleOpen);
        let nav: NavMode = serde_json::from_value(json!("route")).unwrap();
        assert_eq!(nav, NavMode::Route);
    }

    #[test]
    fn overrides_replace_defaults() {
        let overrides: ConfigOverrides =
            serde_json::from_value(json!({ "accordion": "single-open", "nav": "route" })).unwrap();
        assert_eq!(
            PageConfig::HOME.with_overrides(&overrides),
            PageConfig { accordion: AccordionMode::SingleOpen, nav: NavMode::Route }
        );
    }

    #[test]
    fn bad_override_keeps_its_default_only() {
        let overrides: ConfigOverrides =
            serde_json::from_value(json!({ "accordion": "everything", "nav": "scroll" })).unwrap();
        let config = PageConfig::ABOUT.with_overrides(&overrides);
        assert_eq!(config.accordion, AccordionMode::SingleOpen);
        assert_eq!(config.nav, NavMode::Scroll);
    }

    #[test]
    fn empty_query_keeps_defaults() {
        let overrides: ConfigOverrides = serde_json::from_value(json!({})).unwrap();
        assert_eq!(PageConfig::HOME.with_overrides(&overrides), PageConfig::HOME);
    }

    #[test]
    fn overrides_survive_a_routed_hop() {
        let overrides = ConfigOverrides {
            accordion: Some("single-open".to_string()),
            nav: Some("route".to_string()),
        };
        // What gets written into the next URL is what the next page reads back.
        let carried: ConfigOverrides =
            serde_json::from_value(serde_json::to_value(&overrides).unwrap()).unwrap();
        assert_eq!(carried, overrides);
        for defaults in [PageConfig::HOME, PageConfig::ABOUT] {
            assert_eq!(
                defaults.with_overrides(&carried),
                PageConfig { accordion: AccordionMode::SingleOpen, nav: NavMode::Route }
            );
        }
    }

    #[test]
    fn absent_overrides_are_not_written() {
        let partial = ConfigOverrides { accordion: None, nav: Some("route".to_string()) };
        assert_eq!(serde_json::to_value(&partial).unwrap(), json!({ "nav": "route" }));
        assert!(!partial.is_empty());
        assert!(ConfigOverrides::default().is_empty());
        assert_eq!(serde_json::to_value(ConfigOverrides::default()).unwrap(), json!({}));
    }

    #[test]
    fn asset_urls_live_under_assets() {
        assert_eq!(asset_url("robot.svg"), "/assets/robot.svg");
    }
}
