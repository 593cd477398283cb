//! Server-rendered HTML pages.

pub mod detail;
pub mod home;
pub mod layout;

use std::str::FromStr;

use strum_macros::{Display, EnumString, IntoStaticStr};
use utils::html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Theme requested by a query parameter, or `fallback` when absent or unknown
    pub fn from_param(raw: Option<&str>, fallback: Theme) -> Self {
        raw.and_then(|value| Theme::from_str(value).ok())
            .unwrap_or(fallback)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Per-request rendering context: the active theme and the current location,
/// so links can carry the theme and the toggle can return to the same page
#[derive(Debug, Clone)]
pub struct PageContext {
    pub theme: Theme,
    path: String,
    params: Vec<(&'static str, String)>,
}

impl PageContext {
    pub fn new(theme: Theme, path: impl Into<String>) -> Self {
        Self {
            theme,
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Link to `path` that keeps the active theme
    pub fn link(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut all = params.to_vec();
        all.push(("theme", self.theme.as_str()));
        html::href(path, &all)
    }

    /// Link back to the current page with the other theme selected
    pub fn theme_toggle_link(&self) -> String {
        let mut all: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        all.push(("theme", self.theme.toggled().as_str()));
        html::href(&self.path, &all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_param_falls_back() {
        assert_eq!(Theme::from_param(Some("light"), Theme::Dark), Theme::Light);
        assert_eq!(Theme::from_param(Some("sepia"), Theme::Light), Theme::Light);
        assert_eq!(Theme::from_param(None, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_links_carry_theme() {
        let ctx = PageContext::new(Theme::Light, "/");
        assert_eq!(ctx.link("/pattern/3", &[]), "/pattern/3?theme=light");
        assert_eq!(
            ctx.link("/", &[("category", "Async Patterns"), ("q", "")]),
            "/?category=Async+Patterns&theme=light"
        );
    }

    #[test]
    fn test_toggle_keeps_current_location() {
        let ctx = PageContext::new(Theme::Dark, "/").with_param("q", "map");
        assert_eq!(ctx.theme_toggle_link(), "/?q=map&theme=light");
    }
}
