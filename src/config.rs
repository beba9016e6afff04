//! Configuration for the Bootstrap helper layer.
//!
//! Configuration is assembled in two steps: a partial
//! [`BootstrapConfig`] collects explicitly set values (from code, the
//! `BOOTSTRAP_*` environment variables, or a TOML table), then
//! [`BootstrapConfig::freeze`] merges in defaults and produces the
//! immutable [`Settings`] snapshot read for the process lifetime.

use std::env;

use serde::Deserialize;

use crate::error::Error;

const DEFAULT_BTN_STYLE: &str = "primary";
const DEFAULT_BTN_SIZE: &str = "md";
const DEFAULT_ICON_SIZE: &str = "1em";
const DEFAULT_MSG_CATEGORY: &str = "primary";
const DEFAULT_TABLE_VIEW_TITLE: &str = "View";
const DEFAULT_TABLE_EDIT_TITLE: &str = "Edit";
const DEFAULT_TABLE_DELETE_TITLE: &str = "Delete";
const DEFAULT_TABLE_NEW_TITLE: &str = "New";

/// Partial configuration with every option unset by default.
///
/// Unset fields fall back to the documented defaults when frozen;
/// values set by the application are never overwritten.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Serve bundled assets instead of referencing the CDN.
    pub serve_local: Option<bool>,
    /// Bootswatch theme name. Lowercased for URL construction only.
    pub bootswatch_theme: Option<String>,
    /// Default button style class suffix.
    pub btn_style: Option<String>,
    /// Default button size class suffix.
    pub btn_size: Option<String>,
    /// Default icon size.
    pub icon_size: Option<String>,
    /// Default icon color.
    pub icon_color: Option<String>,
    /// Default flash message category.
    pub msg_category: Option<String>,
    /// Label for table view actions.
    pub table_view_title: Option<String>,
    /// Label for table edit actions.
    pub table_edit_title: Option<String>,
    /// Label for table delete actions.
    pub table_delete_title: Option<String>,
    /// Label for table new actions.
    pub table_new_title: Option<String>,
}

impl BootstrapConfig {
    /// Read configuration from the `BOOTSTRAP_*` environment variables.
    ///
    /// Unset variables leave the corresponding option unset. Call after
    /// `dotenvy::dotenv()` to pick up `.env` files.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            serve_local: read_bool("BOOTSTRAP_SERVE_LOCAL")?,
            bootswatch_theme: read_string("BOOTSTRAP_BOOTSWATCH_THEME"),
            btn_style: read_string("BOOTSTRAP_BTN_STYLE"),
            btn_size: read_string("BOOTSTRAP_BTN_SIZE"),
            icon_size: read_string("BOOTSTRAP_ICON_SIZE"),
            icon_color: read_string("BOOTSTRAP_ICON_COLOR"),
            msg_category: read_string("BOOTSTRAP_MSG_CATEGORY"),
            table_view_title: read_string("BOOTSTRAP_TABLE_VIEW_TITLE"),
            table_edit_title: read_string("BOOTSTRAP_TABLE_EDIT_TITLE"),
            table_delete_title: read_string("BOOTSTRAP_TABLE_DELETE_TITLE"),
            table_new_title: read_string("BOOTSTRAP_TABLE_NEW_TITLE"),
        })
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }

    /// Fill every unset option with its default.
    ///
    /// Set-only-if-absent: values already present survive any number of
    /// merges unchanged. Theme and icon color have no default and stay
    /// unset.
    pub fn merge_defaults(mut self) -> Self {
        self.serve_local = self.serve_local.or(Some(false));
        self.btn_style = self.btn_style.or_else(|| Some(DEFAULT_BTN_STYLE.to_string()));
        self.btn_size = self.btn_size.or_else(|| Some(DEFAULT_BTN_SIZE.to_string()));
        self.icon_size = self.icon_size.or_else(|| Some(DEFAULT_ICON_SIZE.to_string()));
        self.msg_category = self
            .msg_category
            .or_else(|| Some(DEFAULT_MSG_CATEGORY.to_string()));
        self.table_view_title = self
            .table_view_title
            .or_else(|| Some(DEFAULT_TABLE_VIEW_TITLE.to_string()));
        self.table_edit_title = self
            .table_edit_title
            .or_else(|| Some(DEFAULT_TABLE_EDIT_TITLE.to_string()));
        self.table_delete_title = self
            .table_delete_title
            .or_else(|| Some(DEFAULT_TABLE_DELETE_TITLE.to_string()));
        self.table_new_title = self
            .table_new_title
            .or_else(|| Some(DEFAULT_TABLE_NEW_TITLE.to_string()));
        self
    }

    /// Merge defaults and produce the immutable settings snapshot.
    ///
    /// Empty strings for the two optional options (theme, icon color)
    /// normalize to unset.
    pub fn freeze(self) -> Settings {
        let merged = self.merge_defaults();
        Settings {
            serve_local: merged.serve_local.unwrap_or(false),
            bootswatch_theme: non_empty(merged.bootswatch_theme),
            btn_style: merged
                .btn_style
                .unwrap_or_else(|| DEFAULT_BTN_STYLE.to_string()),
            btn_size: merged
                .btn_size
                .unwrap_or_else(|| DEFAULT_BTN_SIZE.to_string()),
            icon_size: merged
                .icon_size
                .unwrap_or_else(|| DEFAULT_ICON_SIZE.to_string()),
            icon_color: non_empty(merged.icon_color),
            msg_category: merged
                .msg_category
                .unwrap_or_else(|| DEFAULT_MSG_CATEGORY.to_string()),
            table_view_title: merged
                .table_view_title
                .unwrap_or_else(|| DEFAULT_TABLE_VIEW_TITLE.to_string()),
            table_edit_title: merged
                .table_edit_title
                .unwrap_or_else(|| DEFAULT_TABLE_EDIT_TITLE.to_string()),
            table_delete_title: merged
                .table_delete_title
                .unwrap_or_else(|| DEFAULT_TABLE_DELETE_TITLE.to_string()),
            table_new_title: merged
                .table_new_title
                .unwrap_or_else(|| DEFAULT_TABLE_NEW_TITLE.to_string()),
        }
    }
}

/// Immutable configuration snapshot consumed after startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Serve bundled assets instead of referencing the CDN.
    pub serve_local: bool,
    /// Bootswatch theme name, stored in its original case.
    pub bootswatch_theme: Option<String>,
    /// Default button style class suffix.
    pub btn_style: String,
    /// Default button size class suffix.
    pub btn_size: String,
    /// Default icon size.
    pub icon_size: String,
    /// Default icon color.
    pub icon_color: Option<String>,
    /// Default flash message category.
    pub msg_category: String,
    /// Label for table view actions.
    pub table_view_title: String,
    /// Label for table edit actions.
    pub table_edit_title: String,
    /// Label for table delete actions.
    pub table_delete_title: String,
    /// Label for table new actions.
    pub table_new_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        BootstrapConfig::default().freeze()
    }
}

fn read_string(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn read_bool(key: &str) -> Result<Option<bool>, Error> {
    match env::var(key) {
        Err(_) => Ok(None),
        Ok(value) => match parse_bool(&value) {
            Some(flag) => Ok(Some(flag)),
            None => Err(Error::InvalidConfig {
                key: key.to_string(),
                value,
            }),
        },
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freeze_defaults() {
        let settings = BootstrapConfig::default().freeze();
        assert!(!settings.serve_local);
        assert_eq!(settings.bootswatch_theme, None);
        assert_eq!(settings.btn_style, "primary");
        assert_eq!(settings.btn_size, "md");
        assert_eq!(settings.icon_size, "1em");
        assert_eq!(settings.icon_color, None);
        assert_eq!(settings.msg_category, "primary");
        assert_eq!(settings.table_view_title, "View");
        assert_eq!(settings.table_edit_title, "Edit");
        assert_eq!(settings.table_delete_title, "Delete");
        assert_eq!(settings.table_new_title, "New");
    }

    #[test]
    fn test_merge_defaults_keeps_explicit_values() {
        let config = BootstrapConfig {
            btn_style: Some("danger".to_string()),
            ..Default::default()
        };

        // Merging twice models two startup registrations; the explicit
        // value must survive both.
        let merged = config.merge_defaults().merge_defaults();
        assert_eq!(merged.btn_style.as_deref(), Some("danger"));
        assert_eq!(merged.btn_size.as_deref(), Some("md"));

        let settings = merged.freeze();
        assert_eq!(settings.btn_style, "danger");
    }

    #[test]
    fn test_freeze_keeps_theme_case() {
        let config = BootstrapConfig {
            bootswatch_theme: Some("Cerulean".to_string()),
            ..Default::default()
        };
        let settings = config.freeze();
        assert_eq!(settings.bootswatch_theme.as_deref(), Some("Cerulean"));
    }

    #[test]
    fn test_freeze_normalizes_empty_optionals() {
        let config = BootstrapConfig {
            bootswatch_theme: Some(String::new()),
            icon_color: Some(String::new()),
            ..Default::default()
        };
        let settings = config.freeze();
        assert_eq!(settings.bootswatch_theme, None);
        assert_eq!(settings.icon_color, None);
    }

    #[test]
    fn test_parse_bool_forms() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_from_env_round_trip() {
        // Single test touching the process environment to avoid races
        // between parallel tests.
        env::set_var("BOOTSTRAP_SERVE_LOCAL", "true");
        env::set_var("BOOTSTRAP_BOOTSWATCH_THEME", "Cerulean");
        env::set_var("BOOTSTRAP_TABLE_NEW_TITLE", "Create");

        let config = BootstrapConfig::from_env().unwrap();
        assert_eq!(config.serve_local, Some(true));
        assert_eq!(config.bootswatch_theme.as_deref(), Some("Cerulean"));
        assert_eq!(config.table_new_title.as_deref(), Some("Create"));
        assert_eq!(config.btn_style, None);

        env::set_var("BOOTSTRAP_SERVE_LOCAL", "maybe");
        let err = BootstrapConfig::from_env().unwrap_err();
        match err {
            Error::InvalidConfig { key, value } => {
                assert_eq!(key, "BOOTSTRAP_SERVE_LOCAL");
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }

        env::remove_var("BOOTSTRAP_SERVE_LOCAL");
        env::remove_var("BOOTSTRAP_BOOTSWATCH_THEME");
        env::remove_var("BOOTSTRAP_TABLE_NEW_TITLE");
    }

    #[test]
    fn test_from_toml() {
        let config = BootstrapConfig::from_toml(
            r#"
            serve_local = true
            bootswatch_theme = "darkly"
            btn_style = "outline-secondary"
            "#,
        )
        .unwrap();
        assert_eq!(config.serve_local, Some(true));
        assert_eq!(config.bootswatch_theme.as_deref(), Some("darkly"));
        assert_eq!(config.btn_style.as_deref(), Some("outline-secondary"));

        assert!(BootstrapConfig::from_toml("serve_local = \"nope\"").is_err());
    }
}
