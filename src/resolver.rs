//! Asset reference resolution.
//!
//! Pure functions that compute `<link>` and `<script>` markup for
//! Bootstrap and its companion libraries, switching between CDN URLs
//! and locally served files based on the frozen settings. Nothing here
//! performs I/O or caches: references are recomputed per call.

use crate::config::Settings;
use crate::markup::Markup;

/// Bundled Bootstrap version, referenced when no version is supplied.
pub const BOOTSTRAP_VERSION: &str = "4.3.1";

/// Default jQuery version.
pub const JQUERY_VERSION: &str = "3.4.1";

/// Default Popper.js version.
pub const POPPER_VERSION: &str = "1.14.0";

const CSS_FILENAME: &str = "bootstrap.min.css";
const JS_FILENAME: &str = "bootstrap.min.js";
const JQUERY_FILENAME: &str = "jquery.min.js";
const POPPER_FILENAME: &str = "popper.min.js";

/// Options for [`load_js`].
///
/// Version fields left unset fall back to the crate's bundled version
/// constants; both companion libraries are included by default.
#[derive(Debug, Clone)]
pub struct JsOptions {
    /// Bootstrap version.
    pub version: Option<String>,
    /// jQuery version.
    pub jquery_version: Option<String>,
    /// Popper.js version.
    pub popper_version: Option<String>,
    /// Include the jQuery script tag.
    pub with_jquery: bool,
    /// Include the Popper.js script tag.
    pub with_popper: bool,
}

impl Default for JsOptions {
    fn default() -> Self {
        Self {
            version: None,
            jquery_version: None,
            popper_version: None,
            with_jquery: true,
            with_popper: true,
        }
    }
}

/// Build the stylesheet `<link>` reference.
///
/// With a Bootswatch theme configured, the theme name is lowercased for
/// the URL path and the CDN reference switches to the `bootswatch`
/// package under the same version argument. Exactly one tag is emitted.
pub fn load_css(settings: &Settings, static_mount: &str, version: Option<&str>) -> Markup {
    let version = version.unwrap_or(BOOTSTRAP_VERSION);
    let theme = settings
        .bootswatch_theme
        .as_deref()
        .map(|t| t.to_lowercase());

    let css = if settings.serve_local {
        let base_path = match &theme {
            None => "css/".to_string(),
            Some(theme) => format!("css/swatch/{}/", theme),
        };
        format!(
            r#"<link rel="stylesheet" type="text/css" href="{}/{}{}">"#,
            static_mount, base_path, CSS_FILENAME
        )
    } else {
        match &theme {
            None => format!(
                r#"<link rel="stylesheet" type="text/css" href="https://cdn.jsdelivr.net/npm/bootstrap@{}/dist/css/{}">"#,
                version, CSS_FILENAME
            ),
            Some(theme) => format!(
                r#"<link rel="stylesheet" type="text/css" href="https://cdn.jsdelivr.net/npm/bootswatch@{}/dist/{}/{}">"#,
                version, theme, CSS_FILENAME
            ),
        }
    };
    Markup::new(css)
}

/// Build the script references for Bootstrap and its companions.
///
/// Emits the jQuery and Popper.js tags (when enabled) followed by the
/// Bootstrap tag, each slot on its own line. Disabled slots contribute
/// an empty string, so line layout is stable.
pub fn load_js(settings: &Settings, static_mount: &str, options: &JsOptions) -> Markup {
    let version = options.version.as_deref().unwrap_or(BOOTSTRAP_VERSION);
    let jquery_version = options.jquery_version.as_deref().unwrap_or(JQUERY_VERSION);
    let popper_version = options.popper_version.as_deref().unwrap_or(POPPER_VERSION);

    let js = if settings.serve_local {
        format!(
            r#"<script src="{}/js/{}"></script>"#,
            static_mount, JS_FILENAME
        )
    } else {
        format!(
            r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@{}/dist/js/{}"></script>"#,
            version, JS_FILENAME
        )
    };

    let jquery = if options.with_jquery {
        if settings.serve_local {
            format!(
                r#"<script src="{}/{}"></script>"#,
                static_mount, JQUERY_FILENAME
            )
        } else {
            format!(
                r#"<script src="https://cdn.jsdelivr.net/npm/jquery@{}/dist/{}"></script>"#,
                jquery_version, JQUERY_FILENAME
            )
        }
    } else {
        String::new()
    };

    let popper = if options.with_popper {
        if settings.serve_local {
            format!(
                r#"<script src="{}/{}"></script>"#,
                static_mount, POPPER_FILENAME
            )
        } else {
            format!(
                r#"<script src="https://cdn.jsdelivr.net/npm/popper.js@{}/dist/umd/{}"></script>"#,
                popper_version, POPPER_FILENAME
            )
        }
    } else {
        String::new()
    };

    Markup::new(format!("{}\n    {}\n    {}", jquery, popper, js))
}
