//! Application integration for the Bootstrap helpers.
//!
//! [`Bootstrap`] is built once at startup from a merged configuration
//! snapshot and attached to the application router. Clones are cheap
//! and share the frozen settings; handlers pull the registrar back out
//! of the request extensions to build asset references.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    extract::Path as UrlPath,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};

use crate::config::{BootstrapConfig, Settings};
use crate::error::Error;
use crate::markup::Markup;
use crate::resolver::{self, JsOptions};
use crate::table::{get_table_titles, TableSchema};

/// Registrar and template context object for the Bootstrap helpers.
///
/// Exposes the asset reference builders plus the template utilities
/// (`is_hidden_field`, `get_table_titles`, `warn`) as methods, so one
/// clone handed to page-rendering code covers everything.
#[derive(Clone)]
pub struct Bootstrap {
    settings: Arc<Settings>,
    static_dir: PathBuf,
    static_mount: String,
    attached: Arc<AtomicBool>,
}

impl Bootstrap {
    /// Merge defaults into `config`, freeze the snapshot and build the
    /// registrar with the default `/static` prefix.
    pub fn new(config: BootstrapConfig) -> Self {
        Self::with_static_prefix(config, "/static")
    }

    /// Like [`Bootstrap::new`], but mounting bundled assets under
    /// `/bootstrap{static_url_path}` to mirror a host application with
    /// a non-default static prefix.
    pub fn with_static_prefix(config: BootstrapConfig, static_url_path: &str) -> Self {
        Self {
            settings: Arc::new(config.freeze()),
            static_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("static"),
            static_mount: format!("/bootstrap{}", static_url_path),
            attached: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Override the directory backing the bundled-asset route.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// The frozen configuration snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// URL prefix the bundled-asset route is mounted under.
    pub fn static_mount(&self) -> &str {
        &self.static_mount
    }

    /// Mount the bundled-asset route and store the registrar in the
    /// request extensions.
    ///
    /// Attach after the application routes are declared so the
    /// extension layer covers them. Attaching the same registrar twice
    /// is a no-op.
    pub fn attach<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        if self.attached.swap(true, Ordering::SeqCst) {
            tracing::debug!(target: "bootstrap_axum", "already attached, skipping");
            return router;
        }

        tracing::debug!(
            target: "bootstrap_axum",
            mount = %self.static_mount,
            dir = %self.static_dir.display(),
            "mounting bundled assets"
        );

        let route = format!("{}/*file", self.static_mount);
        let assets = self.clone();
        router
            .route(
                &route,
                get(move |UrlPath(file): UrlPath<String>| {
                    let assets = assets.clone();
                    async move { serve_asset(&assets, &file).await }
                }),
            )
            .layer(Extension(self.clone()))
    }

    /// Build the stylesheet `<link>` reference.
    pub fn load_css(&self, version: Option<&str>) -> Markup {
        resolver::load_css(&self.settings, &self.static_mount, version)
    }

    /// Build the script references for Bootstrap and its companions.
    pub fn load_js(&self, options: &JsOptions) -> Markup {
        resolver::load_js(&self.settings, &self.static_mount, options)
    }

    /// Whether a field renders as a hidden input.
    #[cfg(feature = "forms")]
    pub fn is_hidden_field(&self, field: &dyn crate::form::FormField) -> bool {
        crate::form::is_hidden_field(field)
    }

    /// Derive `(field, label)` pairs for a table of rows.
    pub fn get_table_titles<R: TableSchema>(
        &self,
        rows: &[R],
        primary_key: &str,
        primary_key_title: &str,
    ) -> Vec<(String, String)> {
        get_table_titles(rows, primary_key, primary_key_title)
    }

    /// Emit a warning from template-rendering code.
    pub fn warn(&self, message: &str) {
        crate::warn(message);
    }

    /// Verify form helper support at startup.
    ///
    /// Applications relying on [`Bootstrap::is_hidden_field`] call this
    /// once when wiring up, so a build without the `forms` feature
    /// fails there instead of at render time.
    pub fn ensure_form_helpers(&self) -> Result<(), Error> {
        #[cfg(feature = "forms")]
        {
            Ok(())
        }
        #[cfg(not(feature = "forms"))]
        {
            Err(Error::FormSupportDisabled)
        }
    }
}

/// Serve one bundled asset file.
async fn serve_asset(bootstrap: &Bootstrap, file: &str) -> Response {
    let canonical_dir = match bootstrap.static_dir.canonicalize() {
        Ok(p) => p,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            )
                .into_response();
        }
    };

    if file.contains("..") || file.starts_with('/') {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    let file_path = canonical_dir.join(file);

    let canonical_file = match file_path.canonicalize() {
        Ok(p) => p,
        Err(_) => {
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
    };

    if !canonical_file.starts_with(&canonical_dir) {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    let content = match tokio::fs::read(&canonical_file).await {
        Ok(c) => c,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response();
        }
    };

    let mime = mime_guess::from_path(&canonical_file)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], content).into_response()
}
