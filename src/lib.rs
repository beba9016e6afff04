//! Bootstrap 4 asset references and template helpers for axum.
//!
//! Wires Bootstrap's stylesheet and script references into page
//! rendering, switching between CDN and locally served assets, with
//! optional Bootswatch theme variants and a handful of helpers for
//! hand-rolled HTML templates.
//!
//! The [`Bootstrap`] registrar is built once at startup from a merged
//! configuration snapshot, attached to the application router, and
//! cloned into whatever renders pages:
//!
//! ```no_run
//! use axum::{routing::get, Extension, Router};
//! use axum::response::Html;
//! use bootstrap_axum::{Bootstrap, BootstrapConfig};
//!
//! async fn index(Extension(bootstrap): Extension<Bootstrap>) -> Html<String> {
//!     Html(format!(
//!         "<!DOCTYPE html><html><head>{}</head><body>{}</body></html>",
//!         bootstrap.load_css(None),
//!         bootstrap.load_js(&Default::default()),
//!     ))
//! }
//!
//! let bootstrap = Bootstrap::new(BootstrapConfig::default());
//! let app: Router = bootstrap.attach(Router::new().route("/", get(index)));
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "forms")]
pub mod form;
pub mod markup;
pub mod registrar;
pub mod resolver;
pub mod table;

pub use config::{BootstrapConfig, Settings};
pub use error::Error;
#[cfg(feature = "forms")]
pub use form::{is_hidden_field, FieldKind, FormField};
pub use markup::Markup;
pub use registrar::Bootstrap;
pub use resolver::{JsOptions, BOOTSTRAP_VERSION, JQUERY_VERSION, POPPER_VERSION};
pub use table::{get_table_titles, TableSchema};

/// Emit a warning from template-rendering code.
///
/// Intended for deprecation notices in page-building helpers; routes
/// through the ambient `tracing` subscriber.
pub fn warn(message: &str) {
    tracing::warn!(target: "bootstrap_axum", "{}", message);
}
