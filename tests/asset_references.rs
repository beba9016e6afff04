//! Asset Reference Tests
//!
//! Verifies the public asset-resolution surface across the full
//! serve-local x theme matrix, plus the exact CDN URL formats the
//! layer promises for compatibility.

use bootstrap_axum::{Bootstrap, BootstrapConfig, JsOptions};

fn bootstrap(serve_local: bool, theme: Option<&str>) -> Bootstrap {
    Bootstrap::new(BootstrapConfig {
        serve_local: Some(serve_local),
        bootswatch_theme: theme.map(str::to_string),
        ..Default::default()
    })
}

#[test]
fn css_matrix_single_link_tag() {
    for serve_local in [false, true] {
        for theme in [None, Some("Cerulean")] {
            let html = bootstrap(serve_local, theme).load_css(Some("4.3.1")).into_string();

            assert_eq!(html.matches("<link").count(), 1, "{html}");
            if serve_local {
                assert!(html.contains("href=\"/bootstrap/static/"), "{html}");
            } else {
                assert!(html.contains("4.3.1"), "{html}");
                assert!(html.contains("https://cdn.jsdelivr.net/npm/"), "{html}");
            }
            if theme.is_some() {
                assert!(html.contains("cerulean"), "{html}");
                assert!(!html.contains("Cerulean"), "{html}");
            }
        }
    }
}

#[test]
fn js_slot_counts() {
    let b = bootstrap(false, None);

    let none = JsOptions {
        with_jquery: false,
        with_popper: false,
        ..Default::default()
    };
    let html = b.load_js(&none).into_string();
    assert_eq!(html.matches("<script").count(), 1);

    let html = b.load_js(&JsOptions::default()).into_string();
    assert_eq!(html.matches("<script").count(), 3);

    let jquery_only = JsOptions {
        with_popper: false,
        ..Default::default()
    };
    let html = b.load_js(&jquery_only).into_string();
    assert_eq!(html.matches("<script").count(), 2);
    assert!(html.contains("jquery"));
    assert!(!html.contains("popper"));
}

#[test]
fn cdn_url_formats_exact() {
    let b = bootstrap(false, None);
    assert!(b.load_css(None).as_str().contains(
        "https://cdn.jsdelivr.net/npm/bootstrap@4.3.1/dist/css/bootstrap.min.css"
    ));

    let js = b.load_js(&JsOptions::default()).into_string();
    assert!(js.contains("https://cdn.jsdelivr.net/npm/bootstrap@4.3.1/dist/js/bootstrap.min.js"));
    assert!(js.contains("https://cdn.jsdelivr.net/npm/jquery@3.4.1/dist/jquery.min.js"));
    assert!(js.contains("https://cdn.jsdelivr.net/npm/popper.js@1.14.0/dist/umd/popper.min.js"));

    let themed = bootstrap(false, Some("Darkly"));
    assert!(themed.load_css(Some("4.3.1")).as_str().contains(
        "https://cdn.jsdelivr.net/npm/bootswatch@4.3.1/dist/darkly/bootstrap.min.css"
    ));
}

#[test]
fn theme_case_preserved_in_settings() {
    let b = bootstrap(false, Some("Cerulean"));
    assert_eq!(
        b.settings().bootswatch_theme.as_deref(),
        Some("Cerulean")
    );
}

#[test]
fn companion_order_is_jquery_popper_bootstrap() {
    let html = bootstrap(true, None).load_js(&JsOptions::default()).into_string();
    let jquery = html.find("jquery.min.js").unwrap();
    let popper = html.find("popper.min.js").unwrap();
    let toolkit = html.find("js/bootstrap.min.js").unwrap();
    assert!(jquery < popper && popper < toolkit);
}
