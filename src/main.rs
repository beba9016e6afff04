//! Demo server for the Bootstrap helpers.
//!
//! Serves a single page wired through every helper: asset references,
//! table title derivation, hidden-field filtering and the cosmetic
//! configuration defaults. Configure via `BOOTSTRAP_*` environment
//! variables or a `.env` file.

use std::net::SocketAddr;

use axum::{response::Html, routing::get, Extension, Router};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bootstrap_axum::{
    get_table_titles, Bootstrap, BootstrapConfig, JsOptions, Markup, Settings, TableSchema,
};

#[derive(Parser)]
#[command(name = "bootstrap-demo", about = "Demo server for the Bootstrap helpers")]
struct Args {
    /// Host to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, default_value_t = 8000, env = "PORT")]
    port: u16,
}

/// Demo row rendered in the sample table.
struct Message {
    id: u64,
    author: String,
    created_at: &'static str,
}

impl TableSchema for Message {
    fn columns() -> &'static [&'static str] {
        &["id", "author", "created_at"]
    }
}

fn sample_messages() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            author: "grey".to_string(),
            created_at: "2019-04-12",
        },
        Message {
            id: 2,
            author: "li".to_string(),
            created_at: "2019-05-03",
        },
    ]
}

#[cfg(feature = "forms")]
fn login_form(settings: &Settings) -> String {
    use bootstrap_axum::{is_hidden_field, FieldKind, FormField};

    struct DemoField {
        name: &'static str,
        kind: FieldKind,
    }

    impl FormField for DemoField {
        fn kind(&self) -> FieldKind {
            self.kind
        }
    }

    let fields = [
        DemoField {
            name: "csrf_token",
            kind: FieldKind::Hidden,
        },
        DemoField {
            name: "username",
            kind: FieldKind::Text,
        },
        DemoField {
            name: "password",
            kind: FieldKind::Password,
        },
    ];

    let mut body = String::new();
    for field in &fields {
        // Hidden fields render bare, without label or group markup.
        if is_hidden_field(field) {
            body.push_str(&format!(r#"<input type="hidden" name="{}">"#, field.name));
            continue;
        }
        let input_type = match field.kind() {
            FieldKind::Password => "password",
            _ => "text",
        };
        body.push_str(&format!(
            r#"
        <div class="form-group">
            <label for="{name}">{name}</label>
            <input type="{ty}" class="form-control" id="{name}" name="{name}">
        </div>"#,
            name = field.name,
            ty = input_type,
        ));
    }
    body.push_str(&format!(
        r#"<button type="submit" class="btn btn-{} btn-{}">Sign in</button>"#,
        settings.btn_style, settings.btn_size,
    ));

    format!(r#"<form method="post">{}</form>"#, body)
}

#[cfg(not(feature = "forms"))]
fn login_form(_settings: &Settings) -> String {
    String::new()
}

/// Render the demo page.
async fn index(Extension(bootstrap): Extension<Bootstrap>) -> Html<String> {
    let settings = bootstrap.settings();
    let messages = sample_messages();
    let titles = get_table_titles(&messages, "id", "ID");

    let mut header_cells = String::new();
    for (_, label) in &titles {
        header_cells.push_str(&format!("<th>{}</th>", label));
    }
    header_cells.push_str("<th>Actions</th>");

    let mut rows = String::new();
    for message in &messages {
        rows.push_str(&format!(
            r##"
        <tr>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>
                <a class="btn btn-{style} btn-{size}" href="#">{}</a>
                <a class="btn btn-{style} btn-{size}" href="#">{}</a>
                <a class="btn btn-{style} btn-{size}" href="#">{}</a>
            </td>
        </tr>
        "##,
            message.id,
            Markup::escape(&message.author),
            message.created_at,
            settings.table_view_title,
            settings.table_edit_title,
            settings.table_delete_title,
            style = settings.btn_style,
            size = settings.btn_size,
        ));
    }

    let icon_color = settings.icon_color.as_deref().unwrap_or("currentColor");

    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>bootstrap-axum demo</title>
    {css}
</head>
<body>
    <main class="container">
        <div class="alert alert-{category}" role="alert">
            <span style="font-size: {icon_size}; color: {icon_color}">&#9432;</span>
            Assets resolved via {mode}.
        </div>
        <a class="btn btn-{style} btn-{size}" href="#">{new_title}</a>
        <table class="table">
            <thead><tr>{header_cells}</tr></thead>
            <tbody>{rows}</tbody>
        </table>
        {form}
    </main>
    {js}
</body>
</html>"##,
        css = bootstrap.load_css(None),
        js = bootstrap.load_js(&JsOptions::default()),
        category = settings.msg_category,
        icon_size = settings.icon_size,
        icon_color = icon_color,
        mode = if settings.serve_local {
            "local files"
        } else {
            "the CDN"
        },
        style = settings.btn_style,
        size = settings.btn_size,
        new_title = settings.table_new_title,
        header_cells = header_cells,
        rows = rows,
        form = login_form(settings),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootstrap_axum=info,bootstrap_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = BootstrapConfig::from_env()?;
    let bootstrap = Bootstrap::new(config);
    bootstrap.ensure_form_helpers()?;

    let app = Router::new().route("/", get(index));
    let app = bootstrap.attach(app).layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    tracing::info!("Starting demo server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
