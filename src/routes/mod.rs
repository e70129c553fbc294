use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::http::header;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Flash message prepared for the alert partial.
#[derive(Debug, Serialize)]
struct Alert<'a> {
    level: &'static str,
    message: &'a str,
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "error",
    }
}

/// Template context shared by every page: pending alerts and the active page.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts: Vec<Alert<'_>> = flash_messages
        .iter()
        .map(|message| Alert {
            level: level_name(message.level()),
            message: message.content(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Render `template` or answer `500` when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Form extractor settings that log rejected payloads before answering `400`.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err: UrlencodedError, req: &HttpRequest| -> Error {
        log::error!("Rejected form submitted to {}: {err}", req.path());
        err.into()
    })
}

/// JSON extractor settings that log rejected payloads before answering `400`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| -> Error {
        log::error!("Rejected JSON submitted to {}: {err}", req.path());
        err.into()
    })
}
