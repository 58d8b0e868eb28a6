//! Dashboard page handlers.
//!
//! ```text
//! GET /?q=leanne
//! GET /users/1
//! ```
//!
//! Each request mounts a fresh view, drives its single fetch through the
//! directory port and renders the resulting state.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, get, web};
use url::form_urlencoded;

use super::cache_control::no_store_header;
use super::state::HttpState;
use super::views::{render_detail, render_list};
use crate::domain::{DetailOutcome, DetailView, ListView, LoadState, UserIdentifier};

const SEARCH_PARAM: &str = "q";

/// First `q` value in a raw query string; absent means an empty search.
///
/// Repeated or unknown parameters never reject the request.
fn search_text(query_string: &str) -> String {
    form_urlencoded::parse(query_string.as_bytes())
        .find(|(name, _)| name == SEARCH_PARAM)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// User Management page.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_dashboard::inbound::http::users::list_page;
///
/// let app = App::new().service(list_page);
/// ```
#[get("/")]
pub async fn list_page(state: web::Data<HttpState>, req: HttpRequest) -> HttpResponse {
    let mut view = ListView::new();
    view.mount(state.users.as_ref()).await;
    view.set_query(search_text(req.query_string()));

    let status = match view.state() {
        LoadState::Failed(_) => StatusCode::BAD_GATEWAY,
        LoadState::Loading | LoadState::Loaded(_) => StatusCode::OK,
    };
    html_response(status, render_list(&view))
}

/// User Details page; the path segment is forwarded verbatim.
#[get("/users/{id}")]
pub async fn detail_page(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    let mut view = DetailView::new();
    view.resolve(state.users.as_ref(), UserIdentifier::new(path.into_inner()))
        .await;

    let status = match view.outcome() {
        DetailOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
        DetailOutcome::NotFound => StatusCode::NOT_FOUND,
        DetailOutcome::Loading | DetailOutcome::Found(_) => StatusCode::OK,
    };
    html_response(status, render_detail(&view))
}

fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .insert_header(no_store_header())
        .body(body)
}
