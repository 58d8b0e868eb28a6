//! User Management page.

use url::form_urlencoded;

use super::html::{escape, page, panel, spinner};
use crate::domain::{ListView, LoadState, User};

const TITLE: &str = "User Management";
const DESCRIPTION: &str = "User management dashboard";

/// Same-page link that repeats the current search.
///
/// # Examples
/// ```
/// use user_dashboard::inbound::http::views::reload_href;
///
/// assert_eq!(reload_href(""), "/");
/// assert_eq!(reload_href("a b&c"), "/?q=a+b%26c");
/// ```
#[must_use]
pub fn reload_href(query: &str) -> String {
    if query.is_empty() {
        "/".to_owned()
    } else {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("/?q={encoded}")
    }
}

/// Render the list view in its current state.
#[must_use]
pub fn render_list(view: &ListView) -> String {
    match view.state() {
        LoadState::Loading => page(TITLE, Some(DESCRIPTION), spinner()),
        LoadState::Failed(message) => page(
            TITLE,
            Some(DESCRIPTION),
            &panel(
                "Error",
                Some(message),
                (&reload_href(view.query()), "Try Again"),
                true,
            ),
        ),
        LoadState::Loaded(_) => page(TITLE, Some(DESCRIPTION), &loaded_body(view)),
    }
}

fn loaded_body(view: &ListView) -> String {
    let mut html = format!(
        "<main>\n<h1>{TITLE}</h1>\n<div class=\"card\">\n\
         <form method=\"get\" action=\"/\" role=\"search\">\
         <input type=\"search\" name=\"q\" placeholder=\"Search by name or email...\" \
         value=\"{}\" aria-label=\"Search users\"></form>\n",
        escape(view.query())
    );
    html.push_str(
        "<table>\n<thead><tr><th>NAME</th><th>EMAIL</th><th>PHONE</th><th>COMPANY</th></tr></thead>\n<tbody>\n",
    );
    for user in view.filtered() {
        push_row(&mut html, user);
    }
    html.push_str(&format!(
        "</tbody>\n</table>\n<p class=\"summary\">{}</p>\n</div>\n</main>",
        escape(&view.summary())
    ));
    html
}

fn push_row(html: &mut String, user: &User) {
    let name = escape(&user.name);
    let name_cell = match user.detail_path() {
        Some(path) => format!("<a href=\"{}\"><strong>{name}</strong></a>", escape(&path)),
        None => format!("<strong>{name}</strong>"),
    };
    html.push_str(&format!(
        "<tr><td>{name_cell}<div class=\"secondary\">{}</div></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape(&user.username),
        escape(&user.email),
        escape(&user.phone),
        escape(&user.company.name),
    ));
}
