//! User Details page.

use super::html::{escape, page, panel, spinner};
use crate::domain::{DetailOutcome, DetailView, User};

const TITLE: &str = "User Details";
const BACK_LABEL: &str = "Back to Users";

/// Render the detail view in its current state.
#[must_use]
pub fn render_detail(view: &DetailView) -> String {
    match view.outcome() {
        DetailOutcome::Failed(message) => page(
            TITLE,
            None,
            &panel("Error", Some(message), ("/", BACK_LABEL), true),
        ),
        DetailOutcome::Loading => page(TITLE, None, spinner()),
        DetailOutcome::NotFound => page(
            "User Not Found",
            None,
            &panel("User Not Found", None, ("/", BACK_LABEL), false),
        ),
        DetailOutcome::Found(user) => page(
            &format!("{} - {TITLE}", user.name),
            Some(&format!("Details for {}", user.name)),
            &found_body(user),
        ),
    }
}

fn found_body(user: &User) -> String {
    let mut html = format!(
        "<main>\n<p><a href=\"/\">&larr; {BACK_LABEL}</a></p>\n<h1>{TITLE}</h1>\n<div class=\"card\">\n<div class=\"grid\">\n"
    );

    html.push_str("<section>\n<h2>Personal Information</h2>\n");
    push_field(&mut html, "Name", &escape(&user.name));
    push_field(&mut html, "Username", &escape(&user.username));
    push_field(&mut html, "Email", &escape(&user.email));
    push_field(&mut html, "Phone", &escape(&user.phone));
    let website = escape(&user.website);
    push_field(
        &mut html,
        "Website",
        &format!("<a href=\"http://{website}\" target=\"_blank\" rel=\"noopener noreferrer\">{website}</a>"),
    );
    html.push_str("</section>\n");

    let address = &user.address;
    html.push_str("<section>\n<h2>Address</h2>\n");
    push_field(&mut html, "Street", &escape(&address.street));
    push_field(&mut html, "Suite", &escape(&address.suite));
    push_field(&mut html, "City", &escape(&address.city));
    push_field(&mut html, "Zipcode", &escape(&address.zipcode));
    push_field(
        &mut html,
        "Geo Location",
        &format!("{}, {}", escape(&address.geo.lat), escape(&address.geo.lng)),
    );
    html.push_str("</section>\n</div>\n");

    let company = &user.company;
    html.push_str("<section>\n<h2>Company</h2>\n<div class=\"grid\">\n");
    push_field(&mut html, "Company Name", &escape(&company.name));
    push_field(
        &mut html,
        "Catch Phrase",
        &format!("\"{}\"", escape(&company.catch_phrase)),
    );
    push_field(&mut html, "Business", &escape(&company.bs));
    html.push_str("</div>\n</section>\n</div>\n</main>");
    html
}

/// `value` must already be escaped markup.
fn push_field(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<div><div class=\"label\">{label}</div><div class=\"value\">{value}</div></div>\n"
    ));
}
