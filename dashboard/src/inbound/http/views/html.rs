//! Page shell and shared fragments.
//!
//! Every interpolated value passes through [`escape`]; fragments built here
//! are trusted markup.

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#1f2937}\
main{max-width:72rem;margin:0 auto;padding:2rem 1rem}\
.card{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:1.5rem}\
.centered{min-height:100vh;display:flex;align-items:center;justify-content:center;text-align:center}\
.spinner{width:3rem;height:3rem;border-radius:50%;border-top:2px solid #3b82f6;\
border-bottom:2px solid #3b82f6;animation:spin 1s linear infinite}\
@keyframes spin{to{transform:rotate(360deg)}}\
.error-title{color:#dc2626}\
.button{display:inline-block;margin-top:1rem;padding:.5rem 1rem;border-radius:.375rem;\
background:#3b82f6;color:#fff;text-decoration:none}\
input[type=search]{width:100%;box-sizing:border-box;padding:.5rem 1rem;border:1px solid #d1d5db;\
border-radius:.375rem}\
table{width:100%;border-collapse:collapse;margin-top:1.5rem}\
th{text-align:left;font-size:.75rem;color:#6b7280;background:#f3f4f6;padding:.75rem 1.5rem}\
td{padding:1rem 1.5rem;border-top:1px solid #e5e7eb;white-space:nowrap}\
.secondary{color:#6b7280}\
.label{font-size:.875rem;color:#6b7280}\
.value{font-size:1.125rem;margin-bottom:1rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:2rem}";

/// Escape text for element content and double-quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Complete HTML document around `body`.
pub fn page(title: &str, description: Option<&str>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLE.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    if let Some(description) = description {
        html.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape(description)
        ));
    }
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}

/// Busy indicator filling the viewport.
pub fn spinner() -> &'static str {
    "<div class=\"centered\"><div class=\"spinner\" role=\"status\" aria-label=\"Loading\"></div></div>"
}

/// Full-screen panel with a heading, optional message and one action link.
pub fn panel(heading: &str, message: Option<&str>, action: (&str, &str), is_error: bool) -> String {
    let (href, label) = action;
    let mut html = String::from("<div class=\"centered\"><div>");
    let class = if is_error { " class=\"error-title\"" } else { "" };
    html.push_str(&format!("<h1{class}>{}</h1>", escape(heading)));
    if let Some(message) = message {
        html.push_str(&format!("<p>{}</p>", escape(message)));
    }
    html.push_str(&format!(
        "<a class=\"button\" href=\"{}\">{}</a></div></div>",
        escape(href),
        escape(label)
    ));
    html
}
