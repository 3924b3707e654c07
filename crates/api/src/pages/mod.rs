mod dashboard;
mod login;

pub use dashboard::render_dashboard;
pub use login::render_login_page;

/// Escapes text for use in html content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const BASE_STYLE: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; background: #f4f6fb; color: #1f2933; }
    h1 { font-size: 1.6rem; margin: 0 0 1rem 0; }
    button { cursor: pointer; border: none; border-radius: 6px; padding: 0.5rem 1rem; background: #3366ff; color: #fff; font-size: 0.9rem; }
    button.secondary { background: #e4e7eb; color: #1f2933; }
    button.danger { background: #e12d39; }
    input, select { padding: 0.5rem; border: 1px solid #cbd2d9; border-radius: 6px; font-size: 0.9rem; }
    .card { background: #fff; border-radius: 10px; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08); padding: 1.5rem; }
    .error { color: #e12d39; min-height: 1.2rem; margin-top: 0.5rem; }
"#;

fn page(title: &str, style: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("<title>{}</title>\n<style>", escape_html(title)));
    html.push_str(BASE_STYLE);
    html.push_str(style);
    html.push_str("</style>\n</head>\n");
    html.push_str(body);
    html.push_str("\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_escapes_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("example.com"), "example.com");
    }
}
