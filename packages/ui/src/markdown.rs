use pulldown_cmark::{Event, Options, Parser};

/// Render untrusted markdown (AI answers) to HTML.
///
/// Raw HTML events are escaped rather than passed through: the text comes
/// from a model, not from code we control.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options());
    let mut html_out = String::new();
    for event in parser {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => {
                html_out.push_str(&html_escape(&raw));
            }
            _ => {
                pulldown_cmark::html::push_html(&mut html_out, std::iter::once(event));
            }
        }
    }
    html_out
}

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("The **answer** is:\n\n- one\n- two");
        assert!(html.contains("<strong>answer</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
