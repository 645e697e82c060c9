//! The chat page served at `/specific`.
//!
//! The template is embedded at compile time via `include_str!`, so a missing
//! template is a build error rather than a runtime one.

/// Raw page template. `{{ bot_name }}` is the only placeholder.
pub const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

/// Render the chat page for a bot with the given display name.
pub fn render_index(bot_name: &str) -> String {
    INDEX_TEMPLATE.replace("{{ bot_name }}", &escape_html(bot_name))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_every_placeholder() {
        let page = render_index("Parley");
        assert!(!page.contains("{{ bot_name }}"));
        assert!(page.contains("<title>Parley</title>"));
        assert!(page.contains("Chat with Parley"));
    }

    #[test]
    fn test_page_calls_response_endpoint() {
        assert!(INDEX_TEMPLATE.contains("/response?userMessage="));
    }

    #[test]
    fn test_bot_name_is_escaped() {
        let page = render_index("<b>\"Bot\" & co</b>");
        assert!(page.contains("&lt;b&gt;&quot;Bot&quot; &amp; co&lt;/b&gt;"));
        assert!(!page.contains("<b>"));
    }
}
