use utils::html::escape;

use super::{PageContext, Theme};

/// Wrap page content in the document shell with header and footer
pub fn render_page(ctx: &PageContext, title: &str, content: &str) -> String {
    let (toggle_icon, toggle_label) = match ctx.theme {
        Theme::Dark => ("☀️", "Switch to light mode"),
        Theme::Light => ("🌙", "Switch to dark mode"),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · JS Patterns</title>
<link rel="stylesheet" href="/assets/app.css">
</head>
<body>
<div class="app {theme}">
<header class="app-header">
<div class="header-content">
<a href="{home}" class="logo"><h1>📚 JS Patterns</h1></a>
<nav><a class="theme-toggle" href="{toggle_href}" aria-label="{toggle_label}">{toggle_icon}</a></nav>
</div>
</header>
<main class="main-content">
{content}
</main>
<footer class="app-footer">
<p>Learn JavaScript Patterns • Built with Rust &amp; axum</p>
</footer>
</div>
</body>
</html>
"#,
        title = escape(title),
        theme = ctx.theme.as_str(),
        home = escape(&ctx.link("/", &[])),
        toggle_href = escape(&ctx.theme_toggle_link()),
        toggle_label = toggle_label,
        toggle_icon = toggle_icon,
        content = content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_marks_theme_and_escapes_title() {
        let ctx = PageContext::new(Theme::Light, "/pattern/1");
        let html = render_page(&ctx, "A <b> title", "<p>body</p>");
        assert!(html.contains(r#"<div class="app light">"#));
        assert!(html.contains("<title>A &lt;b&gt; title · JS Patterns</title>"));
        assert!(html.contains(r#"href="/pattern/1?theme=dark""#));
        assert!(html.contains("<p>body</p>"));
    }
}
