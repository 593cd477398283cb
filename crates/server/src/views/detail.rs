use std::fmt::Write;

use services::services::{highlight::highlight_html, navigation::PatternDetail};
use utils::html::escape;

use super::{PageContext, layout::render_page};

pub fn render_detail(ctx: &PageContext, detail: &PatternDetail) -> String {
    let pattern = &detail.pattern;
    let mut content = String::new();

    let _ = write!(
        content,
        r#"<div class="pattern-detail">
<a href="{back}" class="back-link">← Back to all patterns</a>
<div class="detail-header">
<div class="detail-meta">
<span class="detail-category">{category}</span>
<span class="detail-difficulty {difficulty}">{difficulty}</span>
</div>
<h1 class="detail-title">{title}</h1>
<p class="detail-description">{description}</p>
</div>
<section class="detail-section">
<h2>📝 Code Example</h2>
<div class="code-block"><pre class="language-javascript"><code class="language-javascript">{code}</code></pre></div>
</section>
<section class="detail-section">
<h2>💡 Explanation</h2>
<p class="explanation">{explanation}</p>
</section>
<section class="detail-section">
<h2>🎯 When to Use</h2>
<p class="use-case">{use_case}</p>
</section>
<div class="navigation-buttons">
"#,
        back = escape(&ctx.link("/", &[])),
        category = escape(pattern.category.label()),
        difficulty = pattern.difficulty.label(),
        title = escape(&pattern.title),
        description = escape(&pattern.description),
        code = highlight_html(&pattern.code),
        explanation = escape(&pattern.explanation),
        use_case = escape(&pattern.use_case),
    );

    if let Some(previous) = detail.adjacency.previous_id {
        let _ = writeln!(
            content,
            r#"<a href="{}" class="nav-btn prev">← Previous Pattern</a>"#,
            escape(&ctx.link(&format!("/pattern/{previous}"), &[]))
        );
    }
    if let Some(next) = detail.adjacency.next_id {
        let _ = writeln!(
            content,
            r#"<a href="{}" class="nav-btn next">Next Pattern →</a>"#,
            escape(&ctx.link(&format!("/pattern/{next}"), &[]))
        );
    }
    content.push_str("</div>\n</div>");

    render_page(ctx, &pattern.title, &content)
}

pub fn render_not_found(ctx: &PageContext) -> String {
    let content = format!(
        r#"<div class="pattern-not-found">
<h2>Pattern not found</h2>
<a href="{}" class="back-link">← Back to patterns</a>
</div>"#,
        escape(&ctx.link("/", &[]))
    );
    render_page(ctx, "Pattern not found", &content)
}

#[cfg(test)]
mod tests {
    use catalog::Catalog;
    use services::services::navigation::find_by_id;

    use super::*;
    use crate::views::Theme;

    fn render(id: i64) -> String {
        let catalog = Catalog::load().unwrap();
        let pattern = find_by_id(&catalog, id).unwrap();
        let detail = PatternDetail::new(&catalog, pattern);
        render_detail(&PageContext::new(Theme::Dark, format!("/pattern/{id}")), &detail)
    }

    #[test]
    fn test_first_pattern_has_only_next_link() {
        let html = render(1);
        assert!(html.contains(r#"<h1 class="detail-title">Map - Transform Array Elements</h1>"#));
        assert!(html.contains(r#"href="/pattern/2?theme=dark" class="nav-btn next""#));
        assert!(!html.contains("Previous Pattern"));
    }

    #[test]
    fn test_last_pattern_has_only_previous_link() {
        let html = render(8);
        assert!(html.contains(r#"href="/pattern/7?theme=dark" class="nav-btn prev""#));
        assert!(!html.contains("Next Pattern"));
    }

    #[test]
    fn test_middle_pattern_sections() {
        let html = render(4);
        assert!(html.contains("Previous Pattern"));
        assert!(html.contains("Next Pattern"));
        assert!(html.contains("📝 Code Example"));
        assert!(html.contains("💡 Explanation"));
        assert!(html.contains("🎯 When to Use"));
        assert!(html.contains(r#"<span class="token keyword">const</span>"#));
        assert!(html.contains(r#"<span class="detail-difficulty intermediate">intermediate</span>"#));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found(&PageContext::new(Theme::Light, "/pattern/99"));
        assert!(html.contains("<h2>Pattern not found</h2>"));
        assert!(html.contains(r#"<a href="/?theme=light" class="back-link">← Back to patterns</a>"#));
    }
}
