use std::fmt::Write;

use catalog::models::pattern::{CategoryFilter, Pattern};
use services::services::query::PatternQuery;
use utils::html::escape;

use super::{PageContext, layout::render_page};

pub const NO_RESULTS_MESSAGE: &str = "No patterns found. Try different search terms or category.";

/// Pattern grid with search box and category filter buttons
pub fn render_home(
    ctx: &PageContext,
    categories: &[CategoryFilter],
    query: &PatternQuery,
    results: &[&Pattern],
) -> String {
    let mut content = String::new();
    let search_term = query.search_term.as_str();
    let selected = query.category;

    content.push_str(
        r#"<div class="home-page">
<section class="hero">
<h2>Master JavaScript Patterns</h2>
<p>Learn essential JavaScript patterns with interactive examples and clear explanations</p>
</section>
<div class="controls">
"#,
    );

    let _ = write!(
        content,
        r#"<form class="search-box" method="get" action="/">
<input type="text" name="q" placeholder="Search patterns..." value="{search}" class="search-input">
"#,
        search = escape(search_term),
    );
    if !selected.is_wildcard() {
        let _ = writeln!(
            content,
            r#"<input type="hidden" name="category" value="{}">"#,
            escape(selected.label())
        );
    }
    let _ = write!(
        content,
        r#"<input type="hidden" name="theme" value="{}">
</form>
<div class="category-filters">
"#,
        ctx.theme.as_str()
    );

    for category in categories {
        let category_param = if category.is_wildcard() {
            ""
        } else {
            category.label()
        };
        let href = ctx.link("/", &[("category", category_param), ("q", search_term)]);
        let active = if *category == selected { " active" } else { "" };
        let _ = writeln!(
            content,
            r#"<a class="category-btn{active}" href="{href}">{label}</a>"#,
            active = active,
            href = escape(&href),
            label = escape(category.label()),
        );
    }
    content.push_str("</div>\n</div>\n<div class=\"patterns-grid\">\n");

    if results.is_empty() {
        let _ = writeln!(
            content,
            r#"<div class="no-results"><p>{}</p></div>"#,
            NO_RESULTS_MESSAGE
        );
    } else {
        for pattern in results {
            render_card(&mut content, ctx, pattern);
        }
    }
    content.push_str("</div>\n</div>");

    render_page(ctx, "Patterns", &content)
}

fn render_card(out: &mut String, ctx: &PageContext, pattern: &Pattern) {
    let href = ctx.link(&format!("/pattern/{}", pattern.id), &[]);
    let _ = write!(
        out,
        r#"<a href="{href}" class="pattern-link">
<div class="pattern-card">
<div class="card-header">
<span class="card-category">{category}</span>
<span class="card-difficulty {difficulty}">{difficulty}</span>
</div>
<h3 class="card-title">{title}</h3>
<p class="card-description">{description}</p>
<div class="card-footer"><span class="card-link">Learn more →</span></div>
</div>
</a>
"#,
        href = escape(&href),
        category = escape(pattern.category.label()),
        difficulty = pattern.difficulty.label(),
        title = escape(&pattern.title),
        description = escape(&pattern.description),
    );
}
