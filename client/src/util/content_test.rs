use super::*;

#[test]
fn headings_lists_and_tables_render() {
    let html = render_markdown("## Data Lake\n\n- Power BI\n- SQL\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<h2>Data Lake</h2>"));
    assert!(html.contains("<li>Power BI</li>"));
    assert!(html.contains("<table>"));
}

#[test]
fn embedded_html_is_kept() {
    let html = render_markdown("<div class=\"callout\">Tipp</div>\n");
    assert!(html.contains("<div class=\"callout\">Tipp</div>"));
}

