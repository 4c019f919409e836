use super::*;

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[test]
fn default_query_has_base_params_only() {
    let params = BlogQuery::default().to_postgrest_params();
    assert_eq!(param(&params, "published"), Some("eq.true"));
    assert_eq!(param(&params, "order"), Some("published_at.desc"));
    assert_eq!(param(&params, "offset"), Some("0"));
    assert_eq!(param(&params, "limit"), Some("10"));
    assert!(param(&params, "or").is_none());
    assert!(param(&params, "tags").is_none());
    assert!(param(&params, "categories.slug").is_none());
    assert!(!param(&params, "select").unwrap().contains("!inner"));
}

#[test]
fn page_three_offsets_by_two_pages() {
    let query = BlogQuery { page: 3, limit: 12, ..BlogQuery::default() };
    let params = query.to_postgrest_params();
    assert_eq!(param(&params, "offset"), Some("24"));
    assert_eq!(param(&params, "limit"), Some("12"));
}

#[test]
fn category_slug_uses_inner_embed_and_slug_filter() {
    let query = BlogQuery { category: Some("business-intelligence".into()), ..BlogQuery::default() };
    let params = query.to_postgrest_params();
    assert_eq!(param(&params, "categories.slug"), Some("eq.business-intelligence"));
    assert!(param(&params, "select").unwrap().contains("categories!inner(id,name,slug,description)"));
    assert!(param(&params, "category_id").is_none());
}

#[test]
fn numeric_category_filters_by_id() {
    let query = BlogQuery { category: Some("4".into()), ..BlogQuery::default() };
    let params = query.to_postgrest_params();
    assert_eq!(param(&params, "category_id"), Some("eq.4"));
    assert!(param(&params, "categories.slug").is_none());
}

#[test]
fn tag_uses_array_contains() {
    let query = BlogQuery { tag: Some("power-bi".into()), ..BlogQuery::default() };
    let params = query.to_postgrest_params();
    assert_eq!(param(&params, "tags"), Some("cs.{power-bi}"));
}

#[test]
fn search_matches_title_or_content() {
    let query = BlogQuery { search: Some("Data Warehouse".into()), ..BlogQuery::default() };
    let params = query.to_postgrest_params();
    assert_eq!(
        param(&params, "or"),
        Some("(title.ilike.*Data Warehouse*,content.ilike.*Data Warehouse*)")
    );
}

#[test]
fn search_strips_reserved_characters() {
    let query = BlogQuery { search: Some("a,b(c)*".into()), ..BlogQuery::default() };
    let params = query.to_postgrest_params();
    assert_eq!(param(&params, "or"), Some("(title.ilike.*abc*,content.ilike.*abc*)"));
}

#[test]
fn search_of_only_reserved_characters_adds_no_filter() {
    let query = BlogQuery { search: Some("(),".into()), ..BlogQuery::default() };
    assert!(param(&query.to_postgrest_params(), "or").is_none());
}

#[test]
fn combined_filters_are_all_present() {
    let query = BlogQuery {
        page: 2,
        limit: 10,
        category: Some("ki".into()),
        tag: Some("llm".into()),
        search: Some("agent".into()),
        author: Some("a-1".into()),
    };
    let params = query.to_postgrest_params();
    assert_eq!(param(&params, "offset"), Some("10"));
    assert_eq!(param(&params, "categories.slug"), Some("eq.ki"));
    assert_eq!(param(&params, "tags"), Some("cs.{llm}"));
    assert_eq!(param(&params, "or"), Some("(title.ilike.*agent*,content.ilike.*agent*)"));
    assert_eq!(param(&params, "author_id"), Some("eq.a-1"));
}

#[test]
fn from_pairs_normalizes_values() {
    let query = BlogQuery::from_pairs([
        ("page", "0"),
        ("limit", "500"),
        ("category", "  "),
        ("search", "  bi  "),
        ("unknown", "x"),
    ]);
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, MAX_LIMIT);
    assert_eq!(query.category, None);
    assert_eq!(query.search.as_deref(), Some("bi"));
}

#[test]
fn from_pairs_falls_back_on_garbage_numbers() {
    let query = BlogQuery::from_pairs([("page", "zwei"), ("limit", "-1")]);
    assert_eq!(query.page, DEFAULT_PAGE);
    assert_eq!(query.limit, DEFAULT_LIMIT);
}

#[test]
fn to_api_pairs_omits_defaults() {
    assert!(BlogQuery::default().to_api_pairs().is_empty());
    let query = BlogQuery { page: 2, tag: Some("bi".into()), ..BlogQuery::default() };
    assert_eq!(query.to_api_pairs(), vec![("page", "2".to_owned()), ("tag", "bi".to_owned())]);
}

#[test]
fn filter_changes_reset_page_but_page_change_keeps_filters() {
    let query = BlogQuery { page: 4, search: Some("bi".into()), ..BlogQuery::default() };
    let next = query.with_category(Some("dwh".into()));
    assert_eq!(next.page, 1);
    assert_eq!(next.search.as_deref(), Some("bi"));

    let paged = next.with_page(3);
    assert_eq!(paged.page, 3);
    assert_eq!(paged.category.as_deref(), Some("dwh"));

    let cleared = paged.with_search(Some(String::new()));
    assert_eq!(cleared.search, None);
    assert_eq!(cleared.page, 1);
}

#[test]
fn heading_prefers_known_category() {
    let categories = vec![Category { id: 1, name: "Data Warehouse".into(), slug: "dwh".into(), description: None }];
    let query = BlogQuery { category: Some("dwh".into()), ..BlogQuery::default() };
    let (title, description) = query.heading(&categories);
    assert_eq!(title, "Blog: Data Warehouse");
    assert!(description.starts_with("Artikel zum Thema Data Warehouse"));

    let search = BlogQuery { search: Some("KI".into()), ..BlogQuery::default() };
    assert_eq!(search.heading(&categories).0, "Suchergebnisse für \"KI\"");
    assert_eq!(BlogQuery::default().heading(&categories).0, BLOG_TITLE);
}

#[test]
fn empty_message_prefers_search() {
    let query = BlogQuery { search: Some("xyz".into()), tag: Some("t".into()), ..BlogQuery::default() };
    assert_eq!(query.empty_message(), "Keine Ergebnisse für \"xyz\" gefunden.");
    assert_eq!(BlogQuery::default().empty_message(), "Keine Blog-Beiträge gefunden.");
}

#[test]
fn post_by_slug_is_sanitized_and_single() {
    let params = post_by_slug_params("power-bi,(x)");
    assert_eq!(param(&params, "slug"), Some("eq.power-bix"));
    assert_eq!(param(&params, "published"), Some("eq.true"));
    assert_eq!(param(&params, "limit"), Some("1"));
}

#[test]
fn related_posts_exclude_current_and_share_category() {
    let params = related_posts_params(4, 17, 3);
    assert_eq!(param(&params, "category_id"), Some("eq.4"));
    assert_eq!(param(&params, "id"), Some("neq.17"));
    assert_eq!(param(&params, "limit"), Some("3"));
    assert_eq!(param(&params, "order"), Some("published_at.desc"));
}

#[test]
fn categories_are_ordered_by_name() {
    assert_eq!(param(&categories_params(), "order"), Some("name.asc"));
    assert_eq!(param(&sitemap_params(), "published"), Some("eq.true"));
}

#[test]
fn tag_strips_array_delimiters_and_separators() {
    let query = BlogQuery { tag: Some("bi},{ki".into()), ..BlogQuery::default() };
    assert_eq!(param(&query.to_postgrest_params(), "tags"), Some("cs.{biki}"));

    let only_delimiters = BlogQuery { tag: Some("{},".into()), ..BlogQuery::default() };
    assert!(param(&only_delimiters.to_postgrest_params(), "tags").is_none());
}

#[test]
fn percent_is_kept_in_search_terms() {
    let query = BlogQuery { search: Some("100%".into()), ..BlogQuery::default() };
    assert_eq!(param(&query.to_postgrest_params(), "or"), Some("(title.ilike.*100%*,content.ilike.*100%*)"));
}

#[test]
fn subscriber_lookup_is_by_lowercased_address() {
    let params = subscriber_by_email_params(" Anna@Example.de ");
    assert_eq!(param(&params, "email"), Some("eq.anna@example.de"));
    assert_eq!(param(&params, "limit"), Some("1"));
}

#[test]
fn encode_component_escapes_reserved_and_unicode() {
    assert_eq!(encode_component("power-bi_2.0~"), "power-bi_2.0~");
    assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_component("Künstliche"), "K%C3%BCnstliche");
}

#[test]
fn post_path_encodes_slug() {
    assert_eq!(post_path("power-bi"), "/blog/power-bi");
    assert_eq!(post_path("daten/über"), "/blog/daten%2F%C3%BCber");
}
