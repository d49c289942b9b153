use campus_core::{
    count_by, date_index, date_key, group_by, resolve_by_date_key, resolve_by_id,
    resolve_query_param, tag_cloud, tag_counts, tag_index, Article, Catalog, ItemId,
    ResolveError, Resource,
};
use chrono::NaiveDate;

const ARTICLES_DOC: &str = r#"{"articles": [
    {"id": 5, "title": "Exam prep", "category": "Study", "tags": ["exams", "tips"], "date": "2024-04-02"},
    {"id": "6", "title": "Club fair", "category": "Campus", "tags": ["events"], "date": "2024-04-02"},
    {"id": 7, "title": "Note taking", "category": "Study", "tags": ["tips", "Tips"], "date": "2024-04-09"},
    {"id": 8, "title": "Library hours", "category": "Campus", "tags": null, "date": "2024-04-10"}
]}"#;

const RESOURCES_DOC: &str = r#"{"resources": [
    {"id": 1, "year": 2024, "semester": 1, "subjectCode": "CS101", "title": "Loops",
     "date": "2024-03-04", "lectureNotesLink": "https://example.com/a.pdf", "quizLink": "https://example.com/q"},
    {"id": 2, "year": 2024, "semester": 1, "subjectCode": "CS102", "title": "Sets",
     "date": "2024-03-04T09:30:00", "activityLink": "https://example.com/act", "quizLink": "  "},
    {"id": 3, "year": 2024, "semester": 1, "subjectCode": "CS101", "title": "Review"}
]}"#;

fn articles() -> Catalog<Article> {
    Catalog::parse(ARTICLES_DOC).expect("article fixture parses")
}

fn resources() -> Catalog<Resource> {
    Catalog::parse(RESOURCES_DOC).expect("resource fixture parses")
}

#[test]
fn count_by_ranks_most_frequent_first() {
    struct Row(&'static str);
    let rows = [Row("a"), Row("b"), Row("b")];
    let counts = count_by(&rows, |row: &Row| [row.0]);

    assert_eq!(counts.get("a"), 1);
    assert_eq!(counts.get("b"), 2);
    assert_eq!(counts.get("z"), 0);
    assert_eq!(counts.top(1), vec![(&"b", 2)]);
    assert_eq!(counts.total(), 3);
}

#[test]
fn tag_buckets_sum_to_tag_occurrences() {
    let catalog = articles();
    let index = tag_index(&catalog);
    let occurrences: usize = catalog.iter().map(|article| article.tags.len()).sum();

    assert_eq!(index.total_entries(), occurrences);
    assert_eq!(tag_counts(&catalog).total(), occurrences);
    // Raw tag text keys the index.
    assert_eq!(index.get("tips").len(), 2);
    assert_eq!(index.get("Tips").len(), 1);
    assert!(index.get("missing").is_empty());
}

#[test]
fn buckets_keep_catalog_order() {
    let catalog = articles();
    let index = group_by(&catalog, |article: &Article| Some(article.category.clone()));
    let study: Vec<&str> = index
        .get("Study")
        .iter()
        .map(|article| article.id.as_str())
        .collect();
    assert_eq!(study, vec!["5", "7"]);
    assert_eq!(index.keys().collect::<Vec<_>>(), vec!["Campus", "Study"]);
}

#[test]
fn tag_cloud_limits_and_sizes_entries() {
    let catalog = articles();
    let cloud = tag_cloud(&catalog, 2);
    assert_eq!(cloud.len(), 2);
    assert_eq!(cloud[0].tag, "tips");
    assert_eq!(cloud[0].count, 2);
    assert_eq!(cloud[0].size, 1);
    // Ties keep first-seen order.
    assert_eq!(cloud[1].tag, "exams");
}

#[test]
fn date_index_skips_undated_items() {
    let catalog = resources();
    let index = date_index(&catalog);
    let day = date_key(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());

    assert_eq!(index.len(), 1);
    assert_eq!(resolve_by_date_key(&index, &day).len(), 2);
    assert!(resolve_by_date_key(&index, "2024-03-05").is_empty());
    assert_eq!(index.total_entries(), 2);
}

#[test]
fn numeric_and_string_ids_resolve_to_the_same_item() {
    let catalog = articles();
    let by_text = resolve_by_id(&catalog, "5").unwrap();
    let by_number = resolve_by_id(&catalog, 5u32).unwrap();
    assert!(std::ptr::eq(by_text, by_number));

    let stored_as_text = resolve_by_id(&catalog, 6i64).unwrap();
    assert_eq!(stored_as_text.title, "Club fair");
    assert_eq!(resolve_by_id(&catalog, "007").unwrap().title, "Note taking");
}

#[test]
fn unknown_id_is_not_found() {
    let catalog = articles();
    assert_eq!(
        resolve_by_id(&catalog, 99u32),
        Err(ResolveError::NotFound(ItemId::from(99u32)))
    );
}

#[test]
fn blank_or_absent_query_param_is_missing_id() {
    let catalog = resources();
    assert_eq!(
        resolve_query_param(&catalog, None),
        Err(ResolveError::MissingId)
    );
    assert_eq!(
        resolve_query_param(&catalog, Some("  ")),
        Err(ResolveError::MissingId)
    );
    assert_eq!(
        resolve_query_param(&catalog, Some("3")).map(|resource| resource.title.as_str()),
        Ok("Review")
    );
}
