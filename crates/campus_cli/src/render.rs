//! Text and JSON output for CLI commands.

use campus_core::index::GroupIndex;
use campus_core::projection::article::{outline, reading_time_minutes, related, RELATED_LIMIT};
use campus_core::projection::calendar::kinds_for_date;
use campus_core::projection::stats::{CatalogStats, FilterOptions};
use campus_core::{
    Article, Catalog, ListResult, ListStatus, PageLink, PageMeta, Resource, TagCloudEntry,
};
use serde::Serialize;
use serde_json::json;

fn print_json<V: Serialize + ?Sized>(value: &V) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn resource_line(resource: &Resource) -> String {
    let date = resource
        .date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "----------".to_string());
    format!(
        "{:>4}  {}  {:<8} {}",
        resource.id, date, resource.subject_code, resource.title
    )
}

pub fn article_line(article: &Article) -> String {
    format!(
        "{:>4}  {}  [{}] {}",
        article.id, article.date, article.category, article.title
    )
}

pub fn list<T: Serialize>(
    result: &ListResult<'_, T>,
    json: bool,
    line: fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_json(result);
    }

    if result.status == ListStatus::NoResults {
        println!(
            "No results ({} items in catalog). Try different filters.",
            result.total_in_catalog
        );
        return Ok(());
    }

    for item in &result.items {
        println!("{}", line(item));
    }
    println!();
    println!("{}", pager_line(&result.meta));
    Ok(())
}

fn pager_line(meta: &PageMeta) -> String {
    let mut parts = Vec::with_capacity(meta.window.len() + 2);
    if meta.has_prev {
        parts.push("<".to_string());
    }
    for link in &meta.window {
        parts.push(match link {
            PageLink::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        });
    }
    if meta.has_next {
        parts.push(">".to_string());
    }
    format!(
        "page {}/{} ({} matches)  {}",
        meta.current_page,
        meta.total_pages,
        meta.total_items,
        parts.join(" ")
    )
}

pub fn tag_cloud(entries: &[TagCloudEntry], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(entries);
    }
    if entries.is_empty() {
        println!("No tags.");
    }
    for entry in entries {
        println!("{:<24} {:>3}  size-{}", entry.tag, entry.count, entry.size);
    }
    Ok(())
}

pub fn calendar_day(
    key: &str,
    items: &[&Resource],
    index: &GroupIndex<'_, String, Resource>,
    json: bool,
) -> anyhow::Result<()> {
    let kinds = kinds_for_date(index, key);
    if json {
        return print_json(&json!({ "date": key, "kinds": kinds, "items": items }));
    }

    if items.is_empty() {
        println!("{key}: no scheduled resources");
        return Ok(());
    }
    let labels: Vec<&str> = kinds.iter().map(|kind| kind.label()).collect();
    println!("{key}: {}", labels.join(", "));
    for resource in items {
        println!("{}", resource_line(resource));
    }
    Ok(())
}

pub fn resource_detail(resource: &Resource, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(resource);
    }

    println!("{} ({} {})", resource.title, resource.subject_code, resource.semester);
    if !resource.day.is_empty() {
        println!("Day: {}", resource.day);
    }
    let body = if resource.full_description.is_empty() {
        &resource.description
    } else {
        &resource.full_description
    };
    if !body.is_empty() {
        println!();
        println!("{body}");
    }
    let links = resource.action_links();
    if !links.is_empty() {
        println!();
        for link in links {
            println!("{:<16} {}", link.kind.label(), link.url);
        }
    }
    Ok(())
}

pub fn article_detail(
    catalog: &Catalog<Article>,
    article: &Article,
    json: bool,
) -> anyhow::Result<()> {
    let minutes = reading_time_minutes(&article.content);
    let headings = outline(&article.content);
    let related = related(catalog, article, RELATED_LIMIT);

    if json {
        return print_json(&json!({
            "article": article,
            "reading_time_minutes": minutes,
            "outline": headings,
            "related": related,
        }));
    }

    println!("{}", article.title);
    println!(
        "{} | {} | {} | {} min read",
        article.author, article.date, article.category, minutes
    );
    if !article.tags.is_empty() {
        println!("Tags: {}", article.tags.join(", "));
    }
    if !headings.is_empty() {
        println!();
        for heading in &headings {
            let indent = if heading.level == 3 { "    " } else { "  " };
            println!("{indent}#{} {}", heading.anchor, heading.text);
        }
    }
    if !related.is_empty() {
        println!();
        println!("Related:");
        for other in related {
            println!("{}", article_line(other));
        }
    }
    Ok(())
}

pub fn stats(stats: &CatalogStats, options: &FilterOptions, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&json!({ "stats": stats, "filter_options": options }));
    }

    println!("items: {}", stats.total_items);
    println!("subjects: {}", stats.distinct_subjects);
    println!("categories: {}", stats.distinct_categories);
    println!("days with items: {}", stats.days_with_items);
    let rows = [
        ("years", &options.years),
        ("semesters", &options.semesters),
        ("subjects", &options.subject_codes),
        ("categories", &options.categories),
    ];
    for (label, values) in rows {
        if !values.is_empty() {
            println!("{label}: {}", values.join(", "));
        }
    }
    Ok(())
}
