// tests/pipeline_e2e.rs
//
// raw CSV → categorize → labeled CSV → catalog, through the public API only.

use chrono::NaiveDate;
use news_categorizer::catalog::ListFilter;
use news_categorizer::{store, Article, ArticleCatalog, Categorizer};

fn raw(title: &str, summary: &str) -> Article {
    Article {
        title: title.into(),
        summary: summary.into(),
        url: format!("https://example.test/{}", title.replace(' ', "-")),
        source: "Times of India".into(),
        publication_date: NaiveDate::from_ymd_opt(2024, 9, 29).unwrap(),
        category: None,
    }
}

#[test]
fn files_flow_from_scrape_output_to_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let raw_path = tmp.path().join("news_articles.csv");
    let cat_path = tmp.path().join("categorized_news_articles.csv");

    store::write_raw(
        &[
            raw("Senate votes on new law", "Congress passed the policy today."),
            raw("New chip disappoints everyone", "Critics say the device hate it."),
        ],
        &raw_path,
    )
    .unwrap();

    let mut rows = store::read_articles(&raw_path).unwrap();
    assert!(rows.iter().all(|a| a.category.is_none()));
    Categorizer::new().categorize_all(&mut rows);
    store::write_categorized(&rows, &cat_path).unwrap();

    let header = std::fs::read_to_string(&cat_path).unwrap();
    assert!(header.starts_with("title,summary,url,source,publication_date,category\n"));

    let catalog = ArticleCatalog::load(&cat_path).unwrap();
    assert_eq!(catalog.len(), 2);

    let politics = catalog
        .list(&ListFilter {
            category: Some("Politics".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(politics.len(), 1);
    assert_eq!(politics[0].id, 1);
    assert_eq!(catalog.get(2).unwrap().category, "reviews or opinion-based");
}
