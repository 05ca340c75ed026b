//! Catalog Module Tests
//!
//! Validates the retrieval layer feeding the suggestion engine.
//!
//! ## Test Scopes
//! - **Store**: Insertion, replacement, id generation, and ordering.
//! - **Coarse match**: Case-insensitive literal matching over title, author, and genres.
//! - **Loading**: JSON catalog files, including partial and Mongo-style documents.
//! - **Handlers**: Search, entry lookup, and health responses.
//! - **Pipeline**: Catalog retrieval through ranking.

#[cfg(test)]
mod tests {
    use crate::catalog::handlers::{handle_get_entry, handle_health, handle_search, SearchParams};
    use crate::catalog::memory::InMemoryCatalog;
    use crate::catalog::source::CandidateSource;
    use crate::catalog::types::CatalogEntry;
    use crate::config::SuggestLimits;
    use crate::suggest::ranker::SuggestionRanker;
    use crate::suggest::service::SuggestionService;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::Extension;
    use std::io::Write;

    fn entry(id: &str, title: &str, author: Option<&str>, genres: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: Some(title.to_string()),
            author: author.map(str::to_string),
            cover: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn sample_catalog() -> std::sync::Arc<InMemoryCatalog> {
        InMemoryCatalog::from_entries(vec![
            entry("1", "Naruto", Some("Masashi Kishimoto"), &["Action", "Ninja"]),
            entry("2", "One Piece", Some("Eiichiro Oda"), &["Adventure", "Pirates"]),
            entry("3", "Naruto Shippuden", Some("Masashi Kishimoto"), &["Action"]),
            entry("4", "Monster", Some("Naoki Urasawa"), &["Thriller"]),
            entry("5", "Boruto", Some("Ukyo Kodachi"), &["Naruto Sequel"]),
        ])
    }

    fn ids(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[test]
    fn test_insert_and_get() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty());

        let id = catalog.insert(entry("abc", "Berserk", Some("Kentaro Miura"), &[]));

        assert_eq!(id, "abc");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("abc").unwrap().title.as_deref(), Some("Berserk"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_insert_generates_id_when_missing() {
        let catalog = InMemoryCatalog::new();

        let first = catalog.insert(CatalogEntry {
            title: Some("Untitled Draft".to_string()),
            ..Default::default()
        });
        let second = catalog.insert(CatalogEntry::default());

        assert!(uuid::Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second);
        assert_eq!(catalog.get(&first).unwrap().id, first);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_replace_keeps_original_position() {
        let catalog = InMemoryCatalog::from_entries(vec![
            entry("a", "Blue Lock", None, &[]),
            entry("b", "Bleach", None, &[]),
        ]);

        catalog.insert(entry("a", "Blue Period", None, &[]));

        let matches = catalog.find_matches("bl").unwrap();
        assert_eq!(ids(&matches), vec!["a", "b"]);
        assert_eq!(matches[0].title.as_deref(), Some("Blue Period"));
        assert_eq!(catalog.len(), 2);
    }

    // ============================================================
    // COARSE MATCH TESTS
    // ============================================================

    #[test]
    fn test_find_matches_in_insertion_order() {
        let catalog = sample_catalog();

        let matches = catalog.find_matches("naru").unwrap();
        // title, title, genre
        assert_eq!(ids(&matches), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_find_matches_is_case_insensitive() {
        let catalog = sample_catalog();

        assert_eq!(ids(&catalog.find_matches("NARUTO").unwrap()), vec!["1", "3", "5"]);
        assert_eq!(ids(&catalog.find_matches("pIrAtEs").unwrap()), vec!["2"]);
    }

    #[test]
    fn test_find_matches_by_author() {
        let catalog = sample_catalog();

        assert_eq!(ids(&catalog.find_matches("urasawa").unwrap()), vec!["4"]);
        assert_eq!(ids(&catalog.find_matches("kishimoto").unwrap()), vec!["1", "3"]);
    }

    #[test]
    fn test_find_matches_treats_metacharacters_literally() {
        let catalog = InMemoryCatalog::from_entries(vec![
            entry("1", "Yotsuba&!", None, &[]),
            entry("2", "Dr. Stone", None, &[]),
            entry("3", "Drifters", None, &[]),
            entry("4", "(Not) a Manga", None, &[]),
        ]);

        assert_eq!(ids(&catalog.find_matches("dr.").unwrap()), vec!["2"]);
        assert_eq!(ids(&catalog.find_matches("&!").unwrap()), vec!["1"]);
        assert_eq!(ids(&catalog.find_matches("(not)").unwrap()), vec!["4"]);
        assert!(catalog.find_matches(".*").unwrap().is_empty());
        assert!(catalog.find_matches("[").unwrap().is_empty());
    }

    #[test]
    fn test_find_matches_empty_query() {
        let catalog = sample_catalog();
        assert!(catalog.find_matches("").unwrap().is_empty());
    }

    #[test]
    fn test_find_matches_ignores_missing_fields() {
        let catalog = InMemoryCatalog::from_entries(vec![CatalogEntry {
            id: "bare".to_string(),
            ..Default::default()
        }]);

        assert!(catalog.find_matches("anything").unwrap().is_empty());
    }

    #[test]
    fn test_coarse_match_caps_results() {
        let catalog = InMemoryCatalog::from_entries(
            (0..80).map(|i| entry(&i.to_string(), &format!("Dragon Ball {}", i), None, &[])),
        );

        let candidates = catalog.coarse_match("dragon", 50).unwrap();
        assert_eq!(candidates.len(), 50);
        assert_eq!(candidates[0].id, "0");
        assert_eq!(candidates[49].id, "49");
    }

    #[test]
    fn test_coarse_match_candidate_projection() {
        let catalog = InMemoryCatalog::from_entries(vec![CatalogEntry {
            id: "x".to_string(),
            title: None,
            author: Some("Naoki Urasawa".to_string()),
            cover: Some("/covers/x.png".to_string()),
            genres: vec![],
        }]);

        let candidates = catalog.coarse_match("urasawa", 50).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "");
        assert_eq!(candidates[0].author.as_deref(), Some("Naoki Urasawa"));
        assert_eq!(candidates[0].cover.as_deref(), Some("/covers/x.png"));
    }

    // ============================================================
    // LOADING TESTS
    // ============================================================

    #[test]
    fn test_load_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"_id": "m1", "title": "Naruto", "author": "Masashi Kishimoto", "cover": "/n.jpg", "genres": ["Action"]}},
                {{"id": "m2", "title": "Vagabond"}},
                {{"title": "Anonymous Zine"}}
            ]"#
        )
        .unwrap();

        let catalog = InMemoryCatalog::new();
        let count = catalog.load_json(file.path()).unwrap();

        assert_eq!(count, 3);
        assert_eq!(catalog.len(), 3);

        let naruto = catalog.get("m1").unwrap();
        assert_eq!(naruto.cover.as_deref(), Some("/n.jpg"));
        assert_eq!(naruto.genres, vec!["Action".to_string()]);

        let vagabond = catalog.get("m2").unwrap();
        assert!(vagabond.author.is_none());
        assert!(vagabond.genres.is_empty());

        let zine = catalog.find_matches("zine").unwrap();
        assert_eq!(zine.len(), 1);
        assert!(!zine[0].id.is_empty());
    }

    #[test]
    fn test_load_json_missing_file() {
        let catalog = InMemoryCatalog::new();
        let result = catalog.load_json(std::path::Path::new("/nonexistent/catalog.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_invalid_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let catalog = InMemoryCatalog::new();
        assert!(catalog.load_json(file.path()).is_err());
        assert!(catalog.is_empty());
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_search_with_limit() {
        let (status, axum::Json(body)) = handle_search(
            Query(SearchParams {
                q: " naru ".to_string(),
                limit: Some(2),
            }),
            Extension(sample_catalog()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.query, "naru");
        assert_eq!(body.total_count, 3);
        assert_eq!(body.count, 2);
        assert_eq!(ids(&body.results), vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_handle_search_empty_query() {
        let (status, axum::Json(body)) =
            handle_search(Query(SearchParams::default()), Extension(sample_catalog())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.total_count, 0);
        assert!(body.results.is_empty());
    }

    #[tokio::test]
    async fn test_handle_get_entry() {
        let catalog = sample_catalog();

        let (status, axum::Json(body)) =
            handle_get_entry(Path("2".to_string()), Extension(catalog.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.entry.unwrap().title.as_deref(), Some("One Piece"));

        let (status, axum::Json(body)) =
            handle_get_entry(Path("404".to_string()), Extension(catalog)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.entry.is_none());
    }

    #[tokio::test]
    async fn test_handle_health() {
        let axum::Json(body) = handle_health(Extension(sample_catalog())).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.entries, 5);
    }

    // ============================================================
    // PIPELINE TESTS
    // ============================================================

    #[test]
    fn test_catalog_to_suggestions() {
        let catalog = sample_catalog();
        let service = SuggestionService::new(
            catalog,
            SuggestionRanker::default(),
            SuggestLimits::default(),
        );

        let titles: Vec<String> = service
            .suggest("naru")
            .into_iter()
            .map(|s| s.title)
            .collect();

        // Boruto only matches on genre, so it trails both title matches
        assert_eq!(titles, vec!["Naruto", "Naruto Shippuden", "Boruto"]);
    }

    #[test]
    fn test_pipeline_author_match_and_empty_fields() {
        let service = SuggestionService::new(
            sample_catalog(),
            SuggestionRanker::default(),
            SuggestLimits::default(),
        );

        let result = service.suggest("oda");
        assert_eq!(result.len(), 2);
        // both authors contain "oda"; the shorter title is closer to the query
        assert_eq!(result[0].title, "Boruto");
        assert_eq!(result[0].author, "Ukyo Kodachi");
        assert_eq!(result[1].title, "One Piece");
        assert_eq!(result[1].author, "Eiichiro Oda");
        assert_eq!(result[1].cover, "");
    }
}
