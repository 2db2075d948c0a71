use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::dto::response::{CoverCandidate, ExternalBook},
};

/// External catalog seam: cover candidates and title search. Lookups are
/// best-effort; a missing cover is never worth failing a book write over.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoverSource: Send + Sync {
    /// First plausible cover for a title/author pair, if the catalog has one.
    async fn first_cover(&self, title: &str, author: &str) -> Option<String>;
    async fn search_covers(&self, title: &str, author: &str) -> AppResult<Vec<CoverCandidate>>;
    async fn search_books(&self, query: &str) -> AppResult<Vec<ExternalBook>>;
}

pub struct OpenLibraryCovers {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    title: Option<String>,
    author_name: Option<Vec<String>>,
    cover_i: Option<i64>,
    first_publish_year: Option<i64>,
    first_sentence: Option<Vec<String>>,
}

impl OpenLibraryCovers {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.open_library_url.clone(),
        }
    }

    async fn search(&self, query: &str, limit: u32) -> AppResult<Vec<SearchDoc>> {
        let url = format!("{}/search.json", self.base_url);
        let limit = limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|err| AppError::InternalError(format!("catalog request failed: {}", err)))?;

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|err| AppError::InternalError(format!("catalog response invalid: {}", err)))?;

        Ok(parsed.docs)
    }
}

#[async_trait]
impl CoverSource for OpenLibraryCovers {
    async fn first_cover(&self, title: &str, author: &str) -> Option<String> {
        let query = format!("{} {}", title, author);
        let docs = self.search(&query, 5).await.ok()?;

        docs.iter().find_map(|doc| doc.cover_i.map(cover_url))
    }

    async fn search_covers(&self, title: &str, author: &str) -> AppResult<Vec<CoverCandidate>> {
        let query = format!("{} {}", title, author);
        let docs = self.search(&query, 5).await?;

        Ok(docs_to_candidates(docs))
    }

    async fn search_books(&self, query: &str) -> AppResult<Vec<ExternalBook>> {
        let docs = self.search(query, 10).await?;

        Ok(docs_to_books(docs))
    }
}

fn cover_url(cover_id: i64) -> String {
    format!("https://covers.openlibrary.org/b/id/{}-L.jpg", cover_id)
}

fn docs_to_candidates(docs: Vec<SearchDoc>) -> Vec<CoverCandidate> {
    docs.into_iter()
        .filter_map(|doc| {
            let cover_id = doc.cover_i?;
            Some(CoverCandidate {
                id: format!("ol-{}", cover_id),
                url: cover_url(cover_id),
                title: doc.title.unwrap_or_default(),
                author: doc.author_name.and_then(|names| names.into_iter().next()),
            })
        })
        .collect()
}

fn docs_to_books(docs: Vec<SearchDoc>) -> Vec<ExternalBook> {
    docs.into_iter()
        .filter_map(|doc| {
            let title = doc.title?;
            Some(ExternalBook {
                title,
                author: doc
                    .author_name
                    .as_ref()
                    .and_then(|names| names.first().cloned())
                    .unwrap_or_else(|| "Unknown".to_string()),
                cover_url: doc.cover_i.map(cover_url),
                description: doc
                    .first_sentence
                    .and_then(|sentences| sentences.into_iter().next()),
                published_date: doc.first_publish_year.map(|year| year.to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_docs() -> Vec<SearchDoc> {
        let json = r#"{
            "docs": [
                {
                    "title": "Moby Dick",
                    "author_name": ["Herman Melville"],
                    "cover_i": 12345,
                    "first_publish_year": 1851,
                    "first_sentence": ["Call me Ishmael."]
                },
                {
                    "title": "Obscure Pamphlet"
                }
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        parsed.docs
    }

    #[test]
    fn candidates_skip_docs_without_covers() {
        let candidates = docs_to_candidates(sample_docs());

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "ol-12345");
        assert_eq!(
            candidates[0].url,
            "https://covers.openlibrary.org/b/id/12345-L.jpg"
        );
        assert_eq!(candidates[0].author.as_deref(), Some("Herman Melville"));
    }

    #[test]
    fn books_default_missing_authors_to_unknown() {
        let books = docs_to_books(sample_docs());

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].author, "Herman Melville");
        assert_eq!(books[0].description.as_deref(), Some("Call me Ishmael."));
        assert_eq!(books[0].published_date.as_deref(), Some("1851"));
        assert_eq!(books[1].author, "Unknown");
        assert!(books[1].cover_url.is_none());
    }
}
