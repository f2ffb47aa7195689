//! Catalog supplier: reads article lists from RON or JSON files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use kb_core::{Article, ArticleId};
use kb_logging::{kb_debug, kb_info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid RON catalog: {0}")]
    Ron(String),
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog format {extension:?} (expected .ron or .json)")]
    UnsupportedFormat { extension: String },
    #[error("article id {0} appears more than once")]
    DuplicateId(ArticleId),
    #[error("article {id} has an empty {field}")]
    EmptyField { id: ArticleId, field: &'static str },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CatalogFile {
    articles: Vec<Article>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ron,
    Json,
}

pub fn load_catalog(path: &Path) -> Result<Vec<Article>, CatalogError> {
    let format = detect_format(path)?;
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = match format {
        Format::Ron => ron::from_str(&content).map_err(|err| CatalogError::Ron(err.to_string()))?,
        Format::Json => serde_json::from_str(&content)?,
    };
    validate(&file.articles)?;
    kb_info!(
        "Loaded {} articles from {:?}",
        file.articles.len(),
        path
    );
    Ok(file.articles)
}

fn detect_format(path: &Path) -> Result<Format, CatalogError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "ron" => Ok(Format::Ron),
        "json" => Ok(Format::Json),
        _ => Err(CatalogError::UnsupportedFormat { extension }),
    }
}

fn validate(articles: &[Article]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        if !seen.insert(article.id) {
            return Err(CatalogError::DuplicateId(article.id));
        }
        if article.title.is_empty() {
            return Err(CatalogError::EmptyField {
                id: article.id,
                field: "title",
            });
        }
        if article.excerpt.is_empty() {
            return Err(CatalogError::EmptyField {
                id: article.id,
                field: "excerpt",
            });
        }
    }
    kb_debug!("Catalog validated: {} unique ids", seen.len());
    Ok(())
}
