use std::fs;
use std::path::Path;

use crate::error::{LoadError, QuizError};

use super::catalog::Catalog;

/// Loads and validates a catalog file.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&json_content, path)
}

/// Parses catalog JSON. `origin` is only used in error messages.
pub fn parse_catalog<P: AsRef<Path>>(json_content: &str, origin: P) -> Result<Catalog, LoadError> {
    let path = origin.as_ref();

    let catalog: Catalog = serde_json::from_str(json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if catalog.is_empty() {
        return Err(LoadError::NoCategories {
            path: path.to_path_buf(),
        });
    }

    for content in &catalog.categories {
        let checked = if content.questions.is_empty() {
            Err(QuizError::EmptyQuiz(content.category.title.clone()))
        } else {
            content.questions.iter().try_for_each(|question| question.validate())
        };
        checked.map_err(|source| LoadError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(catalog)
}
