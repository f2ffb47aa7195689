//! Category and free-text matching over a catalog.

use crate::{Article, Category};

/// Key of the sentinel category that places no restriction on articles.
pub const ALL_KEY: &str = "all";

const ALL_TITLE: &str = "All Articles";

/// The selected category. Keys outside the known set are kept verbatim and
/// simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    pub fn from_key(key: &str) -> Self {
        if key == ALL_KEY {
            return CategoryFilter::All;
        }
        match Category::from_key(key) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unrecognized(key.to_string()),
        }
    }

    /// Absent input means no restriction.
    pub fn from_optional(key: Option<&str>) -> Self {
        key.map_or(CategoryFilter::All, Self::from_key)
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_KEY,
            CategoryFilter::Only(category) => category.key(),
            CategoryFilter::Unrecognized(key) => key,
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            CategoryFilter::Only(category) => category.section_title(),
            CategoryFilter::All | CategoryFilter::Unrecognized(_) => ALL_TITLE,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Display heading for a category key; unknown keys fall back to "All Articles".
pub fn title_for(key: &str) -> &'static str {
    CategoryFilter::from_key(key).section_title()
}

/// Returns the articles that pass both the category and the query, in input order.
///
/// The query is compared case-insensitively as a plain substring of the
/// title or the excerpt. Whitespace in the query is significant.
pub fn filter<'a>(
    articles: &'a [Article],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Article> {
    matching_indices(articles, query, category)
        .into_iter()
        .map(|index| &articles[index])
        .collect()
}

/// Positions in `articles` of the entries [`filter`] would return.
pub(crate) fn matching_indices(
    articles: &[Article],
    query: &str,
    category: &CategoryFilter,
) -> Vec<usize> {
    let needle = fold_case(query);
    articles
        .iter()
        .enumerate()
        .filter(|(_, article)| {
            category.admits(article.category) && matches_query(article, &needle)
        })
        .map(|(index, _)| index)
        .collect()
}

/// [`filter`] over raw, possibly absent, inputs.
pub fn filter_by_keys<'a>(
    articles: &'a [Article],
    query: Option<&str>,
    category: Option<&str>,
) -> Vec<&'a Article> {
    filter(
        articles,
        query.unwrap_or_default(),
        &CategoryFilter::from_optional(category),
    )
}

/// `needle` must already be folded with [`fold_case`].
fn matches_query(article: &Article, needle: &str) -> bool {
    needle.is_empty()
        || fold_case(&article.title).contains(needle)
        || fold_case(&article.excerpt).contains(needle)
}

/// Lowercases one character at a time. `str::to_lowercase` maps a capital
/// sigma by its neighbours, which would make a prefix fold differently from
/// the longer string.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
