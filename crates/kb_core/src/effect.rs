#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Bring the article section into view.
    ScrollToArticles,
}
