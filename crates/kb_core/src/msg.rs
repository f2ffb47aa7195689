#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box. The text is taken verbatim.
    QueryChanged(String),
    /// User picked a category from the filter bar.
    FilterButtonClicked(String),
    /// User picked a category from the sidebar list.
    SidebarCategoryClicked(String),
    /// Return to an empty query and the `all` category.
    ClearFilters,
    /// Fallback for unbound input.
    NoOp,
}
