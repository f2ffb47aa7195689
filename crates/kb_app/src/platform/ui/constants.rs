pub const PAGE_HEADING: &str = "📚 Service Desk Knowledge Base";
pub const PAGE_SUBTITLE: &str = "Quick solutions and guides for common issues";
pub const EMPTY_STATE: &str = "No articles found matching your search.";
pub const READ_MORE: &str = "Read More →";
pub const PROMPT: &str = "kb> ";
pub const HELP: &str = "\
Commands:
  search <text>     filter by text (taken verbatim, spaces included)
  clear-search      empty the search box
  filter <key>      select a category from the filter bar
  sidebar <key>     select a category from the sidebar
  reset             clear the search and show all categories
  list              print the current articles
  categories        print the category list
  help              show this help
  quit              exit";
