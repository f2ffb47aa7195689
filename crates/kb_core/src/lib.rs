//! Knowledge base core: article catalog, filtering, and view-model helpers.
mod article;
mod effect;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use article::{builtin_catalog, Article, ArticleId, Category};
pub use effect::Effect;
pub use filter::{filter, filter_by_keys, title_for, CategoryFilter, ALL_KEY};
pub use msg::Msg;
pub use state::{AppState, FilterState};
pub use update::update;
pub use view_model::{
    diff, AppViewModel, CardView, DisplayChange, FilterButtonView, SidebarEntryView,
};
