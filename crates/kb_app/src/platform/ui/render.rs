use kb_core::{AppViewModel, CardView, DisplayChange};

use super::constants::*;

/// Turns display changes into terminal lines. `previous` supplies the cards
/// being hidden, `next` the cards being shown.
pub fn render_changes(
    changes: &[DisplayChange],
    previous: Option<&AppViewModel>,
    next: &AppViewModel,
) -> Vec<String> {
    let mut lines = Vec::new();
    for change in changes {
        match change {
            DisplayChange::SetSectionTitle(title) => lines.push(format_section_title(title)),
            DisplayChange::SetActiveCategory(_) => lines.push(filter_bar(next)),
            DisplayChange::HideCard(id) => {
                let title = previous
                    .and_then(|view| find_card(view, *id))
                    .map(|card| card.title.as_str())
                    .unwrap_or_default();
                lines.push(format!("  - #{id} {title}"));
            }
            DisplayChange::ShowCard(id) => {
                if let Some(card) = find_card(next, *id) {
                    lines.extend(format_card(card));
                }
            }
            DisplayChange::SetNoResults(true) => lines.push(EMPTY_STATE.to_string()),
            DisplayChange::SetNoResults(false) => {}
        }
    }
    lines
}

/// Full rendering of the current view, independent of what was shown before.
pub fn render_page(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![
        PAGE_HEADING.to_string(),
        PAGE_SUBTITLE.to_string(),
        String::new(),
        filter_bar(view),
    ];
    lines.push(section_header(view));
    if view.no_results {
        lines.push(EMPTY_STATE.to_string());
    } else {
        lines.extend(view.cards.iter().flat_map(format_card));
    }
    lines
}

pub fn render_categories(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    lines.extend(view.sidebar.iter().map(|entry| {
        let marker = if entry.active { '>' } else { ' ' };
        format!("{marker} {} {} ({})", entry.icon, entry.label, entry.key)
    }));
    lines
}

pub fn section_header(view: &AppViewModel) -> String {
    format!(
        "{} ({} {})",
        format_section_title(&view.section_title),
        view.result_count,
        if view.result_count == 1 { "article" } else { "articles" }
    )
}

fn format_section_title(title: &str) -> String {
    format!("== {title} ==")
}

fn filter_bar(view: &AppViewModel) -> String {
    view.filters
        .iter()
        .map(|button| {
            if button.active {
                format!("[{}]", button.label)
            } else {
                button.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_card(card: &CardView) -> Vec<String> {
    vec![
        format!(
            "  + #{id} [{category}] {date}  {title}",
            id = card.id,
            category = card.category,
            date = card.date,
            title = card.title
        ),
        format!("      {}", card.excerpt),
        format!("      {READ_MORE} {}", card.link),
    ]
}

fn find_card(view: &AppViewModel, id: kb_core::ArticleId) -> Option<&CardView> {
    view.cards.iter().find(|card| card.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_core::{diff, update, AppState, Msg};
    use pretty_assertions::assert_eq;

    #[test]
    fn page_lists_all_cards_with_active_filter() {
        let view = AppState::new().view();
        let lines = render_page(&view);

        assert_eq!(lines[0], PAGE_HEADING);
        assert!(lines[3].starts_with("[All Articles] | Hardware | Software"));
        assert_eq!(lines[4], "== All Articles == (6 articles)");
        assert_eq!(lines.len(), 5 + 6 * 3);
    }

    #[test]
    fn empty_page_shows_empty_state() {
        let (state, _) = update(AppState::new(), Msg::QueryChanged("zzz-no-match".to_string()));
        let lines = render_page(&state.view());
        assert_eq!(lines.last().map(String::as_str), Some(EMPTY_STATE));
    }

    #[test]
    fn changes_render_hidden_titles_and_new_cards() {
        let before = AppState::new().view();
        let (state, _) = update(AppState::new(), Msg::FilterButtonClicked("printer".to_string()));
        let after = state.view();

        let lines = render_changes(&diff(Some(&before), &after), Some(&before), &after);
        assert_eq!(lines[0], "== Printer Issues ==");
        assert!(lines[1].contains("[Printer Issues]"));
        assert_eq!(lines[2], "  - #1 Computer Won't Turn On");
        assert_eq!(lines.len(), 2 + 5);
    }

    #[test]
    fn categories_mark_selection() {
        let (state, _) = update(
            AppState::new(),
            Msg::SidebarCategoryClicked("account".to_string()),
        );
        let lines = render_categories(&state.view());
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], "> 👤 Account Access (account)");
    }
}
