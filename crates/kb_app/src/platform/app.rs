use std::io::{BufRead, Write};

use anyhow::Context;
use kb_core::{diff, update, AppState, AppViewModel, Msg};
use kb_logging::{kb_info, kb_trace, kb_warn, next_event_turn};

use super::effects::EffectRunner;
use super::ui::constants::{HELP, PROMPT};
use super::ui::input::{parse_command, Command};
use super::ui::render;

/// Seeds the filter from command-line flags before anything is rendered.
pub fn with_initial_filter(
    mut state: AppState,
    query: Option<&str>,
    category: Option<&str>,
) -> AppState {
    if let Some(query) = query {
        state = update(state, Msg::QueryChanged(query.to_string())).0;
    }
    if let Some(category) = category {
        state = update(state, Msg::FilterButtonClicked(category.to_string())).0;
    }
    // The first render is a full page, so nothing is pending.
    state.consume_dirty();
    state
}

/// Applies the requested filter once and prints the result.
pub fn run_once<W: Write>(
    state: AppState,
    query: Option<&str>,
    category: Option<&str>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let state = with_initial_filter(state, query, category);
    kb_info!(
        "Query {:?} in {} matched {} articles",
        state.filter_state().query(),
        state.filter_state().category().key(),
        state.visible_ids().len()
    );

    if json {
        let text = serde_json::to_string_pretty(&state.visible_articles())
            .context("serializing articles")?;
        writeln!(out, "{text}")?;
    } else {
        write_lines(out, &render::render_page(&state.view()))?;
    }
    Ok(())
}

/// Line-driven session: every input line is one event turn.
pub fn run_interactive<R: BufRead, W: Write>(
    state: AppState,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut handler = AppEventHandler::new(state);
    write_lines(out, &handler.initial_render())?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line).context("reading input")? == 0 {
            writeln!(out)?;
            break;
        }
        let turn = next_event_turn();
        kb_trace!("turn={} input={:?}", turn, line);

        match handler.handle_command(parse_command(&line)) {
            Some(lines) => write_lines(out, &lines)?,
            None => break,
        }
    }
    out.flush()?;
    Ok(())
}

struct AppEventHandler {
    state: AppState,
    /// The view as last printed; diffs are taken against it.
    shown: Option<AppViewModel>,
    effects: EffectRunner,
}

impl AppEventHandler {
    fn new(state: AppState) -> Self {
        Self {
            state,
            shown: None,
            effects: EffectRunner::new(),
        }
    }

    fn initial_render(&mut self) -> Vec<String> {
        let view = self.state.view();
        let lines = render::render_page(&view);
        self.shown = Some(view);
        lines
    }

    /// Returns the lines to print, or `None` when the session should end.
    fn handle_command(&mut self, command: Command) -> Option<Vec<String>> {
        let lines = match command {
            Command::Search(text) => self.dispatch_msg(Msg::QueryChanged(text)),
            Command::ClearSearch => self.dispatch_msg(Msg::QueryChanged(String::new())),
            Command::Filter(key) => self.dispatch_msg(Msg::FilterButtonClicked(key)),
            Command::Sidebar(key) => self.dispatch_msg(Msg::SidebarCategoryClicked(key)),
            Command::Reset => self.dispatch_msg(Msg::ClearFilters),
            Command::List => {
                let view = self.state.view();
                let lines = render::render_page(&view);
                self.shown = Some(view);
                lines
            }
            Command::Categories => render::render_categories(&self.state.view()),
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Blank => Vec::new(),
            Command::Unknown(text) => {
                kb_warn!("Unknown command {:?}", text);
                vec![format!("Unknown command: {text} (try `help`)")]
            }
            Command::Quit => return None,
        };
        Some(lines)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> Vec<String> {
        let state = std::mem::replace(&mut self.state, AppState::with_catalog(Vec::new()));
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        let mut lines = Vec::new();
        if was_dirty {
            let changes = diff(self.shown.as_ref(), &view);
            lines = render::render_changes(&changes, self.shown.as_ref(), &view);
            self.shown = Some(view.clone());
        }
        lines.extend(self.effects.run(effects, &view));
        lines
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn init_logging() {
        kb_logging::initialize_for_tests();
    }

    fn run_session(script: &str) -> String {
        let mut out = Vec::new();
        run_interactive(AppState::new(), Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_shot_prints_matching_cards() {
        init_logging();
        let mut out = Vec::new();
        run_once(AppState::new(), Some("wifi"), None, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("== All Articles == (1 article)"));
        assert!(text.contains("WiFi Connection Issues"));
        assert!(!text.contains("Printer Not Responding"));
    }

    #[test]
    fn one_shot_json_lists_articles() {
        init_logging();
        let mut out = Vec::new();
        run_once(AppState::new(), None, Some("software"), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let ids: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|article| article["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn interactive_starts_from_initial_filter() {
        init_logging();
        let state = with_initial_filter(AppState::new(), Some("wifi"), Some("network"));
        let mut out = Vec::new();
        run_interactive(state, Cursor::new("quit\n".to_string()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("== Network & Connectivity == (1 article)"));
        assert!(text.contains("WiFi Connection Issues"));
        assert!(!text.contains("Printer Not Responding"));
    }

    #[test]
    fn initial_filter_leaves_nothing_pending() {
        let mut state = with_initial_filter(AppState::new(), Some("guide"), None);
        assert!(!state.consume_dirty());
        assert_eq!(state.visible_ids(), vec![1, 2, 4]);
    }

    #[test]
    fn one_shot_empty_result() {
        init_logging();
        let mut out = Vec::new();
        run_once(AppState::new(), Some("zzz-no-match"), Some("all"), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No articles found matching your search."));
    }

    #[test]
    fn interactive_prints_only_differences() {
        init_logging();
        let text = run_session("search wifi\nfilter network\nquit\nsearch never-read\n");

        assert!(text.contains("  - #1 Computer Won't Turn On"));
        assert!(text.contains("== Network & Connectivity =="));
        assert!(!text.contains("never-read"));
        // WiFi is already on screen when the network filter is applied.
        assert_eq!(text.matches("  + #3 ").count(), 1);
    }

    #[test]
    fn sidebar_repeats_section_header() {
        init_logging();
        let text = run_session("sidebar printer\nsidebar printer\n");
        assert_eq!(text.matches("== Printer Issues == (1 article)").count(), 2);
    }

    #[test]
    fn handler_reports_unknown_and_quits() {
        init_logging();
        let mut handler = AppEventHandler::new(AppState::new());
        handler.initial_render();

        assert_eq!(
            handler.handle_command(Command::Unknown("dance".to_string())),
            Some(vec!["Unknown command: dance (try `help`)".to_string()])
        );
        assert_eq!(handler.handle_command(Command::Search(String::new())), Some(Vec::new()));
        assert_eq!(handler.handle_command(Command::Quit), None);
    }

    #[test]
    fn reset_brings_cards_back() {
        init_logging();
        let mut handler = AppEventHandler::new(AppState::new());
        handler.initial_render();
        handler.handle_command(Command::Search("zzz".to_string()));

        let lines = handler.handle_command(Command::Reset).unwrap();
        assert_eq!(lines.iter().filter(|line| line.starts_with("  + #")).count(), 6);
    }
}
