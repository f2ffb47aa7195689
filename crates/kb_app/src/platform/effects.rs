use kb_core::{AppViewModel, Effect};
use kb_logging::kb_debug;

use super::ui;

/// Executes core effects against the terminal.
#[derive(Debug, Default)]
pub struct EffectRunner;

impl EffectRunner {
    pub fn new() -> Self {
        Self
    }

    /// Returns the lines to print for `effects`, given the freshly rendered view.
    pub fn run(&self, effects: Vec<Effect>, view: &AppViewModel) -> Vec<String> {
        effects
            .into_iter()
            .map(|effect| match effect {
                Effect::ScrollToArticles => {
                    kb_debug!("ScrollToArticles section={:?}", view.section_title);
                    ui::render::section_header(view)
                }
            })
            .collect()
    }
}
