use crate::core::{
    config::PromptConfig,
    error::Result,
    facts::PromptFacts,
    git::{GitCli, VcsProbe},
    renderer::Renderer,
    symbols::Symbols,
    theme::Theme,
};
use crate::segments::assemble;
use log::debug;
use std::io::Write;

/// Render the prompt line for the current directory
pub fn build_prompt(config: &PromptConfig, probe: &dyn VcsProbe) -> Result<String> {
    let theme = Theme::from_preset(config.theme);
    let symbols = Symbols::default();

    let facts = PromptFacts::gather(config.home.as_deref(), probe)?;
    Ok(render_facts(&facts, config, &theme, &symbols))
}

/// Assemble and render already-gathered facts
pub fn render_facts(
    facts: &PromptFacts,
    config: &PromptConfig,
    theme: &Theme,
    symbols: &Symbols,
) -> String {
    let segments = assemble(facts, &config.exit_code, theme, symbols);
    debug!("rendering {} segments for {}", segments.len(), config.flavor);

    Renderer::new(config.flavor, symbols, theme.shell_bg).render(&segments)
}

pub fn execute_prompt(config: &PromptConfig) -> Result<()> {
    let line = build_prompt(config, &GitCli::new())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(line.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
