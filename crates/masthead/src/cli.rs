//! Non-interactive commands: interaction replay and config management

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use masthead_core::{CoreError, NavConfig, NavSnapshot, NavigationController, parse_script};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One applied interaction and the state it produced
#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub step: usize,
    pub interaction: String,
    pub changed: bool,
    pub state: NavSnapshot,
}

/// Read a script from `path` (`-` for stdin)
pub fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read script from stdin")?;
        return Ok(script);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))
}

/// Append inline `--step` lines after the script text, one per line.
/// A missing trailing newline is added, never an extra blank line, so parse
/// errors point at the line the user would count.
pub fn compose_script(script: Option<String>, steps: &[String]) -> String {
    let mut text = script.unwrap_or_default();
    for step in steps {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(step);
    }
    text
}

/// Wrap a core error with `what` and its suggestion, if it has one
pub fn with_suggestion(err: CoreError, what: &str) -> anyhow::Error {
    let context = match err.suggestion() {
        Some(hint) => format!("{what} ({hint})"),
        None => what.to_string(),
    };
    anyhow::Error::new(err).context(context)
}

/// Apply every interaction in `script`, recording the state after each step
pub fn replay(controller: &NavigationController, script: &str) -> Result<Vec<ReplayStep>> {
    let interactions =
        parse_script(script).map_err(|err| with_suggestion(err, "Invalid replay script"))?;
    info!(steps = interactions.len(), "Replaying interactions");

    let mut steps = Vec::with_capacity(interactions.len() + 1);
    steps.push(ReplayStep {
        step: 0,
        interaction: "(initial)".to_string(),
        changed: false,
        state: controller.snapshot(),
    });

    for (index, interaction) in interactions.into_iter().enumerate() {
        let description = interaction.to_string();
        let changed = controller.dispatch(interaction);
        debug!(step = index + 1, %description, changed, "Applied interaction");
        steps.push(ReplayStep {
            step: index + 1,
            interaction: description,
            changed,
            state: controller.snapshot(),
        });
    }

    Ok(steps)
}

/// One JSON object per line
pub fn steps_to_json_lines(steps: &[ReplayStep]) -> Result<String> {
    let mut out = String::new();
    for step in steps {
        out.push_str(&serde_json::to_string(step).context("Failed to serialize step")?);
        out.push('\n');
    }
    Ok(out)
}

pub fn steps_to_table(steps: &[ReplayStep]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "#", "Interaction", "Scrolled", "Theme", "Dropdown", "Menu", "Panel",
        ]);

    for step in steps {
        let state = &step.state;
        let interaction = if step.changed {
            Cell::new(&step.interaction).fg(Color::Cyan)
        } else {
            Cell::new(&step.interaction)
        };
        table.add_row(vec![
            Cell::new(step.step),
            interaction,
            Cell::new(state.scrolled),
            Cell::new(state.theme),
            Cell::new(label_or_dash(state.open_dropdown.as_ref())),
            Cell::new(if state.mobile_menu_open { "open" } else { "closed" }),
            Cell::new(label_or_dash(state.active_mobile_panel.as_ref())),
        ]);
    }
    table
}

fn label_or_dash(label: Option<&masthead_core::NavLabel>) -> String {
    label.map_or_else(|| "-".to_string(), ToString::to_string)
}

/// Write the default config to `path`; refuses to overwrite unless `force`
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    NavConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    info!(path = %path.display(), "Wrote default config");
    Ok(())
}

/// Describe a validated config for `config check`
pub fn describe_config(config: &NavConfig) -> String {
    let submenus = config
        .primary
        .iter()
        .chain(config.utility.iter())
        .filter(|e| e.has_submenu)
        .count();
    format!(
        "OK: '{}' with {} primary and {} utility entries ({} with submenus); back {} the dropdown",
        config.brand,
        config.primary.len(),
        config.utility.len(),
        submenus,
        if config.behavior.back_clears_dropdown {
            "clears"
        } else {
            "keeps"
        }
    )
}
