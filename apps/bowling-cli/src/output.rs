//! Rendering of final scores.

use bowling::{DomainError, Scorer, TenPinScorer};

use crate::config::{CliConfig, OutputFormat};
use crate::CliError;

pub fn render(scorer: &TenPinScorer, config: &CliConfig) -> Result<String, CliError> {
    match config.format {
        OutputFormat::Text => render_text(scorer, config.frames).map_err(CliError::from),
        OutputFormat::Json => {
            let board = scorer.scoreboard(config.frames).unwrap_or_default();
            let mut out = serde_json::to_string_pretty(&board)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(scorer: &TenPinScorer, frames: bool) -> Result<String, DomainError> {
    let mut out = String::new();
    for player in scorer.players().unwrap_or_default() {
        let score = scorer.player_score(&player)?;
        out.push_str(&format!("Player {player} scored {score}\n"));
        if frames {
            if let Some(line) = scorer.frame_scores(&player)? {
                let line: Vec<String> = line.iter().map(u16::to_string).collect();
                out.push_str(&format!("  frames: {}\n", line.join(" ")));
            }
        }
    }
    Ok(out)
}
