//! One complete play-through: exploration followed by the verdict

use crate::case_file::{MANSION_ROOMS, SUSPECT_LINKS};
use crate::console_trait::{Console, InputCursor};
use crate::error::GameError;
use crate::exploration::{Exploration, ExplorationReport};
use crate::mansion::Mansion;
use crate::settings::Settings;
use crate::suspects::SuspectTable;
use crate::verdict::{run_verdict, Verdict};
use log::debug;

pub const BANNER: &str = "==== DETECTIVE QUEST – CAPÍTULO FINAL ====";

#[derive(Debug)]
pub struct Game {
    pub settings: Settings,
    pub mansion: Mansion,
    pub suspects: SuspectTable,
}

/// How a play-through ended
#[derive(Debug)]
pub struct Outcome {
    pub exploration: ExplorationReport,
    pub verdict: Verdict,
}

impl Game {
    /// Set up the fixed case
    pub fn new(settings: Settings) -> Result<Game, GameError> {
        let suspects = SuspectTable::from_pairs(SUSPECT_LINKS);
        let mansion = Mansion::from_records(MANSION_ROOMS)?;
        debug!(
            "Case ready: {} rooms, {} clue links",
            mansion.len(),
            suspects.len()
        );
        Ok(Game {
            settings,
            mansion,
            suspects,
        })
    }

    pub fn play(&self, console: &mut dyn Console) -> Result<Outcome, GameError> {
        if self.settings.show_banner {
            console.println(BANNER)?;
        }

        // One cursor for both phases: text after the leaving choice is the
        // accusation.
        let mut input = InputCursor::new();
        let exploration =
            Exploration::new(&self.mansion, &self.suspects).run(console, &mut input)?;
        let verdict = run_verdict(
            console,
            &mut input,
            &exploration.clues,
            &self.suspects,
            &self.settings,
        )?;
        console.flush()?;

        Ok(Outcome {
            exploration,
            verdict,
        })
    }
}
