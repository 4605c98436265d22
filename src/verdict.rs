//! Verdict phase: the player names a suspect and the collected clues decide
//! whether the accusation stands

use crate::clues::ClueCollection;
use crate::console_trait::{Console, InputCursor};
use crate::error::GameError;
use crate::settings::Settings;
use crate::suspects::SuspectTable;
use log::{info, warn};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accused: String,
    pub matching_clues: usize,
    pub accepted: bool,
}

impl Verdict {
    /// Count the clues pointing at `accused`; the accusation stands with at
    /// least `threshold` of them
    pub fn judge(
        clues: &ClueCollection,
        table: &SuspectTable,
        accused: &str,
        threshold: usize,
    ) -> Verdict {
        let matching_clues = clues.count_matching(accused, table);
        Verdict {
            accused: accused.to_string(),
            matching_clues,
            accepted: matching_clues >= threshold,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.accepted {
            writeln!(
                f,
                "✔ Acusação aceita! Você encontrou {} pistas contra {}.",
                self.matching_clues, self.accused
            )?;
            write!(f, "Parabéns, detetive! Você resolveu o caso.")
        } else {
            writeln!(
                f,
                "✘ Acusação rejeitada! Apenas {} pista(s) apontam para {}.",
                self.matching_clues, self.accused
            )?;
            write!(f, "O detetive falhou em provar a culpa do suspeito.")
        }
    }
}

/// Show the collected clues, take the accusation and announce the verdict
pub fn run_verdict(
    console: &mut dyn Console,
    input: &mut InputCursor,
    clues: &ClueCollection,
    table: &SuspectTable,
    settings: &Settings,
) -> Result<Verdict, GameError> {
    console.println("\n==============================================")?;
    console.println("         FASE FINAL – ESCOLHA O CULPADO")?;
    console.println("==============================================")?;

    console.println("\nPistas coletadas:")?;
    for clue in clues.traverse() {
        console.println(&format!("- {}", clue))?;
    }

    if settings.list_suspects {
        let roster: Vec<&str> = table.suspects().collect();
        console.println(&format!("\nSuspeitos: {}", roster.join(", ")))?;
    }

    console.prompt("\nDigite o nome do suspeito que deseja acusar: ")?;
    let accused = read_accusation(console, input)?;

    let verdict = Verdict::judge(clues, table, &accused, settings.accusation_threshold);
    info!(
        "Accused '{}': {} matching clue(s), accepted={}",
        verdict.accused, verdict.matching_clues, verdict.accepted
    );

    console.println(&format!("\n{}", verdict))?;
    Ok(verdict)
}

/// Rest of the pending line (or the next non-blank one) with leading
/// whitespace removed; empty once input is exhausted
fn read_accusation(
    console: &mut dyn Console,
    input: &mut InputCursor,
) -> Result<String, GameError> {
    match input.rest_of_line(console)? {
        Some(name) => Ok(name),
        None => {
            warn!("Input closed before an accusation was made");
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_file::SUSPECT_LINKS;
    use crate::console_headless::HeadlessConsole;
    use test_log::test;

    fn collect(clues: &[&str]) -> ClueCollection {
        let mut collection = ClueCollection::new();
        for clue in clues {
            collection.insert(clue);
        }
        collection
    }

    #[test]
    fn test_three_clues_against_carlos_accepted() {
        let table = SuspectTable::from_pairs(SUSPECT_LINKS);
        let clues = collect(&["pegadas de lama", "livro arrancado", "terra remexida"]);

        let verdict = Verdict::judge(&clues, &table, "Carlos", 2);
        assert_eq!(verdict.matching_clues, 3);
        assert!(verdict.accepted);
        assert!(verdict.to_string().contains("Você encontrou 3 pistas contra Carlos."));
    }

    #[test]
    fn test_single_clue_against_marina_rejected() {
        let table = SuspectTable::from_pairs(SUSPECT_LINKS);
        let clues = collect(&["copo quebrado"]);

        let verdict = Verdict::judge(&clues, &table, "Marina", 2);
        assert_eq!(verdict.matching_clues, 1);
        assert!(!verdict.accepted);
        assert!(verdict
            .to_string()
            .contains("Apenas 1 pista(s) apontam para Marina."));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let table = SuspectTable::from_pairs(SUSPECT_LINKS);
        let clues = collect(&["copo quebrado", "faca faltando"]);

        assert!(Verdict::judge(&clues, &table, "Marina", 2).accepted);
        assert!(!Verdict::judge(&clues, &table, "Marina", 3).accepted);
    }

    #[test]
    fn test_run_verdict_lists_clues_in_order() {
        let table = SuspectTable::from_pairs(SUSPECT_LINKS);
        let clues = collect(&["pegadas de lama", "copo quebrado", "faca faltando"]);
        let mut console = HeadlessConsole::with_script(["", "   Marina"]);

        let verdict = run_verdict(
            &mut console,
            &mut InputCursor::new(),
            &clues,
            &table,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(verdict.accused, "Marina");
        assert!(verdict.accepted);

        let output = console.get_output();
        let listed: Vec<&str> = output
            .lines()
            .filter(|line| line.starts_with("- "))
            .collect();
        assert_eq!(
            listed,
            vec!["- copo quebrado", "- faca faltando", "- pegadas de lama"]
        );
        assert!(output.contains("Parabéns, detetive! Você resolveu o caso."));
        assert!(!output.contains("Suspeitos:"));
    }

    #[test]
    fn test_run_verdict_roster_and_closed_input() {
        let table = SuspectTable::from_pairs(SUSPECT_LINKS);
        let clues = collect(&["pegadas de lama"]);
        let settings = Settings {
            list_suspects: true,
            ..Settings::default()
        };
        let mut console = HeadlessConsole::new();

        let verdict = run_verdict(
            &mut console,
            &mut InputCursor::new(),
            &clues,
            &table,
            &settings,
        )
        .unwrap();
        assert_eq!(verdict.accused, "");
        assert_eq!(verdict.matching_clues, 0);
        assert!(!verdict.accepted);

        let output = console.get_output();
        assert!(output.contains("Suspeitos: Carlos, Marina"));
        assert!(output.contains("O detetive falhou em provar a culpa do suspeito."));
    }

    #[test]
    fn test_trailing_space_does_not_match() {
        let table = SuspectTable::from_pairs(SUSPECT_LINKS);
        let clues = collect(&["pegadas de lama", "livro arrancado"]);
        let mut console = HeadlessConsole::with_script(["Carlos "]);

        let verdict = run_verdict(
            &mut console,
            &mut InputCursor::new(),
            &clues,
            &table,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(verdict.matching_clues, 0);
    }

    #[test]
    fn test_accusation_uses_text_left_on_the_line() {
        let table = SuspectTable::from_pairs(SUSPECT_LINKS);
        let clues = collect(&["pegadas de lama", "terra remexida"]);
        let mut console = HeadlessConsole::with_script(["s  Carlos", "Marina"]);
        let mut input = InputCursor::new();
        assert_eq!(input.next_char(&mut console).unwrap(), Some('s'));

        let verdict = run_verdict(
            &mut console,
            &mut input,
            &clues,
            &table,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(verdict.accused, "Carlos");
        assert_eq!(verdict.matching_clues, 2);
        assert_eq!(console.remaining_input(), 1);
    }
}
