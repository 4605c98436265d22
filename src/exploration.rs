//! Exploration phase: walking the mansion and collecting clues
//!
//! The player is always "at" one room. Every turn the room is narrated, its
//! clue goes into the collection (a no-op after the first visit) and the
//! player picks a direction or leaves for the verdict.

use crate::clues::ClueCollection;
use crate::console_trait::{Console, InputCursor};
use crate::error::GameError;
use crate::mansion::{Direction, Mansion, Room, RoomId};
use crate::suspects::SuspectTable;
use indexmap::IndexSet;
use log::{debug, info, warn};

/// Shown in place of a suspect when a clue is not in the table
pub const NO_SUSPECT: &str = "(nenhum suspeito)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Go(Direction),
    Leave,
}

impl Choice {
    /// `e`/`E` left, `d`/`D` right, `s`/`S` leave
    pub fn from_char(c: char) -> Option<Choice> {
        match c.to_ascii_lowercase() {
            'e' => Some(Choice::Go(Direction::Left)),
            'd' => Some(Choice::Go(Direction::Right)),
            's' => Some(Choice::Leave),
            _ => None,
        }
    }
}

/// Result of applying one choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(RoomId),
    Blocked(Direction),
    Finished,
}

/// What the player learns on entering a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery<'a> {
    pub room: &'a str,
    pub clue: &'a str,
    pub suspect: Option<&'a str>,
}

/// Everything the exploration hands over to the verdict
#[derive(Debug)]
pub struct ExplorationReport {
    /// Names of the rooms visited, in order of first visit
    pub visited: IndexSet<String>,
    pub clues: ClueCollection,
}

pub struct Exploration<'a> {
    mansion: &'a Mansion,
    table: &'a SuspectTable,
    current: RoomId,
    clues: ClueCollection,
    visited: IndexSet<RoomId>,
}

impl<'a> Exploration<'a> {
    /// Start at the mansion entrance with nothing collected
    pub fn new(mansion: &'a Mansion, table: &'a SuspectTable) -> Self {
        Exploration {
            mansion,
            table,
            current: mansion.entrance(),
            clues: ClueCollection::new(),
            visited: IndexSet::new(),
        }
    }

    pub fn current(&self) -> &'a Room {
        self.mansion.room(self.current)
    }

    #[cfg(test)]
    pub fn current_id(&self) -> RoomId {
        self.current
    }

    pub fn clues(&self) -> &ClueCollection {
        &self.clues
    }

    /// Collect the current room's clue and resolve its suspect
    pub fn enter_room(&mut self) -> Discovery<'a> {
        let room = self.current();
        if self.visited.insert(self.current) {
            info!("Entered '{}' for the first time", room.name);
        }
        self.clues.insert(&room.clue);

        Discovery {
            room: &room.name,
            clue: &room.clue,
            suspect: self.table.find(&room.clue),
        }
    }

    pub fn apply(&mut self, choice: Choice) -> Step {
        match choice {
            Choice::Leave => Step::Finished,
            Choice::Go(direction) => match self.current().child(direction) {
                Some(next) => {
                    debug!("Moving {} to '{}'", direction, self.mansion.room(next).name);
                    self.current = next;
                    Step::Moved(next)
                }
                None => {
                    debug!("No room {} of '{}'", direction, self.current().name);
                    Step::Blocked(direction)
                }
            },
        }
    }

    pub fn finish(self) -> ExplorationReport {
        let visited = self
            .visited
            .iter()
            .map(|id| self.mansion.room(*id).name.clone())
            .collect();
        ExplorationReport {
            visited,
            clues: self.clues,
        }
    }

    /// Drive the exploration from console input until the player leaves
    /// or input runs out. Text typed after the leaving choice stays in
    /// `input` for the verdict.
    pub fn run(
        mut self,
        console: &mut dyn Console,
        input: &mut InputCursor,
    ) -> Result<ExplorationReport, GameError> {
        loop {
            let discovery = self.enter_room();
            narrate(console, &discovery)?;

            let Some(choice) = read_choice(console, input)? else {
                warn!("Input closed during exploration, moving on to the verdict");
                break;
            };

            match choice.map(|c| self.apply(c)) {
                Some(Step::Finished) => break,
                Some(Step::Moved(_)) => {}
                Some(Step::Blocked(direction)) => {
                    console.println(&format!("Não há sala à {}!", direction))?;
                }
                None => console.println("Opção inválida.")?,
            }
        }

        console.println("\nEncerrando exploração...")?;
        let report = self.finish();
        info!(
            "Exploration over: {} rooms visited, {} clues collected",
            report.visited.len(),
            report.clues.len()
        );
        Ok(report)
    }
}

fn narrate(console: &mut dyn Console, discovery: &Discovery) -> Result<(), GameError> {
    console.println(&format!("\nVocê está em: {}", discovery.room))?;
    console.println(&format!("Pista encontrada: {}", discovery.clue))?;
    console.println(&format!(
        "Esta pista está associada ao suspeito: {}",
        discovery.suspect.unwrap_or(NO_SUSPECT)
    ))?;

    console.println("\nEscolha o caminho:")?;
    console.println("(e) Ir para a esquerda")?;
    console.println("(d) Ir para a direita")?;
    console.println("(s) Sair e ir para o julgamento")?;
    console.prompt("Opção: ")?;
    Ok(())
}

/// Read the next choice character, skipping whitespace and line breaks.
///
/// `Ok(None)` means input is exhausted; `Ok(Some(None))` is an
/// unrecognised character.
fn read_choice(
    console: &mut dyn Console,
    input: &mut InputCursor,
) -> Result<Option<Option<Choice>>, GameError> {
    let Some(c) = input.next_char(console)? else {
        return Ok(None);
    };
    debug!("Choice character: {:?}", c);
    Ok(Some(Choice::from_char(c)))
}
