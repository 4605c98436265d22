//! The mansion: a fixed binary tree of rooms
//!
//! Rooms live in an arena owned by [`Mansion`] and refer to their children by
//! [`RoomId`]. The map is assembled with [`MansionBuilder`] and is read-only
//! once built.

use crate::error::GameError;
use log::debug;
use std::fmt;

/// Index of a room inside its mansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "esquerda"),
            Direction::Right => write!(f, "direita"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub clue: String,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[cfg(test)]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// One room of a map description: name, clue and the record indices of its
/// left and right children
#[derive(Debug, Clone, Copy)]
pub struct RoomRecord {
    pub name: &'static str,
    pub clue: &'static str,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl RoomRecord {
    pub const fn new(
        name: &'static str,
        clue: &'static str,
        left: Option<usize>,
        right: Option<usize>,
    ) -> Self {
        RoomRecord {
            name,
            clue,
            left,
            right,
        }
    }
}

#[derive(Debug, Default)]
pub struct MansionBuilder {
    rooms: Vec<Room>,
}

impl MansionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a room with no children
    pub fn create_room(&mut self, name: &str, clue: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: name.to_string(),
            clue: clue.to_string(),
            left: None,
            right: None,
        });
        id
    }

    pub fn link(
        &mut self,
        parent: RoomId,
        direction: Direction,
        child: RoomId,
    ) -> Result<(), GameError> {
        if child.0 >= self.rooms.len() {
            return Err(GameError::InvalidMap(format!("room #{} does not exist", child.0)));
        }
        let room = self.rooms.get_mut(parent.0).ok_or_else(|| {
            GameError::InvalidMap(format!("room #{} does not exist", parent.0))
        })?;
        debug!("Mansion: #{} {} -> #{}", parent.0, direction, child.0);
        match direction {
            Direction::Left => room.left = Some(child),
            Direction::Right => room.right = Some(child),
        }
        Ok(())
    }

    /// Freeze the map; the first room created is the entrance
    pub fn build(self) -> Result<Mansion, GameError> {
        if self.rooms.is_empty() {
            return Err(GameError::InvalidMap("mansion has no rooms".to_string()));
        }
        Ok(Mansion { rooms: self.rooms })
    }
}

#[derive(Debug)]
pub struct Mansion {
    rooms: Vec<Room>,
}

impl Mansion {
    /// Build a mansion from a record list; record 0 is the entrance
    pub fn from_records(records: &[RoomRecord]) -> Result<Mansion, GameError> {
        let mut builder = MansionBuilder::new();
        let ids: Vec<RoomId> = records
            .iter()
            .map(|r| builder.create_room(r.name, r.clue))
            .collect();

        for (parent, record) in ids.iter().zip(records) {
            let links = [
                (Direction::Left, record.left),
                (Direction::Right, record.right),
            ];
            for (direction, target) in links {
                if let Some(index) = target {
                    let child = ids.get(index).copied().ok_or_else(|| {
                        GameError::InvalidMap(format!(
                            "'{}' links {} to missing record {}",
                            record.name, direction, index
                        ))
                    })?;
                    builder.link(*parent, direction, child)?;
                }
            }
        }

        let mansion = builder.build()?;
        debug!("Mansion built with {} rooms", mansion.len());
        Ok(mansion)
    }

    pub fn entrance(&self) -> RoomId {
        RoomId(0)
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look a room up by name
    #[cfg(test)]
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_file::MANSION_ROOMS;
    use test_log::test;

    #[test]
    fn test_default_mansion_shape() {
        let mansion = Mansion::from_records(MANSION_ROOMS).unwrap();
        assert_eq!(mansion.len(), 5);

        let hall = mansion.room(mansion.entrance());
        assert_eq!(hall.name, "Hall de Entrada");
        assert_eq!(hall.clue, "pegadas de lama");

        let sala = mansion.room(hall.child(Direction::Left).unwrap());
        let biblioteca = mansion.room(hall.child(Direction::Right).unwrap());
        assert_eq!(sala.name, "Sala de Estar");
        assert_eq!(biblioteca.name, "Biblioteca");
        assert!(biblioteca.is_leaf());

        let cozinha = mansion.room(sala.child(Direction::Left).unwrap());
        let jardim = mansion.room(sala.child(Direction::Right).unwrap());
        assert_eq!(cozinha.clue, "faca faltando");
        assert_eq!(jardim.clue, "terra remexida");
        assert!(cozinha.is_leaf());
        assert!(jardim.is_leaf());
    }

    #[test]
    fn test_builder_links_rooms() {
        let mut builder = MansionBuilder::new();
        let porao = builder.create_room("Porão", "vela apagada");
        let sotao = builder.create_room("Sótão", "baú aberto");
        builder.link(porao, Direction::Right, sotao).unwrap();
        let mansion = builder.build().unwrap();

        let entrance = mansion.room(mansion.entrance());
        assert_eq!(entrance.child(Direction::Right), Some(sotao));
        assert_eq!(entrance.child(Direction::Left), None);
        assert_eq!(mansion.find_room("Sótão"), Some(sotao));
        assert_eq!(mansion.find_room("Cozinha"), None);
    }

    #[test]
    fn test_missing_link_target_is_rejected() {
        let records = [RoomRecord::new("Hall", "pista", Some(3), None)];
        let err = Mansion::from_records(&records).unwrap_err();
        assert!(matches!(err, GameError::InvalidMap(_)));
    }

    #[test]
    fn test_empty_mansion_is_rejected() {
        assert!(Mansion::from_records(&[]).is_err());
    }
}
