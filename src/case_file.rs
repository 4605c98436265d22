//! The fixed case: mansion layout and clue → suspect pairings

use crate::mansion::RoomRecord;

/// Clue → suspect pairings, in table construction order
pub const SUSPECT_LINKS: &[(&str, &str)] = &[
    ("pegadas de lama", "Carlos"),
    ("copo quebrado", "Marina"),
    ("livro arrancado", "Carlos"),
    ("faca faltando", "Marina"),
    ("terra remexida", "Carlos"),
];

/// Mansion rooms; the first record is the entrance.
///
/// ```text
///            Hall de Entrada
///           /               \
///    Sala de Estar        Biblioteca
///     /        \
/// Cozinha     Jardim
/// ```
pub const MANSION_ROOMS: &[RoomRecord] = &[
    RoomRecord::new("Hall de Entrada", "pegadas de lama", Some(1), Some(2)),
    RoomRecord::new("Sala de Estar", "copo quebrado", Some(3), Some(4)),
    RoomRecord::new("Biblioteca", "livro arrancado", None, None),
    RoomRecord::new("Cozinha", "faca faltando", None, None),
    RoomRecord::new("Jardim", "terra remexida", None, None),
];
