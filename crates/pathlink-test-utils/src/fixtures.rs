//! Reusable level fixtures.
//!
//! - [`classic_levels`]: the two hand-authored 10×10 boards the game ships.
//! - [`single_connection_level`]: one connection, for focused machine tests.
//! - [`corridor_level`]: two parallel connections on a small board.

use pathlink_core::{Color, ConnectionDef, LevelDef};

/// First shipped board: nine connections.
pub fn classic_level_one() -> LevelDef {
    LevelDef::new(vec![
        ConnectionDef::new(1, (1, 9), (9, 7), Color::RED),
        ConnectionDef::new(2, (8, 4), (9, 8), Color::BLUE),
        ConnectionDef::new(3, (8, 3), (1, 3), Color::GREEN),
        ConnectionDef::new(4, (2, 3), (7, 2), Color::RED),
        ConnectionDef::new(5, (3, 6), (6, 4), Color::BLUE),
        ConnectionDef::new(6, (4, 6), (5, 5), Color::GREEN),
        ConnectionDef::new(7, (1, 4), (3, 8), Color::RED),
        ConnectionDef::new(8, (1, 8), (5, 4), Color::BLUE),
        ConnectionDef::new(9, (9, 9), (2, 6), Color::GREEN),
    ])
}

/// Second shipped board: ten connections.
pub fn classic_level_two() -> LevelDef {
    LevelDef::new(vec![
        ConnectionDef::new(1, (0, 3), (8, 9), Color::RED),
        ConnectionDef::new(2, (0, 5), (4, 5), Color::BLUE),
        ConnectionDef::new(3, (1, 1), (8, 6), Color::GREEN),
        ConnectionDef::new(4, (1, 5), (3, 3), Color::RED),
        ConnectionDef::new(5, (1, 8), (7, 8), Color::BLUE),
        ConnectionDef::new(6, (2, 6), (7, 9), Color::GREEN),
        ConnectionDef::new(7, (2, 8), (4, 8), Color::RED),
        ConnectionDef::new(8, (4, 3), (5, 6), Color::BLUE),
        ConnectionDef::new(9, (6, 2), (8, 8), Color::GREEN),
        ConnectionDef::new(10, (7, 2), (7, 6), Color::RED),
    ])
}

/// Both shipped boards in play order.
pub fn classic_levels() -> Vec<LevelDef> {
    vec![classic_level_one(), classic_level_two()]
}

/// One connection from `(0, 0)` to `(4, 0)`.
pub fn single_connection_level() -> LevelDef {
    LevelDef::new(vec![ConnectionDef::new(1, (0, 0), (4, 0), Color::ORANGE)])
}

/// Two connections along rows 0 and 2 of a 5×5 board.
pub fn corridor_level() -> LevelDef {
    LevelDef::new(vec![
        ConnectionDef::new(1, (0, 0), (4, 0), Color::PURPLE),
        ConnectionDef::new(2, (0, 2), (4, 2), Color::BROWN),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_levels_have_expected_sizes() {
        let levels = classic_levels();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].len(), 9);
        assert_eq!(levels[1].len(), 10);
    }

    #[test]
    fn classic_endpoints_are_on_a_ten_by_ten_board() {
        for level in classic_levels() {
            for c in &level.connections {
                for cell in [c.start, c.end] {
                    assert!((0..10).contains(&cell.x) && (0..10).contains(&cell.y));
                }
            }
        }
    }
}
