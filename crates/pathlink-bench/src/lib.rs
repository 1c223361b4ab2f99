//! Benchmark profiles for the Pathlink engine.
//!
//! - [`stripe_level`]: one connection per even row of a square board
//! - [`stress_config`]: a [`SessionConfig`] wrapping a 64×64 stripe level
//! - [`stripe_script`]: the pointer ticks that draw every stripe to completion

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pathlink_core::{Color, ConnectionDef, LevelDef, PointerInput};
use pathlink_engine::SessionConfig;

/// Side length of the stress board.
pub const STRESS_SIZE: u32 = 64;

/// A `size`×`size` level with a horizontal connection on every even row.
///
/// Connection `i` runs from `(0, 2i)` to `(size-1, 2i)`, so the board can
/// be completed by sweeping each row left to right.
pub fn stripe_level(size: u32) -> LevelDef {
    let last = size as i32 - 1;
    let connections = (0..size as i32)
        .step_by(2)
        .enumerate()
        .map(|(i, row)| {
            let shade = (i * 37 % 256) as u8;
            ConnectionDef::new(
                i as u32 + 1,
                (0, row),
                (last, row),
                Color::rgb(shade, 255 - shade, 128),
            )
        })
        .collect();
    LevelDef::new(connections)
}

/// Session configuration for a single [`STRESS_SIZE`] stripe level.
pub fn stress_config() -> SessionConfig {
    let level = stripe_level(STRESS_SIZE);
    let mut cfg = SessionConfig::new(vec![level.clone()]);
    cfg.grid_size = STRESS_SIZE;
    cfg.max_connections = level.len();
    cfg
}

/// Per-tick input that draws every connection of a [`stripe_level`].
pub fn stripe_script(level: &LevelDef) -> Vec<PointerInput> {
    let mut ticks = Vec::new();
    for c in &level.connections {
        ticks.push(PointerInput::press(c.start));
        for x in c.start.x + 1..=c.end.x {
            ticks.push(PointerInput::hold((x, c.start.y).into()));
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlink_engine::PlaySession;

    #[test]
    fn stripe_script_completes_stress_board() {
        let level = stripe_level(STRESS_SIZE);
        let script = stripe_script(&level);
        let mut session = PlaySession::new(stress_config()).unwrap();
        for t in script {
            session.step(t).unwrap();
        }
        assert!(session.is_level_complete());
        assert!((session.fill_ratio() - 0.5).abs() < 1e-9);
    }
}
