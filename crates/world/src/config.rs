//! Tunables for the simulation.
use log::warn;

/// Simulation tunables.
///
/// Defaults describe the standard arena: a 1200x1200 nominal play area under
/// a 30x30 grid, and three rearrangement passes per tick.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub play_width: f64,
    pub play_height: f64,
    pub grid_cols: usize,
    pub grid_rows: usize,
    /// Upper bound on refresh-and-scan passes per overlap resolution.
    pub max_rearrange_iters: usize,
    pub enemy_speed: f64,
    pub player_speed: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            play_width: 1200.0,
            play_height: 1200.0,
            grid_cols: 30,
            grid_rows: 30,
            max_rearrange_iters: 3,
            enemy_speed: 70.0,
            player_speed: 250.0,
        }
    }
}

impl WorldConfig {
    /// Defaults, with environment overrides for the grid shape and the pass
    /// budget: `SWARM_GRID_COLS`, `SWARM_GRID_ROWS`,
    /// `SWARM_MAX_REARRANGE_ITERS`.
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        read_usize_env("SWARM_GRID_COLS", &mut config.grid_cols);
        read_usize_env("SWARM_GRID_ROWS", &mut config.grid_rows);
        read_usize_env("SWARM_MAX_REARRANGE_ITERS", &mut config.max_rearrange_iters);

        config
    }
}

fn read_usize_env(name: &str, dest: &mut usize) {
    let val = match std::env::var(name) {
        Ok(x) => x,
        Err(_) => return,
    };

    match val.parse::<usize>() {
        Ok(parsed) if parsed > 0 => *dest = parsed,
        _ => warn!("Invalid {} '{}', using default {}", name, val, dest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_arena_setup() {
        let config = WorldConfig::default();
        assert_eq!(config.grid_cols, 30);
        assert_eq!(config.grid_rows, 30);
        assert_eq!(config.max_rearrange_iters, 3);
        approx::assert_relative_eq!(config.play_width / config.grid_cols as f64, 40.0);
    }

    #[test]
    fn load_without_overrides_matches_defaults() {
        let loaded = WorldConfig::load_or_default();
        let defaults = WorldConfig::default();
        assert_eq!(loaded.grid_cols, defaults.grid_cols);
        assert_eq!(loaded.grid_rows, defaults.grid_rows);
        assert_eq!(loaded.max_rearrange_iters, defaults.max_rearrange_iters);
    }
}
