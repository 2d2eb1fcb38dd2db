use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Tunables for one game. Serializable so a board setup can be stored or
/// shipped around as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid width in cells.
    pub grid_width: i32,
    /// Grid height in cells.
    pub grid_height: i32,
    /// Snake length at start and after every restart.
    pub initial_length: usize,
    /// Cell proximity radius for eating food. A head within strictly less
    /// than this many cells of the food on both axes eats it; 1 means exact
    /// cell match.
    pub food_tolerance: i32,
    /// Score awarded per food eaten.
    pub score_per_food: u32,
    /// Milliseconds between game ticks.
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_length: 3,
            food_tolerance: 1,
            score_per_food: 10,
            tick_interval_ms: 250,
        }
    }
}

impl GameConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// A cramped board for tests.
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject boards the engine cannot start on.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 2 || self.grid_height < 2 {
            bail!(
                "grid must be at least 2x2, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if self.initial_length == 0 {
            bail!("initial snake length must be at least 1");
        }
        if self.initial_length as i32 > self.grid_width / 2 + 1 {
            bail!(
                "initial snake length {} does not fit on a grid {} cells wide",
                self.initial_length,
                self.grid_width
            );
        }
        if self.food_tolerance < 1 {
            bail!("food tolerance must be at least 1");
        }
        if self.tick_interval_ms == 0 {
            bail!("tick interval must be nonzero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_length, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_grid_size() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_boards() {
        assert!(GameConfig::new(1, 10).validate().is_err());
        assert!(GameConfig {
            initial_length: 0,
            ..GameConfig::default()
        }
        .validate()
        .is_err());
        assert!(GameConfig {
            food_tolerance: 0,
            ..GameConfig::default()
        }
        .validate()
        .is_err());
        assert!(GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        }
        .validate()
        .is_err());
        assert!(GameConfig {
            initial_length: 30,
            ..GameConfig::default()
        }
        .validate()
        .is_err());
    }
}
