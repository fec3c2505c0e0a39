/// Fixed parameters of one round. Immutable once the round starts; the
/// speed cheat mutates the engine's live tick rate, not these settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSettings {
    pub grid_size: i32,
    pub tick_rate: i32,
    pub starting_length: i32,
    pub wrap: bool,
    pub cheats: bool,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_rate: 10,
            starting_length: 1,
            wrap: false,
            cheats: false,
        }
    }
}

impl RoundSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < 1 {
            return Err("Grid size must be at least 1".to_string());
        }
        if self.grid_size > 100 {
            return Err("Grid size must not exceed 100".to_string());
        }
        if self.tick_rate < 1 {
            return Err("Tick rate must be at least 1".to_string());
        }
        if self.tick_rate > 100 {
            return Err("Tick rate must not exceed 100".to_string());
        }
        if self.starting_length < 1 {
            return Err("Starting length must be at least 1".to_string());
        }
        if self.starting_length > self.grid_size * self.grid_size {
            return Err("Starting length must fit on the grid".to_string());
        }
        Ok(())
    }
}
