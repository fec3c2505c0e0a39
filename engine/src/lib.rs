pub mod config;
pub mod logger;
pub mod round;
pub mod round_rng;
pub mod score;

pub use round::{
    Cell, CheatAction, Direction, EndReason, InputEvent, RoundEnd, RoundEngine, RoundSettings,
    RoundSnapshot, RoundStatus,
};
pub use round_rng::RoundRng;
pub use score::{HighScoreError, HighScoreStore};
