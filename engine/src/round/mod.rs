mod engine;
mod input;
mod settings;
mod trail;
mod types;

pub use engine::RoundEngine;
pub use input::{CheatAction, InputEvent};
pub use settings::RoundSettings;
pub use trail::Trail;
pub use types::{Cell, Direction, EndReason, RoundEnd, RoundSnapshot, RoundStatus};
