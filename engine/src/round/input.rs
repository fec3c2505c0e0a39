use super::types::Direction;

/// Privileged actions available only when the round was started with
/// cheats enabled. They mutate speed, length, score and heading outside
/// the normal movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheatAction {
    Stop,
    SpeedDown,
    SpeedUp,
    Shrink,
    Grow,
}

/// One pending input event, collected by the driver between ticks and
/// handed to the engine as a batch in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Cheat(CheatAction),
}
