use std::time::Duration;

use snake_engine::{InputEvent, RoundEnd, RoundEngine, RoundSnapshot, RoundStatus};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::interval;

/// Commands the input side feeds the driver. `Quit` may arrive at any
/// time and aborts the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverCommand {
    Input(InputEvent),
    Quit,
}

#[derive(Debug)]
pub struct RoundOutcome {
    /// `None` when the round was aborted by a quit.
    pub end: Option<RoundEnd>,
    pub quit: bool,
}

pub trait RoundPresenter: Send + Sync + 'static {
    fn present_frame(&self, frame: RoundSnapshot) -> impl Future<Output = ()> + Send;

    fn present_round_over(&self, end: RoundEnd) -> impl Future<Output = ()> + Send;
}

/// The speed cheat can push the rate to zero or below; pacing bottoms
/// out at one tick per second. The upper clamp keeps the interval
/// period non-zero however far the cheat is spammed.
pub fn tick_period(tick_rate: i32) -> Duration {
    Duration::from_millis((1000 / tick_rate.max(1) as u64).max(1))
}

/// Paces a round to completion: waits for the scheduled tick, drains
/// pending commands into a finite batch, advances the engine, forwards
/// the frame. The interval is rebuilt whenever a cheat changes the rate.
pub async fn run_round(
    mut engine: RoundEngine,
    commands: &mut mpsc::UnboundedReceiver<DriverCommand>,
    presenter: &impl RoundPresenter,
) -> RoundOutcome {
    let mut current_rate = engine.tick_rate();
    let mut timer = interval(tick_period(current_rate));
    timer.tick().await;

    loop {
        timer.tick().await;

        let mut batch = Vec::new();
        loop {
            match commands.try_recv() {
                Ok(DriverCommand::Input(event)) => batch.push(event),
                Ok(DriverCommand::Quit) | Err(TryRecvError::Disconnected) => {
                    return RoundOutcome {
                        end: None,
                        quit: true,
                    };
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        match engine.tick(&batch) {
            RoundStatus::Alive(frame) => {
                presenter.present_frame(frame).await;
                if engine.tick_rate() != current_rate {
                    current_rate = engine.tick_rate();
                    timer = interval(tick_period(current_rate));
                    timer.tick().await;
                }
            }
            RoundStatus::Dead(end) => {
                presenter.present_round_over(end).await;
                return RoundOutcome {
                    end: Some(end),
                    quit: false,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::{Direction, EndReason, RoundRng, RoundSettings};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct CountingPresenter {
        frames: Arc<AtomicUsize>,
    }

    impl RoundPresenter for CountingPresenter {
        async fn present_frame(&self, _frame: RoundSnapshot) {
            self.frames.fetch_add(1, Ordering::SeqCst);
        }

        async fn present_round_over(&self, _end: RoundEnd) {}
    }

    #[test]
    fn test_tick_period_from_rate() {
        assert_eq!(tick_period(10), Duration::from_millis(100));
        assert_eq!(tick_period(5), Duration::from_millis(200));
    }

    #[test]
    fn test_tick_period_clamps_non_positive_rates() {
        assert_eq!(tick_period(0), Duration::from_millis(1000));
        assert_eq!(tick_period(-3), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_runs_to_wall_collision() {
        let settings = RoundSettings {
            grid_size: 5,
            wrap: false,
            ..RoundSettings::default()
        };
        let engine = RoundEngine::start(settings, RoundRng::new(1)).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(DriverCommand::Input(InputEvent::Turn(Direction::Right)))
            .unwrap();

        let presenter = CountingPresenter::default();
        let outcome = run_round(engine, &mut rx, &presenter).await;

        let end = outcome.end.expect("round should have ended");
        assert_eq!(end.reason, EndReason::WallCollision);
        assert!(!outcome.quit);
        // At most four moves fit before the right wall on a 5-cell grid.
        assert!(presenter.frames.load(Ordering::SeqCst) <= 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_aborts_the_round() {
        let engine = RoundEngine::start(RoundSettings::default(), RoundRng::new(1)).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(DriverCommand::Input(InputEvent::Turn(Direction::Up)))
            .unwrap();
        tx.send(DriverCommand::Quit).unwrap();

        let presenter = CountingPresenter::default();
        let outcome = run_round(engine, &mut rx, &presenter).await;

        assert!(outcome.quit);
        assert!(outcome.end.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_counts_as_quit() {
        let engine = RoundEngine::start(RoundSettings::default(), RoundRng::new(1)).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel::<DriverCommand>();
        drop(tx);

        let presenter = CountingPresenter::default();
        let outcome = run_round(engine, &mut rx, &presenter).await;
        assert!(outcome.quit);
    }
}
