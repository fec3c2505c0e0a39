use snake_engine::{Cell, RoundEnd, RoundSnapshot};

use crate::driver::RoundPresenter;

/// Draws each frame as a character grid with a status line underneath.
/// Frames go to stdout directly; the logger is reserved for events.
pub struct TextPresenter;

impl TextPresenter {
    fn draw(frame: &RoundSnapshot) -> String {
        let head = frame.trail.last().copied();
        let mut out = String::new();
        for y in 0..frame.grid_size {
            for x in 0..frame.grid_size {
                let cell = Cell::new(x, y);
                let glyph = if Some(cell) == head {
                    '@'
                } else if frame.trail.contains(&cell) {
                    'o'
                } else if cell == frame.food {
                    '*'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "Score: {}  Speed: {}  Wrap: {}\n",
            frame.score,
            frame.tick_rate,
            if frame.wrap { "on" } else { "off" }
        ));
        out
    }
}

impl RoundPresenter for TextPresenter {
    async fn present_frame(&self, frame: RoundSnapshot) {
        print!("\n{}", Self::draw(&frame));
    }

    async fn present_round_over(&self, end: RoundEnd) {
        println!("\nRound over ({:?}). Final score: {}", end.reason, end.score);
    }
}
