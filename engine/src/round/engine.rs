use crate::log;
use crate::round_rng::RoundRng;

use super::input::{CheatAction, InputEvent};
use super::settings::RoundSettings;
use super::trail::Trail;
use super::types::{Cell, Direction, EndReason, RoundEnd, RoundSnapshot, RoundStatus};

/// One round of snake, advanced by one `tick` per scheduling step.
///
/// The engine owns the whole round state and mutates it only inside
/// `tick`; pacing, input collection and rendering belong to the driver.
pub struct RoundEngine {
    settings: RoundSettings,
    rng: RoundRng,
    head: Cell,
    direction: Direction,
    trail: Trail,
    food: Cell,
    length: i32,
    score: i32,
    tick_rate: i32,
    end: Option<RoundEnd>,
}

impl RoundEngine {
    pub fn start(settings: RoundSettings, mut rng: RoundRng) -> Result<Self, String> {
        settings.validate()?;

        let head = Cell::new(
            rng.random_range(0..settings.grid_size),
            rng.random_range(0..settings.grid_size),
        );
        let trail = Trail::seeded(head);
        let food = pick_food_cell(settings.grid_size, &trail, &mut rng)
            .ok_or_else(|| "No free cell to place food on".to_string())?;

        log!(
            "Round started: {}x{} grid, head ({}, {}), food ({}, {}), seed {}",
            settings.grid_size,
            settings.grid_size,
            head.x,
            head.y,
            food.x,
            food.y,
            rng.seed()
        );

        Ok(Self {
            length: settings.starting_length,
            tick_rate: settings.tick_rate,
            settings,
            rng,
            head,
            direction: Direction::Stop,
            trail,
            food,
            score: 0,
            end: None,
        })
    }

    /// Consumes one batch of pending events in arrival order. The first
    /// turn that is neither the current direction nor its opposite wins
    /// and drops the rest of the batch; cheat events ahead of it all
    /// apply independently.
    pub fn apply_input(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::Turn(direction) => {
                    if direction != self.direction && !direction.is_opposite(self.direction) {
                        self.direction = direction;
                        break;
                    }
                }
                InputEvent::Cheat(action) => {
                    if self.settings.cheats {
                        self.apply_cheat(action);
                    }
                }
            }
        }
    }

    fn apply_cheat(&mut self, action: CheatAction) {
        match action {
            CheatAction::Stop => self.direction = Direction::Stop,
            CheatAction::SpeedDown => self.tick_rate -= 1,
            CheatAction::SpeedUp => self.tick_rate += 1,
            CheatAction::Shrink => {
                self.length -= 1;
                self.score -= 1;
            }
            CheatAction::Grow => {
                self.length += 1;
                self.score += 1;
            }
        }
    }

    /// One simulation step: input, movement, boundary handling, self
    /// collision, trail trim, food. A finished round keeps reporting the
    /// same terminal result.
    pub fn tick(&mut self, events: &[InputEvent]) -> RoundStatus {
        if let Some(end) = self.end {
            return RoundStatus::Dead(end);
        }

        self.apply_input(events);

        let next_head = match self.advance_head() {
            Ok(cell) => cell,
            Err(reason) => return self.finish(reason),
        };

        // The tail cell is vacated this tick, so stepping onto it is
        // fine. A stopped snake never collides with itself.
        if self.direction != Direction::Stop
            && self.trail.contains(next_head)
            && Some(next_head) != self.trail.tail()
        {
            return self.finish(EndReason::SelfCollision);
        }

        self.head = next_head;
        self.trail.push_head(next_head);
        while self.trail.len() as i32 > self.length {
            self.trail.pop_tail();
        }

        if next_head == self.food {
            self.length += 1;
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            match pick_food_cell(self.settings.grid_size, &self.trail, &mut self.rng) {
                Some(cell) => {
                    self.food = cell;
                    log!("Food placed at ({}, {})", cell.x, cell.y);
                }
                None => return self.finish(EndReason::GridFull),
            }
        }

        RoundStatus::Alive(self.snapshot())
    }

    fn advance_head(&self) -> Result<Cell, EndReason> {
        let (dx, dy) = self.direction.velocity();
        let grid = self.settings.grid_size;
        let mut x = self.head.x + dx;
        let mut y = self.head.y + dy;

        if x < 0 || x > grid - 1 {
            if !self.settings.wrap {
                return Err(EndReason::WallCollision);
            }
            x = if x < 0 { grid - 1 } else { 0 };
        }
        if y < 0 || y > grid - 1 {
            if !self.settings.wrap {
                return Err(EndReason::WallCollision);
            }
            y = if y < 0 { grid - 1 } else { 0 };
        }

        Ok(Cell::new(x, y))
    }

    fn finish(&mut self, reason: EndReason) -> RoundStatus {
        let end = RoundEnd {
            score: self.score,
            reason,
        };
        self.end = Some(end);
        log!("Round over: {:?}, final score {}", reason, self.score);
        RoundStatus::Dead(end)
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            trail: self.trail.cells().collect(),
            food: self.food,
            score: self.score,
            tick_rate: self.tick_rate,
            wrap: self.settings.wrap,
            grid_size: self.settings.grid_size,
        }
    }

    pub fn settings(&self) -> &RoundSettings {
        &self.settings
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    /// Live rate in ticks per second. Cheats may drive this to zero or
    /// below; the driver decides how to pace such a round.
    pub fn tick_rate(&self) -> i32 {
        self.tick_rate
    }

    pub fn is_over(&self) -> bool {
        self.end.is_some()
    }
}

fn pick_food_cell(grid_size: i32, trail: &Trail, rng: &mut RoundRng) -> Option<Cell> {
    let mut free = Vec::new();
    for y in 0..grid_size {
        for x in 0..grid_size {
            let cell = Cell::new(x, y);
            if !trail.contains(cell) {
                free.push(cell);
            }
        }
    }
    if free.is_empty() {
        return None;
    }
    let index = rng.random_range(0..free.len());
    Some(free[index])
}
