use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::apple::Apples;
use crate::basic::{Dir, GridDim, GridPoint, Seconds};
use crate::board::{Grid, Occupant};
use crate::difficulty;
use crate::snake::Snake;

/// The whole simulation: board occupancy, snake, apples, score and the
/// timers driving movement and difficulty. Owned and mutated from a single
/// host thread, one [`tick`](Self::tick) per rendered frame.
pub struct GameState<R: Rng> {
    grid: Grid,
    snake: Snake,
    apples: Apples,
    score: u32,
    /// Minimum real time between grid steps, the inverse of speed.
    movement_interval: Seconds,
    /// Time accumulated towards the next grid step.
    move_timer: Seconds,
    /// Time accumulated towards the next difficulty re-evaluation.
    difficulty_timer: Seconds,
    /// Total running time, keeps accumulating across resets.
    game_time: Seconds,
    rng: R,
}

impl GameState<ThreadRng> {
    pub fn new(dim: GridDim) -> Self {
        Self::with_rng(dim, thread_rng())
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(dim: GridDim, mut rng: R) -> Self {
        let mut grid = Grid::new(dim);
        let snake = place_snake(&mut grid, &mut rng);
        let mut apples = Apples::new();
        apples.spawn(&mut grid, &mut rng);

        Self {
            grid,
            snake,
            apples,
            score: 0,
            movement_interval: difficulty::BASE_INTERVAL,
            move_timer: 0.0,
            difficulty_timer: 0.0,
            game_time: 0.0,
            rng,
        }
    }

    /// Advance the simulation by one frame's elapsed real time.
    ///
    /// `command` is the most recent directional input, `None` keeps the
    /// current heading. The heading is adopted immediately, the positional
    /// step only happens once the accumulated time crosses the movement
    /// interval, and exactly once per crossing.
    pub fn tick(&mut self, command: Option<Dir>, elapsed: Seconds) {
        self.game_time += elapsed;

        if let Some(dir) = command {
            self.snake.dir = dir;
        }

        self.move_timer += elapsed;
        if self.move_timer >= self.movement_interval {
            // leftover time is dropped, not carried into the next step
            self.move_timer = 0.0;
            self.step();
        }

        self.difficulty_timer += elapsed;
        if self.difficulty_timer >= difficulty::UPDATE_PERIOD {
            self.difficulty_timer = 0.0;
            self.movement_interval =
                difficulty::movement_interval(self.game_time, self.score, self.snake.full_len());
        }
    }

    // one discrete grid step
    fn step(&mut self) {
        self.snake.advance(&mut self.grid);
        let head = self.snake.head;

        if self.grid.get(head, Occupant::Apple) {
            self.snake.grow(&mut self.grid);
            self.apples.remove_at(head, &mut self.grid);
            self.apples.spawn(&mut self.grid, &mut self.rng);
            self.score += 1;
        }

        // checked after apples: a step that lands on an apple and a body
        // segment at once still grows first, the reset discards the growth
        if self.grid.get(head, Occupant::Body) {
            self.reset();
        }
    }

    /// Full reinitialization after a self-collision. The board is rebuilt
    /// from scratch, only the total game time and the difficulty cadence
    /// survive.
    fn reset(&mut self) {
        log::debug!(
            "snake bit itself at {:?}, resetting (score was {})",
            self.snake.head,
            self.score
        );

        self.grid.clear();
        self.snake = place_snake(&mut self.grid, &mut self.rng);
        self.apples = Apples::new();
        self.apples.spawn(&mut self.grid, &mut self.rng);
        self.score = 0;
        self.movement_interval = difficulty::BASE_INTERVAL;
        self.move_timer = 0.0;
    }

    /// Read-only view for a renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            head: self.snake.head,
            body: &self.snake.body,
            apples: self.apples.positions(),
            score: self.score,
            movement_interval: self.movement_interval,
        }
    }
}

fn place_snake(grid: &mut Grid, rng: &mut impl Rng) -> Snake {
    let head = GridPoint::random(grid.dim(), rng);
    grid.set(head, Occupant::Head, true);
    Snake::new(head, Dir::Right)
}

/// Everything a renderer needs for one frame, borrowed from the game state.
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub head: GridPoint,
    pub body: &'a VecDeque<GridPoint>,
    pub apples: &'a [GridPoint],
    pub score: u32,
    pub movement_interval: Seconds,
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::apple::MAX_APPLES;
    use crate::difficulty::BASE_INTERVAL;

    use super::*;

    fn test_state(seed: u64) -> GameState<StdRng> {
        GameState::with_rng(GridDim { x: 10, y: 10 }, StdRng::seed_from_u64(seed))
    }

    fn teleport_head(state: &mut GameState<StdRng>, pos: GridPoint) {
        state.grid.set(state.snake.head, Occupant::Head, false);
        state.snake.head = pos;
        state.grid.set(pos, Occupant::Head, true);
    }

    fn push_body(state: &mut GameState<StdRng>, pos: GridPoint) {
        state.snake.body.push_back(pos);
        state.grid.set(pos, Occupant::Body, true);
    }

    fn clear_apples(state: &mut GameState<StdRng>) {
        for pos in state.apples.positions().to_vec() {
            state.apples.remove_at(pos, &mut state.grid);
        }
    }

    /// Grid flags and entity lists must describe the same world.
    fn assert_consistent<R: Rng>(state: &GameState<R>) {
        let dim = state.grid.dim();
        for (y, x) in iproduct!(0..dim.y, 0..dim.x) {
            let pos = GridPoint { x, y };
            let cell = state.grid.cell(pos);

            let apples_here = state
                .apples
                .positions()
                .iter()
                .filter(|&&apple| apple == pos)
                .count();
            assert!(apples_here <= 1, "duplicate apples at {:?}", pos);
            assert_eq!(cell.has_apple, apples_here == 1, "apple flag at {:?}", pos);

            let body_here = state.snake.body.iter().any(|&segment| segment == pos);
            assert_eq!(cell.has_body, body_here, "body flag at {:?}", pos);

            assert_eq!(cell.has_head, pos == state.snake.head, "head flag at {:?}", pos);
        }
    }

    #[test]
    fn test_fresh_state() {
        let state = test_state(1);
        assert_eq!(state.score, 0);
        assert_eq!(state.movement_interval, BASE_INTERVAL);
        assert_eq!(state.apples.len(), 1);
        assert!(state.snake.body.is_empty());
        assert_eq!(state.snake.dir, Dir::Right);
        assert_consistent(&state);
    }

    #[test]
    fn test_timer_gating() {
        let mut state = test_state(2);
        clear_apples(&mut state);
        let start = state.snake.head;

        // four frames just under the 0.2s threshold: no move
        for _ in 0..4 {
            state.tick(None, 0.04);
        }
        assert_eq!(state.snake.head, start);

        // crossing the threshold moves exactly once
        state.tick(None, 0.05);
        assert_eq!(state.snake.head, start.wrapping_translate(Dir::Right, 1, state.grid.dim()));

        // the accumulator restarts from zero, the 0.01s overshoot is dropped
        let after_first = state.snake.head;
        state.tick(None, 0.19);
        assert_eq!(state.snake.head, after_first);
    }

    #[test]
    fn test_command_adopted_before_the_gate() {
        let mut state = test_state(3);
        clear_apples(&mut state);

        state.tick(Some(Dir::Up), 0.0);
        assert_eq!(state.snake.dir, Dir::Up);

        // the latest command wins
        let start = state.snake.head;
        state.tick(Some(Dir::Down), 0.2);
        assert_eq!(state.snake.head, start.wrapping_translate(Dir::Down, 1, state.grid.dim()));
    }

    #[test]
    fn test_growth_tracks_apples_eaten() {
        let mut state = test_state(4);
        clear_apples(&mut state);
        teleport_head(&mut state, GridPoint { x: 0, y: 5 });

        for x in 1..=3 {
            state.apples.insert(GridPoint { x, y: 5 }, &mut state.grid);
        }

        for _ in 0..3 {
            state.tick(None, 0.2);
        }

        assert_eq!(state.score, 3);
        assert_eq!(state.snake.body.len(), 3);
        // each eaten apple was replaced
        assert_eq!(state.apples.len(), 3);
        assert_consistent(&state);
    }

    #[test]
    fn test_reset_on_self_collision() {
        let mut state = test_state(5);
        teleport_head(&mut state, GridPoint { x: 5, y: 5 });
        // a loop tight enough that heading down bites the neck's successor
        push_body(&mut state, GridPoint { x: 4, y: 5 });
        push_body(&mut state, GridPoint { x: 5, y: 6 });
        push_body(&mut state, GridPoint { x: 6, y: 5 });
        state.score = 7;

        state.tick(Some(Dir::Down), 0.2);

        assert_eq!(state.score, 0);
        assert!(state.snake.body.is_empty());
        assert_eq!(state.apples.len(), 1);
        assert_eq!(state.movement_interval, BASE_INTERVAL);
        assert_eq!(state.move_timer, 0.0);
        // total game time is not part of the reset
        assert!(state.game_time > 0.0);
        assert_consistent(&state);
    }

    #[test]
    fn test_eat_and_collide_still_resets() {
        let mut state = test_state(6);
        clear_apples(&mut state);
        teleport_head(&mut state, GridPoint { x: 5, y: 5 });
        push_body(&mut state, GridPoint { x: 4, y: 5 });
        push_body(&mut state, GridPoint { x: 5, y: 6 });
        push_body(&mut state, GridPoint { x: 6, y: 5 });
        // apple on a body cell, only constructible externally: the step
        // grows first, then the collision reset discards everything
        state.apples.insert(GridPoint { x: 5, y: 6 }, &mut state.grid);

        state.tick(Some(Dir::Down), 0.2);

        assert_eq!(state.score, 0);
        assert!(state.snake.body.is_empty());
        assert_eq!(state.apples.len(), 1);
        assert_consistent(&state);
    }

    #[test]
    fn test_difficulty_steps_only_at_cadence_boundaries() {
        let mut state = test_state(7);
        clear_apples(&mut state);

        state.tick(None, 4.9);
        // a step happened, the interval did not budge yet
        assert_eq!(state.movement_interval, BASE_INTERVAL);

        state.tick(None, 0.2);
        let expected = difficulty::movement_interval(state.game_time, 0, 1);
        assert_eq!(state.movement_interval, expected);
        assert!(state.movement_interval < BASE_INTERVAL);
    }

    #[test]
    fn test_random_walk_keeps_invariants() {
        let mut state = GameState::with_rng(GridDim { x: 40, y: 30 }, StdRng::seed_from_u64(8));
        let mut cmd_rng = StdRng::seed_from_u64(9);

        for frame in 0..600usize {
            let command = (frame % 7 == 0).then(|| Dir::random(&mut cmd_rng));
            state.tick(command, 0.05);

            if frame % 10 == 0 {
                assert_consistent(&state);
                let apples = state.apples.len();
                assert!((1..=MAX_APPLES).contains(&apples), "apple count {}", apples);
            }
        }
    }
}
