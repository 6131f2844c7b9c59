use std::thread;
use std::time::{Duration, Instant};

use torus_snake::{Dir, GameState, GridDim};

// 800x600 window at 20px cells
const BOARD_DIM: GridDim = GridDim { x: 40, y: 30 };
const DEMO_SECONDS: f32 = 30.0;

/// Headless demo host: drives the simulation at ~60 fps with a scripted
/// rectangular patrol heading and logs the running score.
fn main() {
    env_logger::init();

    let mut game = GameState::new(BOARD_DIM);
    let script = [Dir::Right, Dir::Down, Dir::Left, Dir::Up];

    let mut last_frame = Instant::now();
    let mut total = 0.0;
    let mut frame = 0usize;

    while total < DEMO_SECONDS {
        let elapsed = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();
        total += elapsed;

        // turn every couple of seconds so the patrol covers the board
        let command = (frame % 120 == 0).then(|| script[(frame / 120) % script.len()]);
        game.tick(command, elapsed);

        if frame % 300 == 0 {
            let snapshot = game.snapshot();
            log::info!(
                "score {:3}  length {:3}  interval {:.3}s",
                snapshot.score,
                snapshot.body.len() + 1,
                snapshot.movement_interval
            );
        }

        frame += 1;
        thread::sleep(Duration::from_millis(16));
    }

    let snapshot = game.snapshot();
    log::info!("demo over, final score {}", snapshot.score);
}
