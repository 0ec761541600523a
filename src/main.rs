//! Pico Pong - headless entry point
//!
//! Plays an attract-mode match into an in-memory frame buffer, logging tones
//! at trace level. Usage: `pico-pong [settings.json] [last-frame.ppm]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use pico_pong::audio::TraceOutput;
    use pico_pong::input::DemoInput;
    use pico_pong::platform::Arcade;
    use pico_pong::sim::{GameState, Side};
    use pico_pong::{FrameBuffer, Settings};

    /// One minute at the nominal tick rate
    const DEMO_TICKS: u64 = 6_000;

    env_logger::init();
    log::info!("Pico Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let dump_path = args.next();

    let state = GameState::with_output(&settings, Box::new(TraceOutput));
    let input = DemoInput::new(settings.seed, DEMO_TICKS);
    let mut arcade = Arcade::new(state, FrameBuffer::new(), input);
    arcade.run(Duration::from_millis(settings.tick_interval_ms));

    let (state, frame, _) = arcade.into_parts();
    log::info!(
        "Final score {} - {} after {} ticks ({:.1} fps)",
        state.score(Side::Left),
        state.score(Side::Right),
        state.ticks,
        state.fps
    );

    if let Some(path) = dump_path {
        match std::fs::write(&path, frame.to_ppm()) {
            Ok(()) => log::info!("Last frame written to {}", path),
            Err(e) => log::warn!("Could not write frame {}: {}", path, e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host on wasm; nothing to run here
}
