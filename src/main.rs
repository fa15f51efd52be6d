mod audio;
mod audio_api;
mod kit;
mod loader;
mod playback;
mod router;
mod shared;
mod tui;

use std::path::PathBuf;
use std::time::Instant;

use crossterm::terminal;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use audio_api::AudioCommand;
use kit::{Kit, KitManifest};
use playback::PlaybackController;
use router::InputRouter;
use shared::{InputEvent, PadId};
use tui::grid::PadRegions;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let kit_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let manifest = KitManifest::load(&kit_dir)?;
    let mut kit = Kit::new(&kit_dir, manifest);

    let audio = audio::start_audio()?;

    // Load and register each pad's clip before the terminal goes raw, so
    // warnings stay readable. A pad whose sample is missing simply stays
    // silent; that's authoring breakage, not a startup failure.
    for i in 0..kit.pads().len() {
        let pad = PadId(i as u8);
        let path = kit.pad(pad).sample_path.clone();
        match loader::sample_loader::load(&path, audio.sample_rate()) {
            Ok((id, buffer)) => {
                audio.send(AudioCommand::RegisterSample { id, buffer });
                kit.attach_clip(pad, id);
            }
            Err(e) => {
                eprintln!("drumtty: pad '{}' has no clip ({}): {e}", kit.pad(pad).cap, path.display());
            }
        }
    }

    terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;
    let _guard = RawModeGuard; // auto drops when out of scope

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut term = Terminal::new(backend)?;
    term.clear()?;

    let router = InputRouter::new();
    let mut controller = PlaybackController::new();

    let tick_rate = std::time::Duration::from_millis(16); // ~60fps
    let mut last_tick = Instant::now();

    loop {
        let ds = controller.display_state(&kit);
        term.draw(|frame| {
            tui::view::render(frame, frame.area(), &ds);
        })?;

        // hit-test clicks against what was just drawn
        let size = term.size()?;
        let regions = PadRegions::compute(Rect::new(0, 0, size.width, size.height));

        let events = tui::input::poll_input(tick_rate)?;
        for event in events {
            let resolved = match event {
                InputEvent::Quit => {
                    drop(term);
                    return Ok(());
                }
                InputEvent::KeyDown(key) => router.handle_key_down(&kit, key),
                InputEvent::Click { x, y } => router.handle_click(&regions, &kit, x, y),
            };
            if let Some((pad, clip)) = resolved {
                audio.send(controller.trigger(pad, &clip));
            }
        }

        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();
        for settled in controller.tick(dt) {
            controller.on_animation_settled(settled);
        }
    }
}

struct RawModeGuard;
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}
