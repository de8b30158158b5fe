//! Polychrome session: drives a coloring board headlessly.
//!
//! Loads a built-in shape, taps a face, drags the camera, then saves the
//! colored mesh and opens it again.
//!
//! Usage:
//! ```text
//! cargo run --example session                         # Pentagonal Antiprism
//! cargo run --example session -- "Hexagonal Prism"    # any built-in shape
//! cargo run --example session -- --config board.json  # custom BoardConfig
//! ```

use std::error::Error;

use polychrome::board::ColoringBoard;
use polychrome::config::BoardConfig;
use polychrome::interaction::{ButtonEvent, InputSnapshot};
use polychrome::math::Point2;
use polychrome::palette::{Color, SWATCHES};
use polychrome::source::{ShapeLibrary, ShapeSource};
use tracing::info;

const DT: f64 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for polychrome.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polychrome=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("session=info".parse().unwrap_or_default())
        .add_directive("polychrome=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let mut config = BoardConfig::default();
    let mut shape = String::from("Pentagonal Antiprism");
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().ok_or("--config needs a path")?;
            config = BoardConfig::load(path)?;
        } else {
            shape = arg;
        }
    }

    let library = ShapeLibrary::builtin();
    info!(shapes = ?library.shape_names(), "built-in library");

    let mut board = ColoringBoard::new(config)?;
    board.show_shape(&library, &shape, &mut rand::rng())?;
    let bounds = board.shape_bounds()?;
    info!(radius = bounds.radius, width = bounds.width, height = bounds.height, "shape bounds");

    // Tap the middle of the view.
    board.select_color(Some(Color::from_packed(SWATCHES[0])));
    let mut frame = 0;
    let mut feed = |board: &mut ColoringBoard, pos: Point2, button: Option<ButtonEvent>| {
        let mut input = InputSnapshot::tick(frame, DT, pos);
        input.button = button;
        frame += 1;
        board.update(&input)
    };
    feed(&mut board, Point2::origin(), Some(ButtonEvent::Pressed))?;
    feed(&mut board, Point2::origin(), None)?;
    feed(&mut board, Point2::origin(), Some(ButtonEvent::Released))?;

    // Drag right for half a second.
    feed(&mut board, Point2::origin(), Some(ButtonEvent::Pressed))?;
    for step in 1..=30 {
        feed(&mut board, Point2::new(f64::from(step) * 0.01, 0.0), None)?;
    }
    feed(&mut board, Point2::new(0.3, 0.0), Some(ButtonEvent::Released))?;
    info!(hpr = ?board.camera().hpr(), "camera after drag");

    let dir = tempfile::tempdir()?;
    let path = board.save(dir.path())?;

    let mut reopened = ColoringBoard::new(*board.config())?;
    reopened.open(&path)?;
    let colors: Vec<String> = reopened
        .polyhedron()
        .faces()
        .iter()
        .filter_map(|face| face.color().map(|c| c.to_hex()))
        .collect();
    info!(
        shape = reopened.shape_name().unwrap_or_default(),
        faces = reopened.polyhedron().len(),
        ?colors,
        "reopened saved mesh"
    );
    Ok(())
}
