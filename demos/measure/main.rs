//! Protractor measurement walkthrough.
//!
//! Picks three points, prints the measured angle and arc fan, then drags
//! the last point and prints the rebuilt measurement.
//!
//! Usage:
//! ```text
//! cargo run --example measure
//! RUST_LOG=protractor=debug cargo run --example measure
//! ```

use protractor::board::{BoardConfig, Measurement, MeasurementBoard, PickOutcome};
use protractor::geometry::Corner;
use protractor::math::Point3;
use protractor::ProtractorError;

fn main() -> Result<(), ProtractorError> {
    // Default: WARN for everything, INFO for protractor.
    // Override with RUST_LOG env var (e.g. RUST_LOG=protractor=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("measure=info".parse().unwrap_or_default())
        .add_directive("protractor=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut board = MeasurementBoard::new(BoardConfig::default())?;

    let picks = [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let mut completed = None;
    for point in picks {
        if let PickOutcome::Completed(id) = board.pick(point)? {
            completed = Some(id);
        }
    }
    let Some(id) = completed else {
        tracing::warn!("no measurement completed");
        return Ok(());
    };

    print_measurement("picked", board.get(id)?);

    let dragged = board.drag(id, Corner::End, Point3::new(-1.0, 0.0, 1.0))?;
    print_measurement("dragged", dragged);

    Ok(())
}

fn print_measurement(stage: &str, m: &Measurement) {
    let arc = m.arc();
    tracing::info!(
        stage,
        revision = m.revision(),
        segments = arc.segments(),
        vertices = arc.vertices.len(),
        "angle {}",
        m.label().text
    );
    for (i, v) in m.arc_world_vertices().iter().enumerate() {
        println!("  v{i}: ({:.3}, {:.3}, {:.3})", v.x, v.y, v.z);
    }
}
