mod graphics;
mod math;
mod state;
mod widget;

use clap::Parser;
use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use math::{candidate_directions, select_target, DEFAULT_EPSILON, DEFAULT_SENSITIVITY};
use state::AppState;
use widget::ArrowWidget;

/// A drag-to-rotate direction matching CAPTCHA demo
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Seed for target selection; omit for a random challenge
    #[arg(long)]
    seed: Option<u64>,

    /// Per-axis match tolerance
    #[arg(long, default_value_t = DEFAULT_EPSILON, value_parser = parse_positive)]
    epsilon: f64,

    /// Pixels of horizontal drag per radian of rotation
    #[arg(long, default_value_t = DEFAULT_SENSITIVITY, value_parser = parse_positive)]
    sensitivity: f64,

    /// Start with the debug overlay enabled
    #[arg(long)]
    debug: bool,
}

/// Parses a strictly positive, finite float argument
fn parse_positive(value: &str) -> Result<f64, String> {
    let parsed: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(format!("must be a positive finite number, got {value}"))
    }
}

/// Main function
fn main() -> Result<(), PlatformError> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    let candidates = candidate_directions();
    let target = match args.seed {
        Some(seed) => select_target(&candidates, &mut StdRng::seed_from_u64(seed)),
        None => select_target(&candidates, &mut rand::rng()),
    };
    tracing::info!(angle = target.angle(), "target selected");

    let main_window = WindowDesc::new(ArrowWidget::new())
        .title(LocalizedString::new("Rotate the arrow to match"))
        .window_size((480.0, 360.0));

    let initial_state = AppState::new(
        candidates,
        target,
        args.epsilon,
        args.sensitivity,
        args.debug,
    );

    AppLauncher::with_window(main_window).launch(initial_state)?;

    Ok(())
}
