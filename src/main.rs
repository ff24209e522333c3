//! Render the space-charge figure to `space_charge_effect.png`
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

use space_charge_rs::figure::FigureComposer;

const OUTPUT_PATH: &str = "space_charge_effect.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let composer = FigureComposer::default();
    let figure = composer.compose_figure();

    log::info!(
        "Rendering '{}' with {} panels (seed {})",
        figure.style.suptitle,
        figure.panels.len(),
        figure.seed
    );

    figure.render(OUTPUT_PATH)?;
    Ok(())
}
