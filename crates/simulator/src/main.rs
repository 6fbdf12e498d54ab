use std::io::Write;

use gilded_rose_inventory::Shop;
use gilded_rose_sim::{SimulationConfig, fixture, render};

fn main() -> anyhow::Result<()> {
    gilded_rose_observability::init();

    let config = SimulationConfig::from_env()?;
    tracing::info!(days = config.days, output = ?config.output, "starting simulation");

    let mut shop = Shop::new(fixture::items());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..config.days {
        render::render_day(&mut out, &shop, config.output)?;
        shop.update_quality();
    }
    out.flush()?;

    Ok(())
}
