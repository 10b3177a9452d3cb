use anyhow::{Context, Result};

use mercury_precession::snapshot;

fn main() -> Result<()> {
    env_logger::init();

    let config = snapshot::parse_args();
    let path = snapshot::render_snapshot(&config)
        .with_context(|| format!("failed to render {}", config.output.display()))?;
    println!("Snapshot saved to {}", path.display());
    Ok(())
}
