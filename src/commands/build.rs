//! Build the static site

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Build every page pair under the source directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let mut generator = Generator::new(site)?;
    generator.build()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
