use anyhow::Result;

use stretchy_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let bounds = config.header.bounds()?;

    let source = if config.header.preferred_minimum_height.is_some() {
        "configured"
    } else {
        "fallback"
    };

    println!("Header bounds:");
    println!("  Minimum height: {:.2} ({})", bounds.min(), source);
    println!("  Maximum height: {:.2}", bounds.max());
    println!("  Collapsible range: {:.2}", bounds.span());

    Ok(())
}
