use anyhow::Result;
use owo_colors::OwoColorize;
use timetrack_core::config::ClientConfig;

pub fn run(config: &ClientConfig) -> Result<()> {
    let config_path = ClientConfig::config_path().map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Server:     {}", config.server_url);
    println!("  Timeout:    {}s", config.request_timeout_secs);
    println!("  Tick:       {}ms", config.tick_millis);
    println!("  New title:  {}", config.placeholder_title);

    Ok(())
}
