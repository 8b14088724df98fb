//! CLI subcommands for working with the config file without the GUI

use std::path::Path;

use anyhow::{Result, bail};

use markcopy::Config;

/// Create a fresh config file with defaults (`markcopy init`)
pub fn init_command(config_override: Option<&Path>, force: bool) -> Result<()> {
    let path = config_override
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to_file(&path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Print the config path and its current TOML contents (`markcopy show`)
pub fn show_command(config_override: Option<&Path>) -> Result<()> {
    let path = config_override
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    let config = if path.exists() {
        Config::from_file(&path)?
    } else {
        Config::default()
    };

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
