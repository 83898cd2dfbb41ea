use std::path::PathBuf;

use anyhow::Result;

pub fn run(config: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config)?;
    let names = &config.frameworks.names;

    println!("{:<4} Framework", "#");
    println!("{}", "-".repeat(60));
    for (idx, name) in names.iter().enumerate() {
        println!("{:<4} {}", idx + 1, name);
    }

    println!("\nTotal: {} frameworks", names.len());
    Ok(())
}
