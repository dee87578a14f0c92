//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::config::Config;
use crate::weave::CleanProcessor;
use anyhow::{bail, Result};

/// Run the clean command.
pub fn run(args: CleanArgs, config: &Config) -> Result<()> {
    let Some(target) = args.target.or_else(|| config.clean.target.clone()) else {
        bail!("no target directory given on the command line or in the config file");
    };

    // Config file values first, command line appended/overriding.
    let mut classpath = config.clean.classpath.clone();
    classpath.extend(args.classpath);

    let mut properties = config.properties.clone();
    for (key, value) in args.define {
        properties.insert(key, value);
    }

    let processor = CleanProcessor::new(classpath, target.clone(), properties);
    println!(
        "Cleaning {} with {} provider{}...",
        target.display(),
        processor.providers().len(),
        if processor.providers().len() == 1 { "" } else { "s" }
    );

    processor.clean()?;

    println!("Clean complete.");
    Ok(())
}
