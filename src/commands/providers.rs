//! Providers command implementation.

use crate::weave::registered_cleaner_ids;
use anyhow::Result;

/// List every cleanup provider registered in this binary.
pub fn run() -> Result<()> {
    let ids = registered_cleaner_ids();
    if ids.is_empty() {
        println!("No cleanup providers registered.");
        return Ok(());
    }
    println!("Registered cleanup providers:");
    for id in ids {
        println!("  {id}");
    }
    Ok(())
}
