//! Command-line configuration shared by the terminal and window binaries.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::{KEY_REPEAT_MS, LOOP_MS, UPDATE_MS};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// RNG seed. Defaults to one derived from the system clock.
    #[arg(long, value_name = "N")]
    pub seed: Option<u32>,

    /// Gravity interval: the active piece falls one row per interval.
    #[arg(long, default_value_t = UPDATE_MS, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub update_ms: u64,

    /// Terminal loop poll interval.
    #[arg(long, default_value_t = LOOP_MS, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub loop_ms: u64,

    /// Auto-repeat interval for held keys in the window.
    #[arg(long, default_value_t = KEY_REPEAT_MS, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub key_repeat_ms: u64,
}

impl Args {
    /// The requested seed, or a fresh one from the clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(seed_from_time)
    }
}

/// Seed from the current time; never zero.
pub fn seed_from_time() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the 128-bit count so both fast- and slow-moving bits contribute.
    let folded = (nanos as u32) ^ ((nanos >> 32) as u32) ^ ((nanos >> 64) as u32);
    folded.max(1)
}
