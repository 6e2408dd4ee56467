//! Compile-time tunables for the workspace UI.

/// Simulated latency of the content generator.
pub const GENERATION_DELAY_MS: u32 = 1500;

/// Idle time after the last document edit before an auto save version is taken.
pub const AUTO_SAVE_DELAY_MS: u32 = 5000;

pub const TOAST_DURATION_MS: u32 = 3000;
