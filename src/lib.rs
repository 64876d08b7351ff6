#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::cast_precision_loss, // scores never get anywhere near 2^52
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
pub mod gymnasium;
pub mod snakegame;
pub mod strategies;
