//! Simulation systems.
//!
//! Each system is a free function over the state it touches:
//!
//! - `brood`: queen egg-laying and egg/larva/pupa stage transitions
//! - `worker`: the per-worker decision policy (dig, feed, mark, move)

pub mod brood;
pub mod worker;
