//! # Formicarium
//!
//! An ant-colony simulation core. A queen lays eggs, brood matures from
//! egg through larva and pupa to worker, and workers dig tunnels, feed
//! larvae, and coordinate through decaying pheromone markers while the
//! surface grows food and carries roaming predators.
//!
//! The crate is presentation-free: an embedding front-end queues
//! [`Command`](model::world::Command)s, calls
//! [`World::update`](model::world::World::update) once per frame, and
//! renders from the returned events plus
//! [`World::snapshot`](model::world::World::snapshot).

pub mod model;

pub use model::config::AppConfig;
pub use model::world::{Command, ViewMode, World};
