//! Data access layer.
//!
//! `game_data` caches the static JSON assets in memory; `discord` wraps the REST
//! endpoints used to register application commands. Everything above this layer
//! works on the domain models in `crate::model`.

pub mod discord;
pub mod game_data;

#[cfg(test)]
mod test;
