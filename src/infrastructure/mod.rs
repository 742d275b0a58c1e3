//! Infrastructure layer - External service implementations

pub mod auth;
pub mod logging;
pub mod market;
pub mod player;
pub mod squad;
pub mod storage;
pub mod team;
pub mod user;
