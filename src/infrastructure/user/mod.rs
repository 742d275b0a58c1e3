//! User infrastructure: password hashing, persistence, account service

mod password;
mod postgres_repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use service::{RegisterRequest, Registration, TeamView, UserService};
