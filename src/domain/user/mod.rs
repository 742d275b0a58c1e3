//! User domain module

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_password, validate_user_id, validate_user_name, UserValidationError,
};
