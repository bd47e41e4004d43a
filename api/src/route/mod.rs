pub mod auth;
pub mod health;
pub mod rental;
pub mod space;
pub mod v1;
