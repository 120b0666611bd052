pub mod auth;
pub mod common;
pub mod config;
pub mod error;
pub mod job;
pub mod payment;
pub mod rating;
pub mod requests;
pub mod stats;
pub mod status;
pub mod user;

pub use auth::*;
pub use common::*;
pub use config::*;
pub use error::*;
pub use job::*;
pub use payment::*;
pub use rating::*;
pub use requests::*;
pub use stats::*;
pub use status::*;
pub use user::*;
