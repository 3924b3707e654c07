mod auth;
mod domain;
mod status;

pub mod dtos {
    pub use crate::domain::dtos::*;
}

pub use crate::auth::api::*;
pub use crate::domain::api::*;
pub use crate::status::api::*;
