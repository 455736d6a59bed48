//! Public types for the activities API
use serde::Deserialize;

pub use crate::board::models::{Activities, ActivityDetails, ErrorResponse, MessageResponse};

#[derive(Deserialize)]
pub struct EmailParams {
    pub email: String,
}
