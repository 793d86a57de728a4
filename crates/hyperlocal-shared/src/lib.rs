//! # Hyperlocal Shared
//!
//! Wire-level types shared between the frontend and the backend.

pub mod dto;

pub use dto::{AuthRequest, PostDto, UserResponse};
