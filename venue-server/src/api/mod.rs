//! API route modules
//!
//! # Structure
//!
//! - [`stadiums`] - Stadium aggregate CRUD and layout preview
//! - [`upload`] - background map image upload

pub mod stadiums;
pub mod upload;
