//! Repositories - persistence seams per aggregate

mod stadium;

pub use stadium::{MemoryStadiumRepository, StadiumRepository};
