//! Database layer
//!
//! The edge keeps the Stadium aggregate in memory behind the
//! [`repository::StadiumRepository`] seam; durable persistence belongs to
//! an external collaborator.

pub mod repository;
