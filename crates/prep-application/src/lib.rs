//! Application layer for PREP.
//!
//! Sits between a messaging transport and the core: maps raw inbound
//! text to tagged events, serializes events per user, and turns
//! controller errors into user-visible replies.

pub mod event_mapper;
pub mod tutor_service;

pub use event_mapper::map_incoming;
pub use tutor_service::TutorService;
