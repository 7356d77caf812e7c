//! Shared core of the Kokoro companion: wire types for the chat and
//! prediction services, configuration, local journal storage, the mood
//! selector, and the request orchestrator that drives a front end through the
//! renderer traits in [`render`].

pub mod client;
pub mod config;
pub mod error;
pub mod journal;
pub mod mood;
pub mod orchestrator;
pub mod platform;
pub mod protocol;
pub mod render;
pub mod safety;
pub mod storage;
