#![deny(unsafe_code)]

//! Composition root for an MQTT→AMQP protocol gateway.
//!
//! This crate assembles the gateway object graph at process startup: it binds
//! the three configuration domains (MQTT listener, AMQP backend client, demo
//! device identity) from a raw key-prefixed source, applies the secure
//! protocol policy to the listener, validates that the bound sections are
//! jointly usable, and constructs the [`Gateway`]. The protocol translation
//! engine itself (packet parsing, AMQP links, message conversion) is a
//! collaborator that consumes the assembled configuration and is not part of
//! this crate.

pub mod assemble;
pub mod error;
pub mod gateway;
pub mod logger;

pub use assemble::{assemble, assemble_settings};
pub use error::AssembleError;
pub use gateway::Gateway;

pub use mqttgw_conf as conf;

pub type Error = anyhow::Error;
pub type Result<T> = anyhow::Result<T, Error>;
