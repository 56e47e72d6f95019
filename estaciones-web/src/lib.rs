//! Weather-station records client.
//!
//! Lists, creates, edits and deletes weather stations held by a REST
//! backend, served as a small server-rendered web front end.

pub mod client;
pub mod config;
pub mod domain;
pub mod views;
pub mod web;
