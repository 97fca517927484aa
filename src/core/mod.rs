// src/core/mod.rs

/// Data structures shared across the application: requests, geolocation
/// records, history entries and attack arcs.
pub mod models;

/// Typed failures of a scan and the single message the user gets for all of them.
pub mod errors;

/// DNS-over-HTTPS resolution, geolocation, and the orchestrator chaining them.
pub mod scanner;

/// Virtual-clock scheduler every presentation timer runs on.
pub mod timeline;

/// Scripted camera approach and reveals of the globe view.
pub mod globe;

/// The four-stage cosmetic attack simulation.
pub mod simulation;

/// Screen state of one running session.
pub mod session;

/// In-memory scan history and its JSON export.
pub mod history;

/// Latitude/longitude descriptors for the details panel.
pub mod terrain;

/// Static catalog of attack-vector cards.
pub mod knowledge_base;
