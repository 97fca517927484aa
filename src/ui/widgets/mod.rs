// src/ui/widgets/mod.rs

pub mod attack_cards;
pub mod disclaimer_popup;
pub mod footer;
pub mod globe;
pub mod history;
pub mod input;
pub mod result;
pub mod simulation;
