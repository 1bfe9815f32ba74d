//! Dioxus desktop shell for the proposal page.
//!
//! Owns the window, the stylesheet and one component per phase. All state
//! changes go through [`valentine_core::ProposalState::apply`].

pub mod cli;
pub mod components;
pub mod settings;
pub mod theme;
