//! Dieta: onboarding wizard that collects the data for a nutrition plan.

pub mod app;
pub mod bootstrap;
pub mod terminal;
