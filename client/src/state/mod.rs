//! Reactive page state shared through Leptos context.

pub mod stage;
