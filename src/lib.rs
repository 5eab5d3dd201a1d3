//! View-model layer for the hpcview console
//!
//! Sits between the API clients fetching resource state and the rendering
//! layer drawing it: resource DTOs deserialize straight off the wire,
//! indicator view-models pair a severity class with a display label, and
//! the sidebar model lists the navigation entries for the deployment's
//! identity provider.
//!
//! Nothing visual lives here; the rendering layer decides colors and
//! icons from the severity class alone.

pub mod components;
pub mod model;
