use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod error;
pub mod heap_primitives;

// Grid model
// ----------
pub mod grid;

// Search engine
// -------------
pub mod astar;
pub mod heuristic;

// Collaborators
// -------------
pub mod generator;
pub mod loader;
pub mod render;
