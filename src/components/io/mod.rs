// Input/output components module
pub mod led;
pub mod pulse;
pub mod switch;

// Re-export the I/O types
pub use led::Led;
pub use pulse::SinglePulse;
pub use switch::Switch;
