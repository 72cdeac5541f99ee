// Counter components module
pub mod ls163;
pub mod ls191;

// Re-export the counter types
pub use ls163::Ls163;
pub use ls191::Ls191;
