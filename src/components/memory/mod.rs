// Memory components module
pub mod ls273;
pub mod ram6116;

// Re-export the memory types
pub use ls273::Ls273;
pub use ram6116::Ram6116;
