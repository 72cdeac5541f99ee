// ALU components module
pub mod ls181;

// Re-export the ALU type
pub use ls181::Ls181;
