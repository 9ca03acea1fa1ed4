//! Backend directory service boundary

pub mod ports;

pub use ports::DirectoryApi;
