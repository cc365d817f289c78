pub mod error;
pub mod extract;
pub mod filtering;
pub mod io;
pub mod processing;
pub mod sources;
