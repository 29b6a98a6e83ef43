pub mod builder;
pub mod error;
pub mod prelude;
pub mod settings;
