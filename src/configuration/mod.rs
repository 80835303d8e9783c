pub mod constants;
pub mod deserialize;
pub mod settings;
