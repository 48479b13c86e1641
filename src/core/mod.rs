pub mod instance;
pub mod value;
