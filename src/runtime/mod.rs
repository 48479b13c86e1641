pub mod builder;
pub mod descriptor;
pub mod registry;
