pub mod error;
pub mod export;
pub mod invoke;
pub mod visibility;
