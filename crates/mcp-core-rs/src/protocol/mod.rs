pub mod capabilities;
pub mod result;
