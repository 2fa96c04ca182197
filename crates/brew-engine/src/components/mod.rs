pub mod entity;
pub mod shape;
