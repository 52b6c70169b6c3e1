pub mod panels;
pub mod visualization;
