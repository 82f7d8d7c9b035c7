pub mod booking;
pub mod navigation;
pub mod sections;
