pub mod browser;
pub mod storage;
pub mod style;
