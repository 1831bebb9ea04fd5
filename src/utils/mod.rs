// Utils compartidos

pub mod constants;
pub mod dialogs;
pub mod storage;

pub use constants::*;
