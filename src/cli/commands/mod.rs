pub mod convert;
pub mod verify;
