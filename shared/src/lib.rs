pub mod constants;
pub mod error;
pub mod prizes;
pub mod shared_wheel_game;
pub mod wheel_geometry;

pub use error::WheelError;
pub use prizes::Prize;
