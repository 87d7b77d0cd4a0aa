pub mod spin_wheel;
