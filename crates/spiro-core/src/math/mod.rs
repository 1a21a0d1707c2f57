pub mod period;
pub mod trochoid;
