pub mod reservation;
pub mod timezone;
