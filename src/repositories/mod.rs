pub mod hotels;
pub mod sessions;
