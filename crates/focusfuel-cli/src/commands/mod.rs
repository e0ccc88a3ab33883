pub mod landing;
pub mod schedule;
pub mod slots;
