pub mod landing;
pub mod wizard;
