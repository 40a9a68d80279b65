pub mod image_io;
pub mod overlay;
pub mod source;
