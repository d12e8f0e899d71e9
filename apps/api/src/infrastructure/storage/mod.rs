pub mod local_file_store;
pub mod media;
pub mod traits;
