pub mod activity_directory;
pub mod activity_seed;

pub use activity_directory::ActivityDirectory;
