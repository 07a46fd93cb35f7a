pub mod activity;

pub use activity::{Activity, ActivityListing, NewActivity};
