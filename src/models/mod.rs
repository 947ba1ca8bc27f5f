pub mod activities;

pub use activities::{ActivityCatalog, ActivityRecord};
