pub mod ad_entry;
pub mod analysis;
pub mod history;
