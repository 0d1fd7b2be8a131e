pub mod check;
pub mod crate_ids;
