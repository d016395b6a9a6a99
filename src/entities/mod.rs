pub mod prelude;

pub mod activity;
pub mod participant;
