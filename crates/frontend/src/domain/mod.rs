pub mod a001_activity;
pub mod a002_trip;
