#![allow(dead_code)]

pub mod factories;
pub mod helpers;
pub mod scenarios;
pub mod test_db;
