#![allow(dead_code)]


pub use fixtures::create_test_user;
pub use test_db::create_test_pool;
