//! Integration tests exercising the HTTP surface through the full router.

mod auth_test;
mod directory_test;
mod helpers;
mod permission_test;
