//! Integration tests for playtime.

mod helpers;

mod analysis_test;
mod cli_test;
mod http_client_test;
