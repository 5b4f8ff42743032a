// Command behavior tests, one module per subcommand

#[path = "../common/mod.rs"]
mod common;

mod create_test;
mod link_test;
mod ls_test;
