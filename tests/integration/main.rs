//! Integration tests for autopager

mod cli_test;
mod helpers;
mod pager_test;
mod scroller_test;
