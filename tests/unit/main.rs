//! Unit test modules.

mod config_test;
mod participant_test;
