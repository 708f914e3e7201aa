//! Integration tests for the migration pipeline
//!
//! These tests run whole migrations against favorites files written into
//! temporary home directories and inspect the TablePlus files produced.

pub mod migrate_tests;
