//! Property-based tests for SequelPort core library

mod flatten_tests;
