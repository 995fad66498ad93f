//! Unit tests for the tandem CLI
//!
//! These tests use mocked ports and run fast without external I/O.

mod backend_service;
mod mocks;
mod property_tests;
