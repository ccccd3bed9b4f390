//! Integration tests for redis-facade
//!
//! These tests exercise the public API without a Redis server; the
//! connected tests talk to an in-process RESP server instead.

pub mod config_tests;
pub mod disabled_service_tests;
