//! Integration tests for tactics_tools
//!
//! One module per operation family, sharing the literal battle-map
//! fixtures in `fixtures`.

#![cfg(feature = "enabled")]


mod attack_tests;
mod pushpull_tests;
