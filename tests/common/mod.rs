//! Shared test utilities for powerline-prompt
//!
//! Integration tests run the real binary inside throwaway directories and git
//! repositories, with `HOME` pinned so home collapsing is predictable.

pub mod assertions;
pub mod repository;
