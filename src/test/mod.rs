//! Shared test infrastructure.

pub mod db;
