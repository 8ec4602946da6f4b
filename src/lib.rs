//! # Creational Patterns: Builder & Singleton
//!
//! This crate contains runnable examples for two creational design patterns.
//!
//! ## Pattern 1: Builder Pattern with a Director
//! - A [`builder::House`] product assembled step by step
//! - The [`builder::HouseBuilder`] capability set behind a trait, so any
//!   implementation can be substituted
//! - A [`builder::Director`] that encodes fixed recipes (minimal viable,
//!   full-featured) and a caller-supplied custom recipe
//! - Destructive finalize: taking the product resets the builder
//!
//! ## Pattern 2: Thread-Safe Lazy Singleton
//! - One process-wide [`singleton::DatabaseConnection`]
//! - Created on first access with double-checked locking
//! - Safe under concurrent first access from many threads
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Builder Pattern with a Director
//! cargo run --example p1_house_builder
//!
//! # Pattern 2: Thread-Safe Lazy Singleton
//! cargo run --example p2_database_singleton
//! ```

pub mod builder;
pub mod singleton;
