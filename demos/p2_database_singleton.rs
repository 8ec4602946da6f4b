//! Pattern 2: Thread-Safe Lazy Singleton
//! Example: One Shared Database Connection Across Threads
//!
//! Run with: cargo run --example p2_database_singleton

use creational_patterns::singleton::DatabaseConnection;
use std::ptr;
use std::thread;

fn main() {
    println!("=== Same Instance on Every Access ===");
    let first = DatabaseConnection::instance();
    let second = DatabaseConnection::instance();
    println!("first and second are the same instance: {}", ptr::eq(first, second));

    println!("\n=== Shared Across Threads ===");
    thread::scope(|s| {
        for worker in 0..8 {
            s.spawn(move || {
                let connection = DatabaseConnection::instance();
                println!(
                    "worker {} sees the shared instance: {}",
                    worker,
                    ptr::eq(connection, first)
                );
            });
        }
    });

    println!("\n=== Key Points ===");
    println!("1. The instance is created on first access, not at startup");
    println!("2. The unguarded load is the fast path after initialization");
    println!("3. The lock only arbitrates the first-time creation race");
    println!("4. std::sync::OnceLock packages the same guarantee");
}
