//! Pattern 2: Thread-Safe Lazy Singleton
//! One process-wide database handle, created on first use behind
//! double-checked locking.

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Mutex;

/// The single instance. Null until the first access publishes it; once
/// published it is never freed or replaced.
static INSTANCE: AtomicPtr<DatabaseConnection> = AtomicPtr::new(ptr::null_mut());

/// Serializes the check-and-create sequence on the slow path.
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// A process-wide database connection.
///
/// Stands in for a real shared resource: there is no actual connection
/// behind it, only the guarantee that [`DatabaseConnection::instance`] hands
/// every caller the same instance for the life of the process.
#[derive(Debug)]
pub struct DatabaseConnection {
    // Construction stays inside this module.
    _private: (),
}

impl DatabaseConnection {
    /// Connection setup would go here. Kept infallible; a production variant
    /// acquiring a real resource would return `Result` and surface the error
    /// through [`DatabaseConnection::instance`].
    fn connect() -> Self {
        Self { _private: () }
    }

    /// Returns the process-wide instance, creating it on first access.
    ///
    /// Double-checked locking: the unguarded load is the fast path once the
    /// instance exists, and the lock only arbitrates the first-time creation
    /// race. Whichever thread wins, every caller observes the same instance.
    pub fn instance() -> &'static DatabaseConnection {
        let published = INSTANCE.load(Ordering::Acquire);
        if !published.is_null() {
            // SAFETY: a non-null pointer always comes from Box::into_raw in
            // the slow path below and is never freed or replaced.
            return unsafe { &*published };
        }

        let _guard = INIT_LOCK.lock().unwrap();
        // Check again under the lock: another thread may have created the
        // instance between the fast-path load and the lock acquisition.
        let published = INSTANCE.load(Ordering::Acquire);
        if !published.is_null() {
            // SAFETY: same publication invariant as the fast path.
            return unsafe { &*published };
        }

        // The instance lives for the remainder of the process, so the
        // allocation is leaked rather than ever dropped.
        let fresh = Box::into_raw(Box::new(DatabaseConnection::connect()));
        INSTANCE.store(fresh, Ordering::Release);
        // SAFETY: freshly leaked allocation, valid from here on out.
        unsafe { &*fresh }
    }
}

// ============================================================================
// Tests
// ============================================================================
