//! Journal Module
//!
//! Journal entries and the business logic over them: CRUD, substring
//! search, and date-range filtering, all scoped to the owning user.
//!
//! # Module Structure
//!
//! ```text
//! journal/
//! ├── mod.rs      - Module exports and documentation
//! ├── entries.rs  - Entry model and database operations
//! └── handlers.rs - HTTP handlers and wire types
//! ```
//!
//! # Ownership
//!
//! The owner id is taken from the verified token on every operation;
//! an entry belonging to another user is indistinguishable from a
//! missing one (404).

/// Entry model and database operations
pub mod entries;

/// HTTP handlers for journal endpoints
pub mod handlers;

// Re-export commonly used types
pub use entries::JournalEntry;
pub use handlers::{
    add_journal, delete_journal, edit_journal, filter_journals, get_all_journals, search_journals,
    update_is_favourite,
};
