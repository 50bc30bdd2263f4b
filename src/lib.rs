pub mod config; // Configuration management and environment variable handling
pub mod db; // Database models, queries, and connection pooling
pub mod web; // HTTP routing, handlers, and middleware
