//! Services over the document store, one per collection.

pub mod patients;
