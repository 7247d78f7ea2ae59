//! Presentation-ready views built on top of the resolver.
//!
//! Each view is a read-only transform over the catalog or over resolver
//! output; none of them add matching logic of their own.
//!
//! - [`info`]: every field of each food a query resolves to
//! - [`category`]: foods whose category matches, case-insensitively
//! - [`compare`]: nutrition of the first match for each of several queries
//! - [`meals`]: curated meal suggestions per dietary preference
//! - [`labels`]: fixed-width bordered retail labels
//!
//! Batch views (`compare`, `labels`) skip queries that resolve to nothing
//! rather than failing the whole batch.

pub mod category;
pub mod compare;
pub mod info;
pub mod labels;
pub mod meals;
