//! Label selector matching and resource filtering.
//!
//! - `Selector` describes acceptable values per label key
//! - `match_labels` / `MatchOutcome` evaluate a selector against one label set
//! - `SelectorMatcher` reuses compiled patterns across many label sets
//! - `filter_by_labels` and friends filter a collection of `Resource`s
//!
//! # Example
//!
//! ```
//! use labelkit::selector::{filter_by_labels, Database, Selector};
//!
//! let databases = vec![
//!     Database::new("orders").with_label("env", "prod"),
//!     Database::new("scratch").with_label("env", "dev"),
//! ];
//! let selector = Selector::parse("env=prod").unwrap();
//!
//! let matched = filter_by_labels(&selector, databases);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].name, "orders");
//! ```

pub mod filter;
pub mod matcher;
pub mod model;
pub mod resource;

pub use filter::{
    FilterReport, filter_by_labels, filter_with_report, par_filter_by_labels,
    par_filter_with_report,
};
pub use matcher::{Match, MatchOutcome, SelectorMatcher, match_labels};
pub use model::{Selector, WILDCARD};
pub use resource::{Database, Resource};
