//! Compiles package search queries into typed predicates.
//!
//! ```
//! use search_filter::compile;
//!
//! let compilation = compile("vapor author:apple stars:>1000 stars:lots");
//! assert_eq!(compilation.query.free_text_terms, vec!["vapor"]);
//!
//! let chips: Vec<String> = compilation
//!     .query
//!     .view_models()
//!     .iter()
//!     .map(|view| view.description())
//!     .collect();
//! assert_eq!(chips, vec!["author is apple", "stars is greater than 1,000"]);
//!
//! // `stars:lots` is reported, not fatal.
//! assert_eq!(compilation.issues.len(), 1);
//! ```

pub mod compiler;
pub mod error;
pub mod filters;
pub mod predicate;
pub mod registry;

pub use compiler::{Compilation, CompiledQuery, Compiler, compile};
pub use error::{CompileErrors, CompileIssue, ExpectedValue, FilterError, RegistryError};
pub use filters::{Filter, SearchFilter};
pub use predicate::{BindableValue, Predicate, ViewModel};
pub use registry::{FilterKind, FilterRegistry};
