use crate::{
    error::{FilterError, RegistryError},
    filters::{Filter, SearchFilter, builtin_kinds},
};
use lazy_static::lazy_static;
use search_syntax::{ComparisonOperator, FilterExpression};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

type Constructor = fn(&FilterExpression) -> Result<Filter, FilterError>;

/// Static description of one filter kind.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FilterKind {
    pub key: &'static str,
    pub supported_operators: &'static [ComparisonOperator],
    pub summary: &'static str,
    #[serde(skip)]
    construct: Constructor,
}

impl FilterKind {
    pub fn of<F: SearchFilter>() -> Self {
        FilterKind {
            key: F::KEY,
            supported_operators: F::OPERATORS,
            summary: F::SUMMARY,
            construct: construct_as::<F>,
        }
    }

    pub fn supports(&self, operator: ComparisonOperator) -> bool {
        self.supported_operators.contains(&operator)
    }

    pub fn construct(&self, expression: &FilterExpression) -> Result<Filter, FilterError> {
        (self.construct)(expression)
    }
}

fn construct_as<F: SearchFilter>(expression: &FilterExpression) -> Result<Filter, FilterError> {
    F::construct(expression).map(Into::into)
}

lazy_static! {
    static ref STANDARD: FilterRegistry = FilterRegistry::builder()
        .register_builtin()
        .build()
        .expect("built-in filter keys must be unique");
}

/// Lookup table from filter key to filter kind. Immutable once built.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    kinds: BTreeMap<&'static str, FilterKind>,
}

impl FilterRegistry {
    pub fn builder() -> FilterRegistryBuilder {
        FilterRegistryBuilder::default()
    }

    /// The registry of every built-in filter kind, built on first use.
    pub fn standard() -> &'static FilterRegistry {
        &STANDARD
    }

    fn from_kinds(kinds: Vec<FilterKind>) -> Result<Self, RegistryError> {
        let mut map = BTreeMap::new();
        for kind in kinds {
            if kind.supported_operators.is_empty() {
                return Err(RegistryError::NoOperators { key: kind.key });
            }
            if map.insert(kind.key, kind).is_some() {
                return Err(RegistryError::DuplicateKey { key: kind.key });
            }
        }
        debug!("Built filter registry with {} kinds", map.len());
        Ok(FilterRegistry { kinds: map })
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, key: &str) -> Result<&FilterKind, FilterError> {
        self.kinds
            .get(key)
            .ok_or_else(|| FilterError::UnknownFilterKey {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.kinds.contains_key(key)
    }

    /// Registered kinds, ordered by key.
    pub fn kinds(&self) -> impl Iterator<Item = &FilterKind> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct FilterRegistryBuilder {
    kinds: Vec<FilterKind>,
}

impl FilterRegistryBuilder {
    pub fn register<F: SearchFilter>(self) -> Self {
        self.register_kind(FilterKind::of::<F>())
    }

    pub fn register_kind(mut self, kind: FilterKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Adds every built-in filter kind.
    pub fn register_builtin(mut self) -> Self {
        self.kinds.extend(builtin_kinds());
        self
    }

    pub fn build(self) -> Result<FilterRegistry, RegistryError> {
        FilterRegistry::from_kinds(self.kinds)
    }
}
