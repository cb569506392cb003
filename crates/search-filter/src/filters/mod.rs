use crate::{
    error::{ExpectedValue, FilterError},
    predicate::{Predicate, ViewModel},
    registry::FilterKind,
};
use model::core::relation::BinaryRelation;
use search_syntax::{ComparisonOperator, FilterExpression};

pub mod archived;
pub mod author;
pub mod date;
pub mod keyword;
pub mod license;
pub mod platform;
pub mod product;
pub mod stars;

pub use archived::ArchivedFilter;
pub use author::AuthorFilter;
pub use date::{LastActivityFilter, LastCommitFilter};
pub use keyword::KeywordFilter;
pub use license::LicenseFilter;
pub use platform::PlatformFilter;
pub use product::ProductFilter;
pub use stars::StarsFilter;

/// Behaviour shared by every filter kind.
///
/// A kind declares its key, the comparisons it accepts and how raw text
/// becomes a typed value. Construction and the view model are provided.
pub trait SearchFilter: Sized + Into<Filter> {
    const KEY: &'static str;
    const OPERATORS: &'static [ComparisonOperator];
    const SUMMARY: &'static str;

    type Value;

    fn parse_value(raw: &str) -> Result<Self::Value, ExpectedValue>;

    fn from_parts(operator: ComparisonOperator, value: Self::Value) -> Self;

    fn predicate(&self) -> Predicate;

    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn supports(operator: ComparisonOperator) -> bool {
        Self::OPERATORS.contains(&operator)
    }

    /// Validates the operator before the value, so an unsupported comparison
    /// is reported even when the value is also bad.
    fn construct(expression: &FilterExpression) -> Result<Self, FilterError> {
        if !Self::supports(expression.operator) {
            return Err(FilterError::UnsupportedComparison {
                key: Self::KEY.to_string(),
                operator: expression.operator,
            });
        }

        let value =
            Self::parse_value(&expression.raw_value).map_err(|expected| {
                FilterError::InvalidValue {
                    key: Self::KEY.to_string(),
                    raw_value: expression.raw_value.clone(),
                    expected,
                }
            })?;

        Ok(Self::from_parts(expression.operator, value))
    }

    fn view_model(&self) -> ViewModel {
        self.predicate().view_model()
    }
}

macro_rules! filter_kinds {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Every built-in filter kind.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Filter {
            $($variant($ty)),+
        }

        impl Filter {
            pub fn key(&self) -> &'static str {
                match self {
                    $(Filter::$variant(_) => <$ty as SearchFilter>::KEY),+
                }
            }

            pub fn predicate(&self) -> Predicate {
                match self {
                    $(Filter::$variant(filter) => filter.predicate()),+
                }
            }

            pub fn view_model(&self) -> ViewModel {
                match self {
                    $(Filter::$variant(filter) => filter.view_model()),+
                }
            }
        }

        $(
            impl From<$ty> for Filter {
                fn from(filter: $ty) -> Self {
                    Filter::$variant(filter)
                }
            }
        )+

        /// Descriptors of all built-in kinds, in declaration order.
        pub fn builtin_kinds() -> Vec<FilterKind> {
            vec![$(FilterKind::of::<$ty>()),+]
        }
    };
}

filter_kinds! {
    Author(AuthorFilter),
    Keyword(KeywordFilter),
    Stars(StarsFilter),
    LastActivity(LastActivityFilter),
    LastCommit(LastCommitFilter),
    License(LicenseFilter),
    Platform(PlatformFilter),
    Product(ProductFilter),
    Archived(ArchivedFilter),
}

pub(crate) const EQUALITY: &[ComparisonOperator] =
    &[ComparisonOperator::Is, ComparisonOperator::IsNot];

pub(crate) const ORDERED: &[ComparisonOperator] = &ComparisonOperator::ALL;

/// Relation for free text matched against a scalar column.
pub(crate) fn like_relation(operator: ComparisonOperator) -> BinaryRelation {
    match operator {
        ComparisonOperator::IsNot => BinaryRelation::NotCaseInsensitiveLike,
        _ => BinaryRelation::CaseInsensitiveLike,
    }
}

/// Relation for a value matched against an array column.
pub(crate) fn contains_relation(operator: ComparisonOperator) -> BinaryRelation {
    match operator {
        ComparisonOperator::IsNot => BinaryRelation::NotContains,
        _ => BinaryRelation::Contains,
    }
}

pub(crate) fn non_empty(raw: &str) -> Result<&str, ExpectedValue> {
    if raw.trim().is_empty() {
        Err(ExpectedValue::Text)
    } else {
        Ok(raw)
    }
}

/// Case-insensitive lookup of `raw` among `(name, value)` pairs.
pub(crate) fn parse_choice<T: Copy>(raw: &str, choices: &[(&str, T)]) -> Option<T> {
    let raw = raw.trim().to_lowercase();
    choices
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, value)| *value)
}
