use super::{EQUALITY, SearchFilter, contains_relation, parse_choice};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use model::core::value::Value;
use search_syntax::ComparisonOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Executable,
    Library,
    Plugin,
    Macro,
}

const PRODUCT_TYPES: &[(&str, ProductType)] = &[
    ("executable", ProductType::Executable),
    ("library", ProductType::Library),
    ("plugin", ProductType::Plugin),
    ("macro", ProductType::Macro),
];

const PRODUCT_IDS: &[&str] = &["executable", "library", "plugin", "macro"];

impl ProductType {
    pub fn id(self) -> &'static str {
        match self {
            ProductType::Executable => "executable",
            ProductType::Library => "library",
            ProductType::Plugin => "plugin",
            ProductType::Macro => "macro",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProductType::Executable => "Executable",
            ProductType::Library => "Library",
            ProductType::Plugin => "Plugin",
            ProductType::Macro => "Macro",
        }
    }
}

/// Matches packages by the kind of products they declare.
///
/// ```text
/// product:plugin    - declares at least one plugin
/// product:!library  - declares no library
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    operator: ComparisonOperator,
    product: ProductType,
}

impl SearchFilter for ProductFilter {
    const KEY: &'static str = "product";
    const OPERATORS: &'static [ComparisonOperator] = EQUALITY;
    const SUMMARY: &'static str = "Declared product type (executable, library, plugin, macro)";

    type Value = ProductType;

    fn parse_value(raw: &str) -> Result<ProductType, ExpectedValue> {
        parse_choice(raw, PRODUCT_TYPES).ok_or(ExpectedValue::OneOf(PRODUCT_IDS))
    }

    fn from_parts(operator: ComparisonOperator, product: ProductType) -> Self {
        ProductFilter { operator, product }
    }

    fn predicate(&self) -> Predicate {
        Predicate::new(
            Self::KEY,
            self.operator,
            contains_relation(self.operator),
            BindableValue::Literal(Value::String(self.product.id().to_string())),
            self.product.display_name(),
        )
        .with_query_value(self.product.id())
    }
}
