use super::{SearchFilter, parse_choice};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use model::core::{relation::BinaryRelation, value::Value};
use search_syntax::ComparisonOperator;
use std::collections::BTreeSet;

/// Platforms a package can be compatible with, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    Ios,
    Macos,
    Linux,
    Tvos,
    Watchos,
    Visionos,
}

const PLATFORMS: &[(&str, Platform)] = &[
    ("ios", Platform::Ios),
    ("macos", Platform::Macos),
    ("linux", Platform::Linux),
    ("tvos", Platform::Tvos),
    ("watchos", Platform::Watchos),
    ("visionos", Platform::Visionos),
];

const PLATFORM_IDS: &[&str] = &["ios", "macos", "linux", "tvos", "watchos", "visionos"];

impl Platform {
    pub fn id(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
            Platform::Tvos => "tvos",
            Platform::Watchos => "watchos",
            Platform::Visionos => "visionos",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
            Platform::Linux => "Linux",
            Platform::Tvos => "tvOS",
            Platform::Watchos => "watchOS",
            Platform::Visionos => "visionOS",
        }
    }
}

/// Requires compatibility with every listed platform.
///
/// ```text
/// platform:ios,linux  - builds for both iOS and Linux
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformFilter {
    operator: ComparisonOperator,
    platforms: BTreeSet<Platform>,
}

impl SearchFilter for PlatformFilter {
    const KEY: &'static str = "platform";
    const OPERATORS: &'static [ComparisonOperator] = &[ComparisonOperator::Is];
    const SUMMARY: &'static str = "Comma separated list of compatible platforms";

    type Value = BTreeSet<Platform>;

    fn parse_value(raw: &str) -> Result<BTreeSet<Platform>, ExpectedValue> {
        let expected = ExpectedValue::ListOf(PLATFORM_IDS);
        let platforms = raw
            .split(',')
            .map(|item| parse_choice(item, PLATFORMS).ok_or(expected))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(platforms)
    }

    fn from_parts(operator: ComparisonOperator, platforms: BTreeSet<Platform>) -> Self {
        PlatformFilter {
            operator,
            platforms,
        }
    }

    fn predicate(&self) -> Predicate {
        let ids: Vec<String> = self.platforms.iter().map(|p| p.id().to_string()).collect();
        let display = self
            .platforms
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ");

        Predicate::new(
            Self::KEY,
            self.operator,
            BinaryRelation::Contains,
            BindableValue::Literal(Value::StringArray(ids.clone())),
            display,
        )
        .with_query_value(ids.join(","))
    }
}
