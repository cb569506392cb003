use super::{EQUALITY, SearchFilter, parse_choice};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use lazy_static::lazy_static;
use model::core::{relation::BinaryRelation, value::Value};
use search_syntax::ComparisonOperator;

/// A license the package index recognizes by its SPDX-style id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum License {
    Mit,
    Apache2,
    Bsd2Clause,
    Bsd3Clause,
    Isc,
    Mpl2,
    Zlib,
    Bsl1,
    Cc0,
    Unlicense,
    Gpl2,
    Gpl3,
    Lgpl21,
    Lgpl3,
    Agpl3,
}

impl License {
    pub const ALL: [License; 15] = [
        License::Mit,
        License::Apache2,
        License::Bsd2Clause,
        License::Bsd3Clause,
        License::Isc,
        License::Mpl2,
        License::Zlib,
        License::Bsl1,
        License::Cc0,
        License::Unlicense,
        License::Gpl2,
        License::Gpl3,
        License::Lgpl21,
        License::Lgpl3,
        License::Agpl3,
    ];

    pub fn id(self) -> &'static str {
        match self {
            License::Mit => "mit",
            License::Apache2 => "apache-2.0",
            License::Bsd2Clause => "bsd-2-clause",
            License::Bsd3Clause => "bsd-3-clause",
            License::Isc => "isc",
            License::Mpl2 => "mpl-2.0",
            License::Zlib => "zlib",
            License::Bsl1 => "bsl-1.0",
            License::Cc0 => "cc0-1.0",
            License::Unlicense => "unlicense",
            License::Gpl2 => "gpl-2.0",
            License::Gpl3 => "gpl-3.0",
            License::Lgpl21 => "lgpl-2.1",
            License::Lgpl3 => "lgpl-3.0",
            License::Agpl3 => "agpl-3.0",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache 2.0",
            License::Bsd2Clause => "BSD 2-Clause",
            License::Bsd3Clause => "BSD 3-Clause",
            License::Isc => "ISC",
            License::Mpl2 => "MPL 2.0",
            License::Zlib => "zlib",
            License::Bsl1 => "Boost 1.0",
            License::Cc0 => "CC0 1.0",
            License::Unlicense => "The Unlicense",
            License::Gpl2 => "GPL 2.0",
            License::Gpl3 => "GPL 3.0",
            License::Lgpl21 => "LGPL 2.1",
            License::Lgpl3 => "LGPL 3.0",
            License::Agpl3 => "AGPL 3.0",
        }
    }

    /// Copyleft licenses conflict with App Store distribution terms.
    pub fn is_app_store_compatible(self) -> bool {
        !matches!(
            self,
            License::Gpl2 | License::Gpl3 | License::Lgpl21 | License::Lgpl3 | License::Agpl3
        )
    }
}

lazy_static! {
    static ref COMPATIBLE_IDS: Vec<String> = License::ALL
        .iter()
        .filter(|license| license.is_app_store_compatible())
        .map(|license| license.id().to_string())
        .collect();
}

const LICENSE_CHOICES: &[&str] = &[
    "compatible",
    "incompatible",
    "mit",
    "apache-2.0",
    "bsd-2-clause",
    "bsd-3-clause",
    "isc",
    "mpl-2.0",
    "zlib",
    "bsl-1.0",
    "cc0-1.0",
    "unlicense",
    "gpl-2.0",
    "gpl-3.0",
    "lgpl-2.1",
    "lgpl-3.0",
    "agpl-3.0",
];

/// Either a compatibility class or one specific license.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseSelection {
    Compatible,
    Incompatible,
    Specific(License),
}

impl LicenseSelection {
    pub fn query_value(self) -> &'static str {
        match self {
            LicenseSelection::Compatible => "compatible",
            LicenseSelection::Incompatible => "incompatible",
            LicenseSelection::Specific(license) => license.id(),
        }
    }

    pub fn display_value(self) -> &'static str {
        match self {
            LicenseSelection::Compatible => "compatible with the App Store",
            LicenseSelection::Incompatible => "incompatible with the App Store",
            LicenseSelection::Specific(license) => license.full_name(),
        }
    }
}

/// Matches the package license, either by App Store compatibility or by id.
///
/// ```text
/// license:compatible    - license allows App Store distribution
/// license:!incompatible - same as above
/// license:mit           - MIT licensed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFilter {
    operator: ComparisonOperator,
    selection: LicenseSelection,
}

impl SearchFilter for LicenseFilter {
    const KEY: &'static str = "license";
    const OPERATORS: &'static [ComparisonOperator] = EQUALITY;
    const SUMMARY: &'static str = "License id, or App Store compatibility (compatible, incompatible)";

    type Value = LicenseSelection;

    fn parse_value(raw: &str) -> Result<LicenseSelection, ExpectedValue> {
        let mut choices = vec![
            ("compatible", LicenseSelection::Compatible),
            ("incompatible", LicenseSelection::Incompatible),
        ];
        choices.extend(
            License::ALL
                .iter()
                .map(|license| (license.id(), LicenseSelection::Specific(*license))),
        );
        parse_choice(raw, &choices).ok_or(ExpectedValue::OneOf(LICENSE_CHOICES))
    }

    fn from_parts(operator: ComparisonOperator, selection: LicenseSelection) -> Self {
        LicenseFilter {
            operator,
            selection,
        }
    }

    fn predicate(&self) -> Predicate {
        let negated = self.operator == ComparisonOperator::IsNot;
        let (relation, value) = match self.selection {
            LicenseSelection::Compatible | LicenseSelection::Incompatible => {
                let wants_compatible =
                    (self.selection == LicenseSelection::Compatible) != negated;
                let relation = if wants_compatible {
                    BinaryRelation::In
                } else {
                    BinaryRelation::NotIn
                };
                (relation, Value::StringArray(COMPATIBLE_IDS.clone()))
            }
            LicenseSelection::Specific(license) => (
                self.operator.relation(),
                Value::String(license.id().to_string()),
            ),
        };

        Predicate::new(
            Self::KEY,
            self.operator,
            relation,
            BindableValue::Literal(value),
            self.selection.display_value(),
        )
        .with_query_value(self.selection.query_value())
    }
}
