//! Code → enriched hexagram resolution.
//!
//! Resolution looks a code up in the catalog, then overlays the palace table's
//! branch sequence and ruling element on top of the record. Kinship is not
//! part of a resolved hexagram: it depends on which hexagram supplies the
//! reference element, so [`HexagramPair`] computes it for both sides against
//! the original's ruling element.

use serde::Serialize;

use zengshan_types::{
    Branch, Element, HexagramCode, Kinship, LINE_COUNT, Palace, PalaceConfigTable, classify_all,
};

use crate::catalog::{HexagramCatalog, HexagramRecord};
use crate::session::CastResult;

/// Catalog lookup outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a HexagramRecord),
    NotFound(HexagramCode),
}

/// Where a resolved hexagram's branch data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchSource {
    PalaceTable,
    /// The palace had no table entry; the record's inline data was used as-is.
    CatalogRecord,
}

/// A catalogued hexagram with palace-corrected line data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownHexagram {
    code: HexagramCode,
    name: &'static str,
    judgment: &'static str,
    palace: Palace,
    element: Element,
    branches: [Branch; LINE_COUNT],
    line_elements: [Element; LINE_COUNT],
    ruling_line: u8,
    responding_line: u8,
    branch_source: BranchSource,
}

impl KnownHexagram {
    #[must_use]
    pub fn code(&self) -> HexagramCode {
        self.code
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn judgment(&self) -> &'static str {
        self.judgment
    }

    #[must_use]
    pub fn palace(&self) -> Palace {
        self.palace
    }

    /// Ruling element after palace correction.
    #[must_use]
    pub fn element(&self) -> Element {
        self.element
    }

    #[must_use]
    pub fn branches(&self) -> &[Branch; LINE_COUNT] {
        &self.branches
    }

    #[must_use]
    pub fn line_elements(&self) -> &[Element; LINE_COUNT] {
        &self.line_elements
    }

    /// 世, 1-indexed.
    #[must_use]
    pub fn ruling_line(&self) -> u8 {
        self.ruling_line
    }

    /// 应, 1-indexed.
    #[must_use]
    pub fn responding_line(&self) -> u8 {
        self.responding_line
    }

    #[must_use]
    pub fn branch_source(&self) -> BranchSource {
        self.branch_source
    }

    /// Kinship of each line against `reference`.
    #[must_use]
    pub fn kinship_against(&self, reference: Element) -> [Kinship; LINE_COUNT] {
        classify_all(reference, &self.line_elements)
    }
}

/// A resolved hexagram, or the placeholder for an uncatalogued code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolvedHexagram {
    Known(KnownHexagram),
    Unknown { code: HexagramCode },
}

impl ResolvedHexagram {
    pub const UNKNOWN_NAME: &'static str = "Unknown hexagram";

    #[must_use]
    pub fn code(&self) -> HexagramCode {
        match self {
            ResolvedHexagram::Known(known) => known.code(),
            ResolvedHexagram::Unknown { code } => *code,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ResolvedHexagram::Known(known) => known.name(),
            ResolvedHexagram::Unknown { .. } => Self::UNKNOWN_NAME,
        }
    }

    #[must_use]
    pub fn judgment(&self) -> String {
        match self {
            ResolvedHexagram::Known(known) => known.judgment().to_string(),
            ResolvedHexagram::Unknown { code } => format!("no data for code {code}"),
        }
    }

    #[must_use]
    pub fn known(&self) -> Option<&KnownHexagram> {
        match self {
            ResolvedHexagram::Known(known) => Some(known),
            ResolvedHexagram::Unknown { .. } => None,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, ResolvedHexagram::Known(_))
    }
}

/// Original and transformed hexagrams of one cast, with kinship for both
/// evaluated against the original's ruling element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramPair {
    original: ResolvedHexagram,
    transformed: ResolvedHexagram,
    original_kinship: Option<[Kinship; LINE_COUNT]>,
    transformed_kinship: Option<[Kinship; LINE_COUNT]>,
}

impl HexagramPair {
    #[must_use]
    pub fn new(original: ResolvedHexagram, transformed: ResolvedHexagram) -> Self {
        let reference = original.known().map(KnownHexagram::element);
        let kinship = |hexagram: &ResolvedHexagram| {
            let known = hexagram.known()?;
            Some(known.kinship_against(reference?))
        };
        Self {
            original_kinship: kinship(&original),
            transformed_kinship: kinship(&transformed),
            original,
            transformed,
        }
    }

    #[must_use]
    pub fn original(&self) -> &ResolvedHexagram {
        &self.original
    }

    #[must_use]
    pub fn transformed(&self) -> &ResolvedHexagram {
        &self.transformed
    }

    /// `None` when the original is uncatalogued.
    #[must_use]
    pub fn original_kinship(&self) -> Option<&[Kinship; LINE_COUNT]> {
        self.original_kinship.as_ref()
    }

    /// `None` when either hexagram is uncatalogued.
    #[must_use]
    pub fn transformed_kinship(&self) -> Option<&[Kinship; LINE_COUNT]> {
        self.transformed_kinship.as_ref()
    }
}

/// Resolves codes against an injected catalog and palace table.
#[derive(Debug, Clone, Copy)]
pub struct HexagramResolver<'a> {
    catalog: &'a HexagramCatalog,
    palaces: &'a PalaceConfigTable,
}

impl<'a> HexagramResolver<'a> {
    #[must_use]
    pub fn new(catalog: &'a HexagramCatalog, palaces: &'a PalaceConfigTable) -> Self {
        Self { catalog, palaces }
    }

    #[must_use]
    pub fn lookup(&self, code: HexagramCode) -> Resolution<'a> {
        match self.catalog.get(code) {
            Some(record) => Resolution::Found(record),
            None => Resolution::NotFound(code),
        }
    }

    #[must_use]
    pub fn resolve(&self, code: HexagramCode) -> ResolvedHexagram {
        let record = match self.lookup(code) {
            Resolution::Found(record) => record,
            Resolution::NotFound(code) => {
                tracing::warn!(%code, "Hexagram code missing from catalog");
                return ResolvedHexagram::Unknown { code };
            }
        };

        let (element, branches, branch_source) = match self.palaces.get(record.palace()) {
            Some(entry) => {
                if entry.element() != record.element() {
                    tracing::debug!(
                        %code,
                        declared = %record.element(),
                        palace = %entry.element(),
                        "Catalog element disagrees with palace table"
                    );
                }
                (entry.element(), *entry.branches(), BranchSource::PalaceTable)
            }
            None => {
                tracing::warn!(
                    %code,
                    palace = %record.palace(),
                    "Palace missing from palace table; using catalog branches"
                );
                (
                    record.element(),
                    *record.stored_branches(),
                    BranchSource::CatalogRecord,
                )
            }
        };

        ResolvedHexagram::Known(KnownHexagram {
            code,
            name: record.name(),
            judgment: record.judgment(),
            palace: record.palace(),
            element,
            line_elements: branches.map(Branch::element),
            branches,
            ruling_line: record.ruling_line(),
            responding_line: record.responding_line(),
            branch_source,
        })
    }

    #[must_use]
    pub fn resolve_pair(&self, result: &CastResult) -> HexagramPair {
        HexagramPair::new(
            self.resolve(result.original()),
            self.resolve(result.transformed()),
        )
    }
}
