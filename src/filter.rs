// src/filter.rs
//
// Filter selection state and the per-record match/visibility pass.
//
// A selection holds at most one slug per facet dimension. It serializes
// to a flat `key=slug` query string (joined with `&`) so the whole filter
// state fits in a shareable location fragment after the `#!` marker.
// State changes re-run the full match pass over every record; the catalog
// is product-scale, so no diffing.

use crate::catalog::CatalogRecord;

/// Marker separating the page location from the serialized selection.
pub const FRAGMENT_MARKER: &str = "#!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Category,
    Style,
    Size,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Category, Dimension::Style, Dimension::Size];

    /// Query key, named per source feed semantics.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Style => "style",
            Dimension::Size => "size",
        }
    }
}

/// At most one active slug per dimension. Absent slot = no constraint;
/// an entirely empty selection means "show all, unfiltered".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    category: Option<String>,
    style: Option<String>,
    size: Option<String>,
}

impl FilterSelection {
    pub fn get(&self, dim: Dimension) -> Option<&str> {
        match dim {
            Dimension::Category => self.category.as_deref(),
            Dimension::Style => self.style.as_deref(),
            Dimension::Size => self.size.as_deref(),
        }
    }

    fn slot(&mut self, dim: Dimension) -> &mut Option<String> {
        match dim {
            Dimension::Category => &mut self.category,
            Dimension::Style => &mut self.style,
            Dimension::Size => &mut self.size,
        }
    }

    /// Single-slot mutation: a new slug unconditionally replaces any
    /// prior slug in that dimension.
    pub fn set(&mut self, dim: Dimension, slug: impl Into<String>) {
        *self.slot(dim) = Some(slug.into());
    }

    pub fn clear(&mut self, dim: Dimension) {
        *self.slot(dim) = None;
    }

    /// Set, or clear when the same slug is already active (chip toggling).
    pub fn toggle(&mut self, dim: Dimension, slug: &str) {
        if self.get(dim) == Some(slug) {
            self.clear(dim);
        } else {
            self.set(dim, slug);
        }
    }

    pub fn is_empty(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.get(*d).is_none())
    }

    /// Flat `key=slug` pairs in fixed dimension order.
    pub fn serialize(&self) -> String {
        let mut parts = Vec::new();
        for dim in Dimension::ALL {
            if let Some(slug) = self.get(dim) {
                parts.push(join!(dim.key(), "=", slug));
            }
        }
        parts.join("&")
    }

    /// Parse the flat form back. Unknown keys and malformed pairs are
    /// ignored; a later pair for the same dimension wins (single slot).
    pub fn deserialize(text: &str) -> Self {
        let mut sel = Self::default();
        for pair in text.split('&') {
            let Some((key, slug)) = pair.split_once('=') else { continue };
            let slug = slug.trim();
            if slug.is_empty() { continue; }
            for dim in Dimension::ALL {
                if key.trim() == dim.key() {
                    sel.set(dim, slug);
                }
            }
        }
        sel
    }

    /// Parse a page-location fragment. Accepts the bare serialized form
    /// or one prefixed by the `#!` marker; no marker and no pairs → empty.
    pub fn parse_fragment(text: &str) -> Self {
        let body = match text.find(FRAGMENT_MARKER) {
            Some(ix) => &text[ix + FRAGMENT_MARKER.len()..],
            None => text,
        };
        Self::deserialize(body)
    }
}

/* ---------------- Match pass ---------------- */

/// True iff every active dimension's slug is contained in the record's
/// corresponding tag set. Inactive dimensions impose no constraint.
pub fn matches(record: &CatalogRecord, sel: &FilterSelection) -> bool {
    for dim in Dimension::ALL {
        let Some(slug) = sel.get(dim) else { continue };
        let tags = match dim {
            Dimension::Category => &record.category_tags,
            Dimension::Style => &record.style_tags,
            Dimension::Size => &record.size_tags,
        };
        if !tags.contains(slug) {
            return false;
        }
    }
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Not ghosted, not specially marked.
    Normal,
    /// Matches the active selection; scroll-targetable.
    Match,
    /// Suppressed/ghosted in presentation.
    FilteredOut,
}

/// Presentation decision for one record under the current selection.
///
/// Sold records are exempt from filtered-out styling regardless of match:
/// their sale status is always shown.
pub fn visibility(record: &CatalogRecord, sel: &FilterSelection) -> Visibility {
    if sel.is_empty() {
        return Visibility::Normal;
    }
    if matches(record, sel) {
        Visibility::Match
    } else if record.sold {
        Visibility::Normal
    } else {
        Visibility::FilteredOut
    }
}

/// Identities of all matching records, re-derived per state change.
pub fn match_ids(records: &[CatalogRecord], sel: &FilterSelection) -> Vec<String> {
    if sel.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| matches(r, sel))
        .map(|r| r.id.clone())
        .collect()
}
