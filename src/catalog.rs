// src/catalog.rs
//
// Turns a parsed feed table into the in-memory catalog:
// - one immutable CatalogRecord per feed row (rows without an id are dropped),
// - derived facet tags (category / style / size) as normalized slugs,
// - the frozen FacetVocabulary the filter UI enumerates.
//
// The catalog is rebuilt wholesale on every ingestion pass; there is no
// incremental update path.

use std::collections::BTreeSet;

/// Header substrings that mark the image column. Column order in the feed
/// is not guaranteed, so the column is detected by name, first match wins.
pub const IMAGE_COL_HINTS: &[&str] = &["thumbnail", "image", "img", "pic"];

/// Size facet domain, in the fixed order the UI enumerates it.
pub const SIZE_DOMAIN: &[&str] = &["s", "m", "l", "one size"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogRecord {
    pub id: String,
    pub name: String,
    pub price_text: String,
    /// Parsed from `price_text`; 0 when unparseable, never negative.
    pub price_amount: f64,
    pub size_text: String,
    pub size_tags: BTreeSet<String>,
    pub category_tags: BTreeSet<String>,
    pub style_tags: BTreeSet<String>,
    /// Display-only chips (the feed's color column); not a filter facet.
    pub color_tags: BTreeSet<String>,
    pub image_url: Option<String>,
    pub description: String,
    pub sold: bool,
}

impl CatalogRecord {
    /// Price rendered with exactly two fraction digits (display/commerce).
    pub fn price_display(&self) -> String {
        format!("{:.2}", self.price_amount)
    }
}

/// Facet slug sets accumulated over one ingestion pass, frozen afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacetVocabulary {
    pub category: BTreeSet<String>,
    pub style: BTreeSet<String>,
    pub size: BTreeSet<String>,
}

impl FacetVocabulary {
    /// Size slugs in fixed domain order (s, m, l, one size), not
    /// insertion or lexical order.
    pub fn sizes_ordered(&self) -> Vec<&str> {
        SIZE_DOMAIN
            .iter()
            .copied()
            .filter(|s| self.size.contains(*s))
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Records in feed row order (row order is display order).
    pub records: Vec<CatalogRecord>,
    pub facets: FacetVocabulary,
}

impl Catalog {
    pub fn record(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Build the catalog from a parsed feed table. Pure: same table in,
/// same catalog out.
pub fn build(table: &crate::csv::Table) -> Catalog {
    let image_col = table.col_containing(IMAGE_COL_HINTS);

    let mut records = Vec::with_capacity(table.rows.len());
    let mut facets = FacetVocabulary::default();

    for row in &table.rows {
        let id = table.field(row, "id").trim().to_string();
        if id.is_empty() { continue; } // no identity, no record

        let price_text = table.field(row, "price").trim().to_string();
        let size_text = table.field(row, "size").trim().to_string();

        // `type` is the feed's category column; `pleat` folds into style.
        let category_tags = split_tags(table.field(row, "type"));
        let mut style_tags = split_tags(table.field(row, "style"));
        style_tags.extend(split_tags(table.field(row, "pleat")));
        let color_tags = split_tags(table.field(row, "color"));

        let size_tags = parse_sizes(&size_text);

        let image_url = image_col
            .and_then(|ix| row.get(ix))
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(rewrite_image_url);

        let rec = CatalogRecord {
            name: table.field(row, "name").trim().to_string(),
            price_amount: parse_price(&price_text),
            price_text,
            size_tags,
            category_tags,
            style_tags,
            color_tags,
            image_url,
            description: table.field(row, "description").trim().to_string(),
            sold: table.field(row, "sold").trim().eq_ignore_ascii_case("yes"),
            size_text,
            id,
        };

        facets.category.extend(rec.category_tags.iter().cloned());
        facets.style.extend(rec.style_tags.iter().cloned());
        facets.size.extend(rec.size_tags.iter().cloned());

        records.push(rec);
    }

    Catalog { records, facets }
}

/* ---------------- Field derivation ---------------- */

/// Normalize a tag to its slug form: lower-case, trim, internal
/// whitespace runs collapsed to single hyphens. Catalog tags and filter
/// slugs compare as plain string equality because both pass through here.
///
/// `&`, `=` and `#` are separators too: they are reserved by the
/// serialized `key=slug&…` filter form, so a slug must never contain
/// them or the selection would not survive a round trip.
pub fn slugify(text: &str) -> String {
    let mut out = s!();
    let mut in_ws = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() || matches!(ch, '&' | '=' | '#') {
            in_ws = true;
            continue;
        }
        if in_ws && !out.is_empty() {
            out.push('-');
        }
        in_ws = false;
        for lc in ch.to_lowercase() {
            out.push(lc);
        }
    }
    out
}

/// Comma-split a free-text field into slug tags; empty segments dropped.
pub fn split_tags(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(slugify)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Strip everything but digits and `.`, then parse. Unparseable → 0.
pub fn parse_price(text: &str) -> f64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    match digits.parse::<f64>() {
        Ok(v) if v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Decode free-form size text into the set of discrete size tags.
///
/// "S-L" → {s,m,l}; "S, M" → {s,m}; "Uni" / "One Size" / "OS" → {one size}.
/// Range and standalone-token recognition are applied together: a string
/// can trigger both.
pub fn parse_sizes(text: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    let lc = text.to_lowercase();

    // Contiguous ranges, spaces around the hyphen tolerated.
    let packed: String = lc.chars().filter(|c| !c.is_whitespace()).collect();
    if packed.contains("s-l") { tags.extend(["s", "m", "l"].map(|t| s!(t))); }
    if packed.contains("s-m") { tags.extend(["s", "m"].map(|t| s!(t))); }
    if packed.contains("m-l") { tags.extend(["m", "l"].map(|t| s!(t))); }

    // Standalone tokens.
    for tok in lc.split(|c: char| c.is_whitespace() || c == ',' || c == '-') {
        if matches!(tok, "s" | "m" | "l") {
            tags.insert(s!(tok));
        }
    }

    // One-size markers, substring match.
    if ["uni", "one", "os", "all"].iter().any(|m| lc.contains(m)) {
        tags.insert(s!("one size"));
    }

    tags
}

/* ---------------- Image host rewrite ---------------- */

/// Rewrite Google Drive share links to their direct-content form;
/// anything else passes through untouched. Pure string transform.
pub fn rewrite_image_url(url: &str) -> String {
    if !url.contains("drive.google.com") {
        return s!(url);
    }

    // ".../file/d/<id>/view" or "...?id=<id>"
    let id = url
        .split_once("/file/d/")
        .map(|(_, rest)| rest.split(['/', '?']).next().unwrap_or(""))
        .or_else(|| {
            url.split_once("id=")
                .map(|(_, rest)| rest.split('&').next().unwrap_or(""))
        })
        .unwrap_or("");

    if id.is_empty() {
        s!(url)
    } else {
        join!("https://lh3.googleusercontent.com/d/", id)
    }
}
