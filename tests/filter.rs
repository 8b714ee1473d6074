// tests/filter.rs
//
// Filter selection semantics: vacuous truth, single-slot dimensions,
// serialization round-trips, sold immunity.
//
use lookbook::catalog::{self, Catalog};
use lookbook::csv::{Delim, Table};
use lookbook::filter::{matches, match_ids, visibility, Dimension, FilterSelection, Visibility};

fn sample() -> Catalog {
    let text = "id,name,pleat,type,size,price,sold\n\
                07,Pleated Skirt,Accordion,Skirt,\"S-M, L\",CHF 120.50,\n\
                08,Wool Coat,,Coat,One Size,CHF 310,yes\n\
                09,Linen Shirt,,Shirt,\"S, M\",CHF 95,\n";
    catalog::build(&Table::from_text(text, Delim::Csv))
}

#[test]
fn empty_selection_matches_everything() {
    let cat = sample();
    let sel = FilterSelection::default();
    assert!(cat.records.iter().all(|r| matches(r, &sel)));
    assert!(cat.records.iter().all(|r| visibility(r, &sel) == Visibility::Normal));
    assert!(match_ids(&cat.records, &sel).is_empty());
}

#[test]
fn selection_is_single_slot_per_dimension() {
    let mut sel = FilterSelection::default();
    sel.set(Dimension::Size, "m");
    sel.set(Dimension::Size, "l");
    assert_eq!(sel.serialize(), "size=l");

    sel.set(Dimension::Category, "skirt");
    sel.clear(Dimension::Size);
    assert_eq!(sel.serialize(), "category=skirt");
}

#[test]
fn serialize_round_trips_other_dimensions() {
    let mut sel = FilterSelection::default();
    sel.set(Dimension::Category, "skirt");
    sel.set(Dimension::Style, "accordion");
    sel.set(Dimension::Size, "m");

    // Mutate one dimension; the others survive the round trip untouched.
    sel.set(Dimension::Size, "l");
    let back = FilterSelection::deserialize(&sel.serialize());
    assert_eq!(back, sel);
    assert_eq!(back.get(Dimension::Category), Some("skirt"));
    assert_eq!(back.get(Dimension::Style), Some("accordion"));
    assert_eq!(back.get(Dimension::Size), Some("l"));
}

#[test]
fn fragment_marker_is_optional_and_absence_means_empty() {
    let sel = FilterSelection::parse_fragment("https://gnuhr.shop/pieces#!category=coat&size=m");
    assert_eq!(sel.get(Dimension::Category), Some("coat"));
    assert_eq!(sel.get(Dimension::Size), Some("m"));

    assert_eq!(FilterSelection::parse_fragment("size=s"), {
        let mut s = FilterSelection::default();
        s.set(Dimension::Size, "s");
        s
    });

    // No marker, no pairs: empty selection, show all.
    assert!(FilterSelection::parse_fragment("https://gnuhr.shop/pieces").is_empty());
}

#[test]
fn feed_tags_with_reserved_characters_round_trip() {
    // A free-text category like "Dresses & Coats" must yield a slug the
    // query form can carry without corruption.
    let text = "id,name,type\n07,Frock,Dresses & Coats\n";
    let cat = catalog::build(&Table::from_text(text, Delim::Csv));
    let slug = cat.facets.category.iter().next().unwrap().clone();
    assert!(!slug.contains(['&', '=', '#']));

    let mut sel = FilterSelection::default();
    sel.set(Dimension::Category, slug.as_str());
    let back = FilterSelection::deserialize(&sel.serialize());
    assert_eq!(back, sel);
    assert!(matches(&cat.records[0], &back));
}

#[test]
fn unknown_keys_are_ignored() {
    let sel = FilterSelection::deserialize("color=red&size=m&junk");
    assert_eq!(sel.get(Dimension::Size), Some("m"));
    assert_eq!(sel.get(Dimension::Category), None);
}

#[test]
fn matching_requires_every_active_dimension() {
    let cat = sample();
    let skirt = cat.record("07").unwrap();

    let mut sel = FilterSelection::default();
    sel.set(Dimension::Size, "m");
    assert!(matches(skirt, &sel));

    sel.set(Dimension::Category, "coat");
    assert!(!matches(skirt, &sel)); // size matches, category does not
}

#[test]
fn size_one_size_excludes_sized_pieces() {
    let cat = sample();
    let mut sel = FilterSelection::default();
    sel.set(Dimension::Size, "one size");

    let ids = match_ids(&cat.records, &sel);
    assert_eq!(ids, vec!["08".to_string()]);
}

#[test]
fn sold_records_are_immune_to_filtered_out() {
    let cat = sample();
    let coat = cat.record("08").unwrap(); // sold
    let shirt = cat.record("09").unwrap();

    let mut sel = FilterSelection::default();
    sel.set(Dimension::Category, "skirt"); // neither matches

    assert!(coat.sold);
    assert_eq!(visibility(coat, &sel), Visibility::Normal);
    assert_eq!(visibility(shirt, &sel), Visibility::FilteredOut);

    // A matching sold record is still a match target.
    let mut sel = FilterSelection::default();
    sel.set(Dimension::Category, "coat");
    assert_eq!(visibility(coat, &sel), Visibility::Match);
}

#[test]
fn toggle_clears_the_active_slug() {
    let mut sel = FilterSelection::default();
    sel.toggle(Dimension::Size, "m");
    assert_eq!(sel.get(Dimension::Size), Some("m"));
    sel.toggle(Dimension::Size, "m");
    assert!(sel.is_empty());
}
