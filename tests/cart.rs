// tests/cart.rs
//
// Cart attribute contract: sold pieces are commerce-inert.
//
use lookbook::cart::cart_item;
use lookbook::catalog::{self};
use lookbook::csv::{Delim, Table};

const PAGE: &str = "https://gnuhr.shop/pieces";

#[test]
fn available_piece_gets_the_full_attribute_set() {
    let text = "id,name,price,image,description,sold\n\
                07,Pleated Skirt,CHF 120.5,https://cdn.example/07.jpg,\"hand pleated\",\n";
    let cat = catalog::build(&Table::from_text(text, Delim::Csv));
    let item = cart_item(&cat.records[0], PAGE).expect("available piece");

    assert_eq!(item.id, "07");
    assert_eq!(item.name, "Pleated Skirt");
    assert_eq!(item.price, "120.50"); // normalized two-decimal form
    assert_eq!(item.url, PAGE);
    assert_eq!(item.image, "https://cdn.example/07.jpg");
    assert_eq!(item.description, "hand pleated");
}

#[test]
fn sold_piece_never_gets_cart_attributes() {
    let text = "id,name,price,sold\n08,Wool Coat,CHF 310,yes\n";
    let cat = catalog::build(&Table::from_text(text, Delim::Csv));
    assert!(cart_item(&cat.records[0], PAGE).is_none());
}

#[test]
fn missing_image_degrades_to_empty_attribute() {
    let text = "id,name,price\n09,Linen Shirt,CHF 95\n";
    let cat = catalog::build(&Table::from_text(text, Delim::Csv));
    let item = cart_item(&cat.records[0], PAGE).unwrap();
    assert_eq!(item.image, "");
}
