// src/cart.rs
//
// Attribute contract for the external cart widget. The widget reads a
// fixed attribute set per purchasable piece; sold pieces never get one
// (commerce-inert). Everything here is data — the widget itself is an
// opaque capability and may be absent, in which case nothing consumes
// these and that is fine.

use crate::catalog::CatalogRecord;

/// The fixed attribute set the cart widget contract requires.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Normalized two-decimal price, not the raw feed text.
    pub price: String,
    /// Canonical page URL.
    pub url: String,
    pub image: String,
    pub description: String,
}

/// Build the cart attributes for a record, or `None` when the record is
/// sold and must not be purchasable.
pub fn cart_item(record: &CatalogRecord, page_url: &str) -> Option<CartItem> {
    if record.sold {
        return None;
    }
    Some(CartItem {
        id: record.id.clone(),
        name: record.name.clone(),
        price: record.price_display(),
        url: s!(page_url),
        image: record.image_url.clone().unwrap_or_default(),
        description: record.description.clone(),
    })
}
