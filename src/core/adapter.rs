//! # Row Adapter
//!
//! The append-only collection behind the listings view, plus the projection
//! of one record onto a row's display fields.
//!
//! The adapter is an explicit type parameterized over the record type with
//! the record→row mapping injected at construction. The view layer asks it
//! for a [`RowBinding`] per visible row every frame; the binding is a
//! transient value with no identity, so re-binding is always safe.

use crate::api::types::Listing;

/// Display fields for one row. Plain strings — the view layer decides how
/// they land on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBinding {
    pub name: String,
    pub address: String,
    pub price_label: String,
    pub size_label: String,
    pub rooms_chip: String,
    pub image_url: String,
}

/// Ordered, append-only collection of records with an injected bind strategy.
///
/// Insertion order is display order. There is no removal or reordering —
/// the collection always holds exactly the records appended so far.
pub struct RowAdapter<T> {
    items: Vec<T>,
    bind: fn(&T) -> RowBinding,
}

impl<T> RowAdapter<T> {
    pub fn new(bind: fn(&T) -> RowBinding) -> Self {
        Self {
            items: Vec::new(),
            bind,
        }
    }

    /// Appends one record. The next frame picks the new row up.
    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Projects the record at `position` onto its display fields.
    /// Idempotent — called once per visible row per frame.
    pub fn bind_row(&self, position: usize) -> Option<RowBinding> {
        self.items.get(position).map(self.bind)
    }
}

/// The concrete bind strategy for apartment listings.
pub fn bind_listing(listing: &Listing) -> RowBinding {
    RowBinding {
        name: listing.name.clone(),
        address: listing.address.clone(),
        price_label: format!("{} per night", listing.price_per_night),
        size_label: format!("{}", listing.size),
        rooms_chip: format!("{} kambariai", listing.rooms),
        image_url: listing.image_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Listing {
        Listing {
            name: "Sunny Flat".to_string(),
            address: "1 Main St".to_string(),
            price_per_night: "50".to_string(),
            size: 40.0,
            rooms: 2,
            image_url: "https://img.example/1.jpg".to_string(),
        }
    }

    #[test]
    fn test_bind_listing_formats_all_fields() {
        let binding = bind_listing(&sample());
        assert_eq!(binding.name, "Sunny Flat");
        assert_eq!(binding.address, "1 Main St");
        assert_eq!(binding.price_label, "50 per night");
        assert_eq!(binding.size_label, "40");
        assert_eq!(binding.rooms_chip, "2 kambariai");
    }

    #[test]
    fn test_fractional_size_keeps_decimals() {
        let mut listing = sample();
        listing.size = 55.5;
        assert_eq!(bind_listing(&listing).size_label, "55.5");
    }

    #[test]
    fn test_add_item_preserves_order() {
        let mut adapter = RowAdapter::new(bind_listing);
        for i in 0..3 {
            let mut listing = sample();
            listing.name = format!("Flat {i}");
            adapter.add_item(listing);
        }
        assert_eq!(adapter.len(), 3);
        assert_eq!(adapter.item(0).unwrap().name, "Flat 0");
        assert_eq!(adapter.item(2).unwrap().name, "Flat 2");
    }

    #[test]
    fn test_bind_row_is_repeatable() {
        let mut adapter = RowAdapter::new(bind_listing);
        adapter.add_item(sample());
        let first = adapter.bind_row(0).unwrap();
        let second = adapter.bind_row(0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bind_row_out_of_range() {
        let adapter = RowAdapter::new(bind_listing);
        assert!(adapter.bind_row(0).is_none());
    }
}
