//! Pure view-model layer: functions from backend data to what the
//! components project, testable without a browser.

use bazaar_core::models::Listing;

pub const NO_LISTINGS: &str = "No listings found.";
pub const LISTINGS_FAILED: &str = "Failed to load listings.";
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials.";
pub const LOGIN_FAILED: &str = "Login failed. Please check your details.";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match.";
pub const CREATE_REJECTED: &str = "Failed to create user.";
pub const CREATE_FAILED: &str = "Error creating user. Try again.";
pub const USER_CREATED: &str = "User created successfully! You can now log in.";

/// Everything a listing card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub listing_id: i64,
    pub title: String,
    pub price_label: String,
    pub seller: String,
    /// First photo of the listing, when it has any.
    pub photo_url: Option<String>,
}

/// Cards for a listings reply, in response order.
pub fn listing_cards(listings: &[Listing]) -> Vec<ListingCard> {
    listings
        .iter()
        .map(|listing| ListingCard {
            listing_id: listing.listing_id,
            title: listing.title.clone(),
            price_label: price_label(listing.price),
            seller: listing.user.username.clone(),
            photo_url: listing.photos.first().map(|p| p.photo_url.clone()),
        })
        .collect()
}

/// "$120" for integral prices, "$123.45" otherwise.
pub fn price_label(price: f64) -> String {
    format!("${}", price)
}

/// Local precondition of the creation form; when it fails, no request is
/// issued.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::models::{Photo, Seller};

    fn listing(id: i64, title: &str, price: f64, seller: &str, photos: &[&str]) -> Listing {
        Listing {
            listing_id: id,
            title: title.to_string(),
            price,
            description: None,
            status: Some("active".to_string()),
            created_at: None,
            user: Seller {
                user_id: id * 10,
                username: seller.to_string(),
                email: None,
                profile_picture_url: None,
            },
            photos: photos
                .iter()
                .map(|url| Photo {
                    photo_id: None,
                    photo_url: url.to_string(),
                    uploaded_at: None,
                })
                .collect(),
        }
    }

    #[test]
    fn no_cards_for_an_empty_reply() {
        assert!(listing_cards(&[]).is_empty());
    }

    #[test]
    fn one_card_per_listing_in_response_order() {
        let listings = vec![
            listing(1, "Bike", 120.0, "sam", &["https://cdn.example.com/a.jpg"]),
            listing(2, "Lamp", 8.5, "kim", &[]),
            listing(3, "Desk", 60.0, "ana", &["https://cdn.example.com/b.jpg"]),
        ];

        let cards = listing_cards(&listings);
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
            ["Bike", "Lamp", "Desk"]
        );
        assert_eq!(cards[0].seller, "sam");
        assert_eq!(cards[0].price_label, "$120");
        assert_eq!(cards[1].price_label, "$8.5");
    }

    #[test]
    fn card_uses_the_first_photo_only() {
        let listings = vec![listing(
            1,
            "Bike",
            120.0,
            "sam",
            &[
                "https://cdn.example.com/a.jpg",
                "https://cdn.example.com/b.jpg",
            ],
        )];

        let cards = listing_cards(&listings);
        assert_eq!(
            cards[0].photo_url.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn card_without_photos_renders_no_image() {
        let listings = vec![listing(2, "Lamp", 8.5, "kim", &[])];
        assert_eq!(listing_cards(&listings)[0].photo_url, None);
    }

    #[test]
    fn price_labels() {
        assert_eq!(price_label(120.0), "$120");
        assert_eq!(price_label(123.45), "$123.45");
        assert_eq!(price_label(0.5), "$0.5");
    }

    #[test]
    fn password_precondition() {
        assert!(passwords_match("hunter2", "hunter2"));
        assert!(!passwords_match("hunter2", "hunter3"));
        assert!(!passwords_match("hunter2", ""));
    }
}
