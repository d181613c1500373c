use crate::domain::{Listing, ListingId};
use crate::source::{ListingSource, SourceError};

/// A fixed in-memory list. Used when no remote source is configured.
pub struct StaticSource {
    listings: Vec<Listing>,
}

impl StaticSource {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Four San Francisco open houses.
    pub fn sample() -> Self {
        Self::new(sample_listings())
    }
}

impl ListingSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_all(&self) -> Result<Vec<Listing>, SourceError> {
        Ok(self.listings.clone())
    }
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId(1),
            address: "123 Market St, San Francisco, CA".into(),
            price: 1_200_000,
            beds: 2,
            baths: 2,
            latitude: 37.7749,
            longitude: -122.4194,
            open_house_time: "Sat 1-4pm".into(),
            description: "Beautiful downtown condo with city views".into(),
        },
        Listing {
            id: ListingId(2),
            address: "456 Valencia St, San Francisco, CA".into(),
            price: 950_000,
            beds: 1,
            baths: 1,
            latitude: 37.7849,
            longitude: -122.4094,
            open_house_time: "Sun 2-5pm".into(),
            description: "Charming Mission district apartment".into(),
        },
        Listing {
            id: ListingId(3),
            address: "789 Castro St, San Francisco, CA".into(),
            price: 1_450_000,
            beds: 3,
            baths: 2,
            latitude: 37.7609,
            longitude: -122.4350,
            open_house_time: "Sat 2-5pm".into(),
            description: "Spacious Castro district home".into(),
        },
        Listing {
            id: ListingId(4),
            address: "321 Fillmore St, San Francisco, CA".into(),
            price: 875_000,
            beds: 1,
            baths: 1,
            latitude: 37.7849,
            longitude: -122.4324,
            open_house_time: "Sun 1-3pm".into(),
            description: "Modern Fillmore apartment".into(),
        },
    ]
}
