use crate::domain::Listing;
use serde::{Deserialize, Serialize};

// Body of `GET /open-houses`
//  └── open_houses[]
//       ├── id
//       ├── address
//       ├── price
//       ├── beds / baths
//       ├── latitude / longitude
//       ├── open_house_time
//       └── description

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenHousesEnvelope {
    pub open_houses: Vec<Listing>,
}
