use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

/// One autocomplete suggestion for an address field.
#[derive(Debug, Clone)]
pub struct AddressSuggestion {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodePlace {
    display_name: String,
    lat: String,
    lon: String,
    address: Option<GeocodeAddress>,
}

#[derive(Debug, Deserialize)]
struct GeocodeAddress {
    road: Option<String>,
    city: Option<String>,
    postcode: Option<String>,
}

/// Autocomplete client for the delivery-address fields of the checkout and
/// profile forms. Fire-and-forget: any failure degrades to an empty
/// suggestion list rather than an error in the form.
pub struct AddressSuggestClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AddressSuggestClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Option<Self> {
        match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => Some(Self {
                client,
                base_url,
                api_key,
            }),
            Err(err) => {
                warn!("address suggest client init failed: {}", err);
                None
            }
        }
    }

    pub async fn suggest(&self, query: &str, limit: usize) -> Vec<AddressSuggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut url = match reqwest::Url::parse(&self.base_url) {
            Ok(url) => url,
            Err(err) => {
                warn!("address suggest url parse failed: {}", err);
                return Vec::new();
            }
        };

        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("key", &self.api_key)
                .append_pair("q", query)
                .append_pair("addressdetails", "1")
                .append_pair("limit", &limit.clamp(1, 20).to_string());
        }

        let places = match self.client.get(url).send().await {
            Ok(response) => match response.error_for_status() {
                Ok(ok) => match ok.json::<Vec<GeocodePlace>>().await {
                    Ok(data) => data,
                    Err(err) => {
                        warn!("address suggest decode failed: {}", err);
                        return Vec::new();
                    }
                },
                Err(err) => {
                    warn!("address suggest request failed: {}", err);
                    return Vec::new();
                }
            },
            Err(err) => {
                warn!("address suggest network failed: {}", err);
                return Vec::new();
            }
        };

        places
            .into_iter()
            .map(|place| {
                let address = place.address.unwrap_or(GeocodeAddress {
                    road: None,
                    city: None,
                    postcode: None,
                });
                AddressSuggestion {
                    display_name: place.display_name,
                    lat: place.lat,
                    lon: place.lon,
                    street: address.road,
                    city: address.city,
                    postcode: address.postcode,
                }
            })
            .collect()
    }
}
