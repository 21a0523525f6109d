//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod humidity;
mod postal_code;

pub use geo_location::GeoLocation;
pub use humidity::{Humidity, InvalidHumidity};
pub use postal_code::PostalCode;
