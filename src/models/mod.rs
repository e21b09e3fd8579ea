//! Value objects for trips, routes, regulations, and itineraries.

pub mod itinerary;
pub mod regulation;
pub mod route;
pub mod time;
pub mod trip;

pub use itinerary::*;
pub use regulation::*;
pub use route::*;
pub use time::*;
pub use trip::*;
