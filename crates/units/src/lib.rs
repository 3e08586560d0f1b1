pub mod angular_velocity;
pub mod length;
pub mod mass;
pub mod time;

#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod time_test;

pub use angular_velocity::AngularVelocity;
pub use length::{Length, AU_M, GEOSTATIONARY_RADIUS_M, LUNAR_DISTANCE_M};
pub use mass::{Mass, EARTH_MASS_KG, LUNAR_MASS_KG, SOLAR_MASS_KG};
pub use time::{Time, SECONDS_PER_DAY, SECONDS_PER_YEAR, SIDEREAL_DAY_SECONDS};
