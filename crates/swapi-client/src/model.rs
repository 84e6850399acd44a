//! View models over the upstream JSON shapes
//!
//! These types are transient and request-scoped: created at deserialization
//! time, consumed by a formatter, then dropped. Nothing is cached or merged
//! across calls.
//!
//! SWAPI encodes most numeric-looking fields as strings (`"172"`,
//! `"unknown"`), so they stay `String` here. Every declared field is
//! required; a response missing one fails deserialization instead of
//! rendering a placeholder.

use serde::Deserialize;

/// A Star Wars character, as returned by `/people/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub name: String,
    /// Height in centimeters, or `"unknown"`.
    pub height: String,
    /// Mass in kilograms, or `"unknown"`.
    pub mass: String,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    /// URL of the character's homeworld record.
    pub homeworld: String,
    /// URLs of the films the character appears in.
    pub films: Vec<String>,
}

/// A planet, as returned by `/planets/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Planet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
    /// Diameter in kilometers.
    pub diameter: String,
    /// Rotation period in hours.
    pub rotation_period: String,
    /// Orbital period in days.
    pub orbital_period: String,
}

/// A film, as returned by `/films/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub opening_crawl: String,
}

/// Envelope for list endpoints: a result count plus one page of entries.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T> {
    pub count: u64,
    pub results: Vec<T>,
}
