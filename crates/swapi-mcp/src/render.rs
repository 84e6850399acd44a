//! Text rendering for lookup results
//!
//! Pure functions from view models to the human-readable blocks returned in
//! tool results. Search renditions always state `results.len()` as the
//! count, so the stated count matches the number of blocks by construction.

use swapi_client::{Character, Film, Planet};

/// Separator between field blocks in a search result.
const BLOCK_SEPARATOR: &str = "\n---\n\n";

fn character_block(character: &Character) -> String {
    format!(
        "Name: {}\n\
         Height: {} cm\n\
         Mass: {} kg\n\
         Hair color: {}\n\
         Eye color: {}\n\
         Birth year: {}\n\
         Gender: {}",
        character.name,
        character.height,
        character.mass,
        character.hair_color,
        character.eye_color,
        character.birth_year,
        character.gender,
    )
}

fn planet_block(planet: &Planet) -> String {
    format!(
        "Name: {}\n\
         Climate: {}\n\
         Terrain: {}\n\
         Population: {}\n\
         Diameter: {} km\n\
         Rotation period: {} h\n\
         Orbital period: {} days",
        planet.name,
        planet.climate,
        planet.terrain,
        planet.population,
        planet.diameter,
        planet.rotation_period,
        planet.orbital_period,
    )
}

fn film_block(film: &Film) -> String {
    format!(
        "Title: {}\n\
         Episode: {}\n\
         Director: {}\n\
         Producer: {}\n\
         Release date: {}\n\
         Opening crawl: {}",
        film.title,
        film.episode_id,
        film.director,
        film.producer,
        film.release_date,
        film.opening_crawl,
    )
}

fn search_result(kind: &str, query: &str, blocks: Vec<String>) -> String {
    if blocks.is_empty() {
        return format!("No {kind}s found matching \"{query}\".");
    }

    format!(
        "Found {} {kind}(s):\n\n{}",
        blocks.len(),
        blocks.join(BLOCK_SEPARATOR)
    )
}

/// Render a character search: a count prefix plus one block per result, or
/// the fixed not-found sentence naming the query.
pub fn character_search(query: &str, results: &[Character]) -> String {
    search_result(
        "character",
        query,
        results.iter().map(character_block).collect(),
    )
}

/// Render a planet search.
pub fn planet_search(query: &str, results: &[Planet]) -> String {
    search_result("planet", query, results.iter().map(planet_block).collect())
}

/// Render a film search.
pub fn film_search(query: &str, results: &[Film]) -> String {
    search_result("film", query, results.iter().map(film_block).collect())
}

/// Render a single character in full, including the homeworld reference and
/// the number of films they appear in.
pub fn character_details(character: &Character) -> String {
    format!(
        "{}\nHomeworld: {}\nFilms: {}",
        character_block(character),
        character.homeworld,
        character.films.len(),
    )
}

/// Render the full film list, sorted ascending by episode number regardless
/// of upstream ordering. One short entry per film, blank-line separated.
pub fn film_catalog(films: &[Film]) -> String {
    let mut films: Vec<&Film> = films.iter().collect();
    films.sort_by_key(|film| film.episode_id);

    let entries: Vec<String> = films
        .iter()
        .map(|film| {
            format!(
                "Episode {}: {}\nDirector: {}\nRelease date: {}",
                film.episode_id, film.title, film.director, film.release_date,
            )
        })
        .collect();

    format!("Star Wars saga films:\n\n{}", entries.join("\n\n"))
}
