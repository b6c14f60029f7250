//! Random sample data for populating an empty store.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::models::track::CreateTrack;
use crate::repositories::{GenreRepo, TrackRepo};
use crate::{FileStore, StoreError, DEFAULT_GENRES};

const ARTISTS: &[&str] = &[
    "Taylor Swift", "Ed Sheeran", "Adele", "Drake", "Kendrick Lamar",
    "Beyoncé", "Coldplay", "Billie Eilish", "The Weeknd", "Dua Lipa",
    "Bruno Mars", "Ariana Grande", "Justin Bieber", "Post Malone", "Rihanna",
    "Lady Gaga", "BTS", "Harry Styles", "Bad Bunny", "SZA",
];

const ALBUMS: &[&str] = &[
    "Midnight", "Divide", "30", "Certified Lover Boy", "DAMN.",
    "Renaissance", "Music of the Spheres", "Happier Than Ever", "Dawn FM", "Future Nostalgia",
    "24K Magic", "Positions", "Justice", "Beerbongs & Bentleys", "Anti",
    "Chromatica", "Proof", "Harry's House", "Un Verano Sin Ti", "SOS",
];

const TITLES: &[&str] = &[
    "Love Story", "Shape of You", "Hello", "God's Plan", "HUMBLE.",
    "BREAK MY SOUL", "Yellow", "bad guy", "Blinding Lights", "Levitating",
    "Uptown Funk", "thank u, next", "Peaches", "Circles", "Diamonds",
    "Rain On Me", "Dynamite", "As It Was", "Tití Me Preguntó", "Kill Bill",
    "Rocket Man", "Bohemian Rhapsody", "Thriller", "Smells Like Teen Spirit", "Sweet Child O' Mine",
    "Imagine", "Purple Haze", "Stairway to Heaven", "Like a Rolling Stone", "Respect",
    "Hey Jude", "What's Going On", "Good Vibrations", "Yesterday", "Superstition",
    "London Calling", "Purple Rain", "God Only Knows", "A Change Is Gonna Come", "Heroes",
    "Born to Run", "Billie Jean", "I Want to Hold Your Hand", "Gimme Shelter", "Waterloo Sunset",
    "Johnny B. Goode", "No Woman, No Cry", "What'd I Say", "Papa's Got a Brand New Bag", "Blowin' in the Wind",
];

/// Counts reported by [`seed_tracks`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    /// Generated tracks whose slug already existed in the store.
    pub skipped: usize,
}

/// Generate `count` random track inputs.
///
/// Titles are drawn without replacement; once every title has been used the
/// cycle repeats with a "(Take N)" suffix so generated slugs stay distinct.
/// Each track gets 1-3 genres from `genres` and a 70% chance of an album.
pub fn generate_tracks<R: Rng + ?Sized>(
    count: usize,
    genres: &[String],
    rng: &mut R,
) -> Vec<CreateTrack> {
    let mut titles = TITLES.to_vec();
    titles.shuffle(rng);

    (0..count)
        .map(|i| {
            let base = titles[i % titles.len()];
            let round = i / titles.len();
            let title = if round == 0 {
                base.to_string()
            } else {
                format!("{base} (Take {})", round + 1)
            };

            let genre_count = rng.random_range(1..=3usize).min(genres.len());
            let picked: Vec<String> = genres.choose_multiple(rng, genre_count).cloned().collect();

            let album = if rng.random_bool(0.7) {
                ALBUMS.choose(rng).map(|a| a.to_string())
            } else {
                None
            };

            CreateTrack {
                cover_image: Some(format!(
                    "https://picsum.photos/seed/{}/300/300",
                    melodex_core::slug::generate_slug(base)
                )),
                artist: ARTISTS.choose(rng).map(|a| a.to_string()).unwrap_or_default(),
                title,
                album,
                genres: picked,
            }
        })
        .collect()
}

/// Create `count` random tracks in the store.
///
/// Uses the store's genre list, falling back to the default genres when it
/// is empty. Tracks whose slug already exists are skipped, not failed.
pub async fn seed_tracks<R: Rng + ?Sized>(
    store: &FileStore,
    count: usize,
    rng: &mut R,
) -> Result<SeedReport, StoreError> {
    let mut genres = GenreRepo::list(store).await?;
    if genres.is_empty() {
        genres = DEFAULT_GENRES.iter().map(|g| g.to_string()).collect();
    }

    let inputs = generate_tracks(count, &genres, rng);

    let mut report = SeedReport::default();
    for input in &inputs {
        match TrackRepo::create(store, input).await {
            Ok(_) => report.created += 1,
            Err(StoreError::UniqueViolation { value, .. }) => {
                tracing::debug!(slug = %value, "Skipping seed track with existing slug");
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(created = report.created, skipped = report.skipped, "Seeded tracks");
    Ok(report)
}
