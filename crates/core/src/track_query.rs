//! Track listing query pipeline: filter → sort → paginate.
//!
//! [`query`] is a pure function over a borrowed slice of records. It does no
//! I/O, never fails and never mutates its input; selected records are cloned
//! into the returned [`TrackPage`]. All parameter validation happens up front
//! in [`TrackQuery::from_raw`], so a `TrackQuery` value is always usable.
//!
//! The pipeline is generic over [`Queryable`] so it depends on storage only
//! through its signature: any record type exposing the track fields can be
//! listed.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page used when the caller supplies none (pages are 1-based).
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the caller supplies none.
pub const DEFAULT_LIMIT: u64 = 10;

// ---------------------------------------------------------------------------
// Record access
// ---------------------------------------------------------------------------

/// Read access to the track fields the pipeline filters and sorts on.
pub trait Queryable {
    fn title(&self) -> &str;
    fn artist(&self) -> &str;
    fn album(&self) -> Option<&str>;
    fn slug(&self) -> &str;
    fn genres(&self) -> &[String];
    fn created_at(&self) -> Timestamp;
    fn updated_at(&self) -> Timestamp;
}

// ---------------------------------------------------------------------------
// Sort field / order
// ---------------------------------------------------------------------------

/// The fields a track listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Artist,
    Album,
    Slug,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Every sortable field, in the order they are reported to clients.
    pub const ALL: &'static [SortField] = &[
        SortField::Title,
        SortField::Artist,
        SortField::Album,
        SortField::Slug,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    /// Wire name of the field, matching the JSON property name.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Artist => "artist",
            SortField::Album => "album",
            SortField::Slug => "slug",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    fn compare<T: Queryable>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortField::Title => collate(a.title(), b.title()),
            SortField::Artist => collate(a.artist(), b.artist()),
            SortField::Album => collate(a.album().unwrap_or(""), b.album().unwrap_or("")),
            SortField::Slug => collate(a.slug(), b.slug()),
            SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = SortField::ALL.iter().map(|f| f.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid sort field '{s}'. Valid fields: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Sort direction. Ascending unless the caller asks otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(CoreError::Validation(format!(
                "Invalid sort order '{s}'. Must be 'asc' or 'desc'"
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Unvalidated listing parameters exactly as they arrived (e.g. from a query
/// string). Every field is optional; empty strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTrackQuery<'a> {
    pub search: Option<&'a str>,
    pub genre: Option<&'a str>,
    pub artist: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub order: Option<&'a str>,
    pub page: Option<&'a str>,
    pub limit: Option<&'a str>,
}

/// Validated listing parameters consumed by [`query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackQuery {
    /// Case-insensitive substring matched against title, artist and album.
    pub search: Option<String>,
    /// Exact genre membership.
    pub genre: Option<String>,
    /// Case-insensitive substring matched against the artist.
    pub artist: Option<String>,
    /// `None` means newest first by `createdAt`.
    pub sort: Option<SortField>,
    pub order: SortOrder,
    /// 1-based page number, always `>= 1`.
    pub page: u64,
    /// Page size. `0` yields an empty page.
    pub limit: u64,
}

impl Default for TrackQuery {
    fn default() -> Self {
        Self {
            search: None,
            genre: None,
            artist: None,
            sort: None,
            order: SortOrder::Asc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TrackQuery {
    /// Validate raw parameters.
    ///
    /// - Empty strings are treated as absent.
    /// - `page` values below 1 are clamped to 1.
    /// - `limit = 0` is accepted (empty page); negative limits are rejected.
    /// - Non-integer `page`/`limit`, unknown sort fields and unknown orders
    ///   are rejected with [`CoreError::Validation`].
    pub fn from_raw(raw: &RawTrackQuery<'_>) -> Result<Self, CoreError> {
        let sort = present(raw.sort).map(str::parse::<SortField>).transpose()?;
        let order = present(raw.order)
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        let page = match parse_integer("page", raw.page)? {
            None => DEFAULT_PAGE,
            Some(p) if p < 1 => 1,
            Some(p) => p.unsigned_abs(),
        };

        let limit = match parse_integer("limit", raw.limit)? {
            None => DEFAULT_LIMIT,
            Some(l) if l < 0 => {
                return Err(CoreError::Validation(format!(
                    "limit must not be negative, got {l}"
                )));
            }
            Some(l) => l.unsigned_abs(),
        };

        Ok(Self {
            search: present(raw.search).map(str::to_string),
            genre: present(raw.genre).map(str::to_string),
            artist: present(raw.artist).map(str::to_string),
            sort,
            order,
            page,
            limit,
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_integer(name: &str, value: Option<&str>) -> Result<Option<i64>, CoreError> {
    match present(value.map(str::trim)) {
        None => Ok(None),
        Some(v) => v.parse::<i64>().map(Some).map_err(|_| {
            CoreError::Validation(format!("{name} must be an integer, got '{v}'"))
        }),
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// One page of a track listing plus the filtered (pre-pagination) count.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Filter, sort and paginate `all_tracks` according to `params`.
pub fn query<T: Queryable + Clone>(all_tracks: &[T], params: &TrackQuery) -> TrackPage<T> {
    let filter = Filter::new(params);
    let mut matched: Vec<&T> = all_tracks.iter().filter(|t| filter.matches(*t)).collect();

    match params.sort {
        Some(field) => match params.order {
            SortOrder::Asc => matched.sort_by(|a, b| field.compare(*a, *b)),
            SortOrder::Desc => matched.sort_by(|a, b| field.compare(*b, *a)),
        },
        None => matched.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
    }

    let total = matched.len();
    let start = usize::try_from(params.page.saturating_sub(1).saturating_mul(params.limit))
        .unwrap_or(usize::MAX);
    let limit = usize::try_from(params.limit).unwrap_or(usize::MAX);

    let items = matched
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    TrackPage { items, total }
}

/// Number of pages needed to show `total` items, `limit` per page.
///
/// A zero limit has no pages.
pub fn total_pages(total: usize, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    (total as u64).div_ceil(limit)
}

/// Conjunction of the supplied predicates, with needles lowercased once.
struct Filter<'q> {
    search: Option<String>,
    genre: Option<&'q str>,
    artist: Option<String>,
}

impl<'q> Filter<'q> {
    fn new(params: &'q TrackQuery) -> Self {
        Self {
            search: params.search.as_deref().map(str::to_lowercase),
            genre: params.genre.as_deref(),
            artist: params.artist.as_deref().map(str::to_lowercase),
        }
    }

    fn matches<T: Queryable>(&self, track: &T) -> bool {
        if let Some(needle) = &self.search {
            let hit = contains_ignore_case(track.title(), needle)
                || contains_ignore_case(track.artist(), needle)
                || track
                    .album()
                    .is_some_and(|album| contains_ignore_case(album, needle));
            if !hit {
                return false;
            }
        }
        if let Some(genre) = self.genre {
            if !track.genres().iter().any(|g| g == genre) {
                return false;
            }
        }
        if let Some(needle) = &self.artist {
            if !contains_ignore_case(track.artist(), needle) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Root-locale approximation of string collation.
///
/// Three passes over the canonical decomposition (NFD):
///
/// 1. base letters, ignoring accents and case (`"Éclair" < "Zebra"`);
/// 2. accents, unaccented first (`"resume" < "résumé"`);
/// 3. case, lowercase first (`"banana" < "Banana"`).
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| b.nfd().cmp(a.nfd()))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::DateTime;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestTrack {
        id: usize,
        title: String,
        artist: String,
        album: Option<String>,
        slug: String,
        genres: Vec<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    }

    impl Queryable for TestTrack {
        fn title(&self) -> &str {
            &self.title
        }
        fn artist(&self) -> &str {
            &self.artist
        }
        fn album(&self) -> Option<&str> {
            self.album.as_deref()
        }
        fn slug(&self) -> &str {
            &self.slug
        }
        fn genres(&self) -> &[String] {
            &self.genres
        }
        fn created_at(&self) -> Timestamp {
            self.created_at
        }
        fn updated_at(&self) -> Timestamp {
            self.updated_at
        }
    }

    fn ts(secs: i64) -> Timestamp {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    fn track(id: usize, title: &str, artist: &str, album: Option<&str>, genres: &[&str]) -> TestTrack {
        TestTrack {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.map(str::to_string),
            slug: crate::slug::generate_slug(title),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            created_at: ts(id as i64 * 60),
            updated_at: ts(id as i64 * 60),
        }
    }

    fn catalog() -> Vec<TestTrack> {
        vec![
            track(0, "Love Story", "Taylor Swift", Some("Fearless"), &["Pop", "Country"]),
            track(1, "Yellow", "Coldplay", Some("Parachutes"), &["Rock", "Indie"]),
            track(2, "bad guy", "Billie Eilish", None, &["Pop", "Electronic"]),
            track(3, "Hello", "Adele", Some("25"), &["Pop"]),
            track(4, "Blinding Lights", "The Weeknd", Some("After Hours"), &["Pop", "R&B"]),
            track(5, "Purple Rain", "Prince", Some("Purple Rain"), &["Rock", "R&B"]),
            track(6, "Imagine", "John Lennon", Some("Imagine"), &["Rock"]),
            track(7, "Superstition", "Stevie Wonder", Some("Talking Book"), &["R&B", "Blues"]),
            track(8, "Shape of You", "Ed Sheeran", Some("Divide"), &["Pop"]),
            track(9, "Heroes", "David Bowie", None, &["Rock"]),
            track(10, "Dynamite", "BTS", None, &["Pop"]),
            track(11, "Hey Jude", "The Beatles", Some("Hey Jude"), &["Rock", "Pop"]),
        ]
    }

    fn params() -> TrackQuery {
        TrackQuery::default()
    }

    fn ids(page: &TrackPage<TestTrack>) -> Vec<usize> {
        page.items.iter().map(|t| t.id).collect()
    }

    // -- pagination ----------------------------------------------------------

    #[test]
    fn twelve_tracks_split_into_ten_and_two() {
        let all = catalog();

        let first = query(&all, &params());
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 12);

        let second = query(&all, &TrackQuery { page: 2, ..params() });
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.total, 12);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let all = catalog();
        let page = query(&all, &TrackQuery { page: 99, ..params() });
        assert!(page.items.is_empty());
        assert_eq!(page.total, 12);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let all = catalog();
        let page = query(&all, &TrackQuery { page: u64::MAX, limit: u64::MAX, ..params() });
        assert!(page.items.is_empty());
    }

    #[test]
    fn zero_limit_yields_empty_page_with_total() {
        let all = catalog();
        let page = query(&all, &TrackQuery { limit: 0, ..params() });
        assert!(page.items.is_empty());
        assert_eq!(page.total, 12);
    }

    #[test]
    fn pages_cover_the_result_exactly_once() {
        let all = catalog();
        for limit in 1..=13 {
            let base = TrackQuery { sort: Some(SortField::Title), limit, ..params() };
            let everything = query(&all, &TrackQuery { limit: 100, ..base.clone() });

            let pages = total_pages(everything.total, limit);
            let mut concatenated = Vec::new();
            for page in 1..=pages {
                concatenated.extend(query(&all, &TrackQuery { page, ..base.clone() }).items);
            }
            assert_eq!(concatenated, everything.items, "limit {limit}");
        }
    }

    #[test]
    fn no_filters_total_matches_input() {
        let all = catalog();
        for n in 0..=all.len() {
            let subset = &all[..n];
            let result = query(subset, &TrackQuery { limit: 5, ..params() });
            assert_eq!(result.total, n);

            let pages = total_pages(n, 5);
            let summed: usize = (1..=pages)
                .map(|page| query(subset, &TrackQuery { page, limit: 5, ..params() }).items.len())
                .sum();
            assert_eq!(summed, n);
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    // -- filtering -----------------------------------------------------------

    #[test]
    fn search_matches_single_title_case_insensitively() {
        let all = catalog();
        let result = query(&all, &TrackQuery { search: Some("love".into()), ..params() });
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].title, "Love Story");
    }

    #[test]
    fn search_matches_artist_and_album() {
        let all = catalog();

        let by_artist = query(&all, &TrackQuery { search: Some("BEATLES".into()), ..params() });
        assert_eq!(ids(&by_artist), vec![11]);

        let by_album = query(&all, &TrackQuery { search: Some("parachutes".into()), ..params() });
        assert_eq!(ids(&by_album), vec![1]);
    }

    #[test]
    fn missing_album_never_matches_search() {
        let all = catalog();
        let result = query(&all, &TrackQuery { search: Some("heroes".into()), ..params() });
        assert_eq!(ids(&result), vec![9]);
    }

    #[test]
    fn genre_with_no_members_is_empty() {
        let all = catalog();
        let result = query(&all, &TrackQuery { genre: Some("Jazz".into()), ..params() });
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn genre_membership_is_exact() {
        let all = catalog();
        let result = query(&all, &TrackQuery { genre: Some("rock".into()), ..params() });
        assert_eq!(result.total, 0);

        let result = query(&all, &TrackQuery { genre: Some("Rock".into()), ..params() });
        assert_eq!(result.total, 5);
    }

    #[test]
    fn filters_are_conjunctive() {
        let all = catalog();
        let q = TrackQuery {
            search: Some("e".into()),
            genre: Some("Pop".into()),
            artist: Some("the".into()),
            limit: 100,
            ..params()
        };
        let result = query(&all, &q);

        assert_eq!(result.total, 2);
        for t in &result.items {
            let needle = "e";
            assert!(
                t.title.to_lowercase().contains(needle)
                    || t.artist.to_lowercase().contains(needle)
                    || t.album.as_deref().is_some_and(|a| a.to_lowercase().contains(needle))
            );
            assert!(t.genres.iter().any(|g| g == "Pop"));
            assert!(t.artist.to_lowercase().contains("the"));
            assert!(all.contains(t));
        }
    }

    // -- sorting -------------------------------------------------------------

    #[test]
    fn default_order_is_newest_first() {
        let all = vec![
            track(1, "Older", "A", None, &[]),
            track(3, "Newest", "B", None, &[]),
            track(2, "Middle", "C", None, &[]),
        ];
        let result = query(&all, &params());
        assert_eq!(ids(&result), vec![3, 2, 1]);
    }

    #[test]
    fn ascending_title_sort_is_non_decreasing() {
        let all = catalog();
        let result = query(
            &all,
            &TrackQuery { sort: Some(SortField::Title), limit: 100, ..params() },
        );
        for pair in result.items.windows(2) {
            assert_ne!(collate(&pair[0].title, &pair[1].title), Ordering::Greater);
        }
        assert_eq!(result.items[0].title, "bad guy");
    }

    #[test]
    fn descending_reverses_ascending() {
        let all = catalog();
        let asc = query(
            &all,
            &TrackQuery { sort: Some(SortField::Artist), limit: 100, ..params() },
        );
        let desc = query(
            &all,
            &TrackQuery {
                sort: Some(SortField::Artist),
                order: SortOrder::Desc,
                limit: 100,
                ..params()
            },
        );
        let mut reversed = asc.items.clone();
        reversed.reverse();
        assert_eq!(desc.items, reversed);
    }

    #[test]
    fn missing_album_sorts_as_empty_string() {
        let all = catalog();
        let result = query(
            &all,
            &TrackQuery { sort: Some(SortField::Album), limit: 100, ..params() },
        );
        let leading: Vec<usize> = ids(&result).into_iter().take(3).collect();
        assert_eq!(leading, vec![2, 9, 10]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let all = vec![
            track(0, "Same", "X", None, &[]),
            track(1, "same", "Y", None, &[]),
            track(2, "Same", "Z", None, &[]),
        ];
        let result = query(&all, &TrackQuery { sort: Some(SortField::Title), ..params() });
        assert_eq!(ids(&result), vec![1, 0, 2]);
    }

    #[test]
    fn input_is_left_untouched() {
        let all = catalog();
        let before = all.clone();
        let _ = query(&all, &TrackQuery { sort: Some(SortField::Title), ..params() });
        assert_eq!(all, before);
    }

    #[test]
    fn collate_ignores_case_then_prefers_lowercase() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Banana", "banana"), Ordering::Greater);
        assert_eq!(collate("banana", "banana"), Ordering::Equal);
    }

    #[test]
    fn collate_sorts_accented_letters_with_their_base_letter() {
        assert_eq!(collate("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(collate("Beyoncé", "Beyoncz"), Ordering::Less);
        assert_eq!(collate("Ångström", "Bach"), Ordering::Less);
        assert_eq!(collate("Zoë", "Zoe Band"), Ordering::Less);
    }

    #[test]
    fn collate_breaks_accent_ties_before_case_ties() {
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("Resume", "résumé"), Ordering::Less);
        assert_eq!(collate("résumé", "Résumé"), Ordering::Less);
        // Precomposed and decomposed forms are the same string to the collator.
        assert_eq!(collate("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn title_sort_places_accented_titles_among_plain_ones() {
        let mut titles = vec!["Zebra", "Éclair", "apple", "Eden", "éclair"];
        titles.sort_by(|a, b| collate(a, b));
        assert_eq!(titles, vec!["apple", "éclair", "Éclair", "Eden", "Zebra"]);
    }

    // -- from_raw ------------------------------------------------------------

    #[test]
    fn raw_defaults() {
        let q = TrackQuery::from_raw(&RawTrackQuery::default()).unwrap();
        assert_eq!(q, TrackQuery::default());
    }

    #[test]
    fn raw_empty_strings_are_absent() {
        let raw = RawTrackQuery {
            search: Some(""),
            genre: Some(""),
            sort: Some(""),
            order: Some(""),
            page: Some(""),
            limit: Some(" "),
            ..Default::default()
        };
        assert_eq!(TrackQuery::from_raw(&raw).unwrap(), TrackQuery::default());
    }

    #[test]
    fn raw_full_parse() {
        let raw = RawTrackQuery {
            search: Some("love"),
            genre: Some("Pop"),
            artist: Some("swift"),
            sort: Some("createdAt"),
            order: Some("DESC"),
            page: Some("3"),
            limit: Some("25"),
        };
        let q = TrackQuery::from_raw(&raw).unwrap();
        assert_eq!(q.search.as_deref(), Some("love"));
        assert_eq!(q.sort, Some(SortField::CreatedAt));
        assert_eq!(q.order, SortOrder::Desc);
        assert_eq!((q.page, q.limit), (3, 25));
    }

    #[test]
    fn raw_non_positive_page_is_clamped() {
        for page in ["0", "-4"] {
            let raw = RawTrackQuery { page: Some(page), ..Default::default() };
            assert_eq!(TrackQuery::from_raw(&raw).unwrap().page, 1);
        }
    }

    #[test]
    fn raw_zero_limit_is_accepted() {
        let raw = RawTrackQuery { limit: Some("0"), ..Default::default() };
        assert_eq!(TrackQuery::from_raw(&raw).unwrap().limit, 0);
    }

    #[test]
    fn raw_negative_limit_is_rejected() {
        let raw = RawTrackQuery { limit: Some("-1"), ..Default::default() };
        assert_matches!(TrackQuery::from_raw(&raw), Err(CoreError::Validation(_)));
    }

    #[test]
    fn raw_non_numeric_page_is_rejected() {
        let raw = RawTrackQuery { page: Some("two"), ..Default::default() };
        assert_matches!(TrackQuery::from_raw(&raw), Err(CoreError::Validation(msg)) if msg.contains("page"));
    }

    #[test]
    fn raw_unknown_sort_field_is_rejected() {
        let raw = RawTrackQuery { sort: Some("genres"), ..Default::default() };
        assert_matches!(
            TrackQuery::from_raw(&raw),
            Err(CoreError::Validation(msg)) if msg.contains("title, artist, album")
        );
    }

    #[test]
    fn raw_unknown_order_is_rejected() {
        let raw = RawTrackQuery { order: Some("sideways"), ..Default::default() };
        assert_matches!(TrackQuery::from_raw(&raw), Err(CoreError::Validation(_)));
    }

    #[test]
    fn sort_field_names_round_trip() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), *field);
        }
    }
}
