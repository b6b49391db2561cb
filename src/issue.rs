//! The ComicInfo document as a typed, read-only record
//!
//! An [`Issue`] is built in one pass over a parsed document. Each top-level
//! element is looked up by name and its text handed to the matching validator
//! in [`crate::validators`]; the first invalid value aborts construction.
//!
//! ```rust
//! use comicinfo::Issue;
//!
//! let issue = Issue::from_xml(
//!     "<ComicInfo><Title>Pilot</Title><Genre>Superhero, Action</Genre></ComicInfo>",
//! )?;
//! assert_eq!(issue.title(), "Pilot");
//! assert_eq!(issue.genres(), vec!["Superhero", "Action"]);
//! assert_eq!(issue.year(), -1);
//! # Ok::<(), comicinfo::Error>(())
//! ```

use crate::documents::{Document, Element};
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::loaders::Loader;
use crate::locations::Location;
use crate::page::Page;
use crate::schema::{
    elements, DEFAULT_INTEGER, DEFAULT_PAGE_COUNT, MANGA_RIGHT_TO_LEFT, MANGA_YES_VALUES,
    PAGES_ELEMENT, PAGE_ELEMENT, ROOT_ELEMENT, YES,
};
use crate::validators::{
    split_list, split_whitespace_list, validate_age_rating, validate_community_rating,
    validate_day, validate_integer, validate_manga, validate_month, validate_year,
    validate_yes_no,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Generate `&str` getters for plain string fields
macro_rules! string_accessors {
    ($($(#[$meta:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(&self) -> &str {
                &self.$field
            }
        )*
    };
}

/// Generate getters for integer fields
macro_rules! integer_accessors {
    ($($(#[$meta:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(&self) -> i64 {
                self.$field
            }
        )*
    };
}

/// One parsed ComicInfo document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    title: String,
    series: String,
    number: String,
    count: i64,
    volume: i64,
    alternate_series: String,
    alternate_number: String,
    alternate_count: i64,
    summary: String,
    notes: String,
    year: i64,
    month: i64,
    day: i64,
    writer: String,
    penciller: String,
    inker: String,
    colorist: String,
    letterer: String,
    cover_artist: String,
    editor: String,
    translator: String,
    publisher: String,
    imprint: String,
    genre: String,
    web: String,
    page_count: i64,
    language_iso: String,
    format: String,
    black_and_white: String,
    manga: String,
    #[serde(rename = "characters")]
    character: String,
    #[serde(rename = "teams")]
    team: String,
    #[serde(rename = "locations")]
    location: String,
    scan_information: String,
    story_arc: String,
    story_arc_number: String,
    series_group: String,
    age_rating: String,
    community_rating: Option<f64>,
    main_character_or_team: String,
    review: String,
    pages: Vec<Page>,
}

impl Issue {
    /// Parse literal ComicInfo XML
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] for empty or malformed input, or a root element other
    /// than `ComicInfo`; any validator error for an invalid field.
    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::from_xml_with_limits(xml, &Limits::default())
    }

    /// Parse literal ComicInfo XML under the given limits
    pub fn from_xml_with_limits(xml: &str, limits: &Limits) -> Result<Self> {
        if xml.trim().is_empty() {
            return Err(Error::parse("XML input is empty"));
        }
        limits.check_xml_size(xml.len())?;

        let doc = Document::parse(xml.as_bytes(), limits)?;
        let root = doc
            .root()
            .ok_or_else(|| Error::parse("document has no root element"))?;
        if root.local_name() != ROOT_ELEMENT {
            return Err(Error::parse(format!(
                "expected root element '{}', found '{}'",
                ROOT_ELEMENT,
                root.local_name()
            )));
        }

        let issue = Self::from_element(root, limits)?;
        debug!(
            title = %issue.title,
            series = %issue.series,
            pages = issue.pages.len(),
            "parsed ComicInfo document"
        );
        Ok(issue)
    }

    /// Read and parse a ComicInfo file
    ///
    /// # Errors
    ///
    /// [`Error::File`] when the file is missing or unreadable, then the same
    /// errors as [`Issue::from_xml`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let loader = Loader::new();
        let xml = loader.load_file(path.as_ref())?;
        Self::from_xml_with_limits(&xml, loader.limits())
    }

    /// Parse a source that is either literal XML or a file path
    ///
    /// Input whose trimmed form starts with `<` is XML. Otherwise it must look
    /// like a path (a separator, an extension, or a `file://` URL) or it is
    /// rejected with [`Error::Parse`] without touching the file system.
    pub fn load(source: &str) -> Result<Self> {
        Self::load_with_limits(source, Limits::default())
    }

    /// [`Issue::load`] under the given limits
    pub fn load_with_limits(source: &str, limits: Limits) -> Result<Self> {
        let location = Location::from_str(source)?;
        if let Location::Path(path) = &location {
            debug!(path = %path.display(), "loading ComicInfo from file");
        }
        let loader = Loader::new().with_limits(limits);
        let xml = loader.load(&location)?;
        Self::from_xml_with_limits(&xml, loader.limits())
    }

    fn from_element(root: &Element, limits: &Limits) -> Result<Self> {
        let text = |name: &str| root.child_text(name);
        let string = |name: &str| text(name).unwrap_or_default().to_string();
        let integer = |name: &str| validate_integer(text(name), name, DEFAULT_INTEGER);

        Ok(Self {
            title: string(elements::TITLE),
            series: string(elements::SERIES),
            number: string(elements::NUMBER),
            count: integer(elements::COUNT)?,
            volume: integer(elements::VOLUME)?,
            alternate_series: string(elements::ALTERNATE_SERIES),
            alternate_number: string(elements::ALTERNATE_NUMBER),
            alternate_count: integer(elements::ALTERNATE_COUNT)?,
            summary: string(elements::SUMMARY),
            notes: string(elements::NOTES),
            year: validate_year(text(elements::YEAR))?,
            month: validate_month(text(elements::MONTH))?,
            day: validate_day(text(elements::DAY))?,
            writer: string(elements::WRITER),
            penciller: string(elements::PENCILLER),
            inker: string(elements::INKER),
            colorist: string(elements::COLORIST),
            letterer: string(elements::LETTERER),
            cover_artist: string(elements::COVER_ARTIST),
            editor: string(elements::EDITOR),
            translator: string(elements::TRANSLATOR),
            publisher: string(elements::PUBLISHER),
            imprint: string(elements::IMPRINT),
            genre: string(elements::GENRE),
            web: string(elements::WEB),
            page_count: validate_integer(
                text(elements::PAGE_COUNT),
                elements::PAGE_COUNT,
                DEFAULT_PAGE_COUNT,
            )?,
            language_iso: string(elements::LANGUAGE_ISO),
            format: string(elements::FORMAT),
            black_and_white: validate_yes_no(text(elements::BLACK_AND_WHITE))?,
            manga: validate_manga(text(elements::MANGA))?,
            character: string(elements::CHARACTERS),
            team: string(elements::TEAMS),
            location: string(elements::LOCATIONS),
            scan_information: string(elements::SCAN_INFORMATION),
            story_arc: string(elements::STORY_ARC),
            story_arc_number: string(elements::STORY_ARC_NUMBER),
            series_group: string(elements::SERIES_GROUP),
            age_rating: validate_age_rating(text(elements::AGE_RATING))?,
            community_rating: validate_community_rating(text(elements::COMMUNITY_RATING))?,
            main_character_or_team: string(elements::MAIN_CHARACTER_OR_TEAM),
            review: string(elements::REVIEW),
            pages: Self::parse_pages(root, limits)?,
        })
    }

    fn parse_pages(root: &Element, limits: &Limits) -> Result<Vec<Page>> {
        let Some(container) = root.find_child(PAGES_ELEMENT) else {
            return Ok(Vec::new());
        };

        let elements = container.find_children(PAGE_ELEMENT);
        limits.check_pages(elements.len())?;
        elements
            .into_iter()
            .map(|element| Page::from_attributes(&element.attributes))
            .collect()
    }

    string_accessors!(
        /// Issue title
        title,
        /// Series name
        series,
        /// Issue number; not necessarily numeric ("1.5", "Annual")
        number,
        /// Alternate series name
        alternate_series,
        /// Number within the alternate series
        alternate_number,
        /// Synopsis
        summary,
        /// Free-form notes
        notes,
        /// Writers, comma separated
        writer,
        /// Pencillers
        penciller,
        /// Inkers
        inker,
        /// Colorists
        colorist,
        /// Letterers
        letterer,
        /// Cover artists
        cover_artist,
        /// Editors
        editor,
        /// Translators
        translator,
        /// Publisher name
        publisher,
        /// Publisher imprint
        imprint,
        /// Raw comma-separated genre list, see [`Issue::genres`]
        genre,
        /// Raw whitespace-separated URL list, see [`Issue::web_urls`]
        web,
        /// ISO language code
        language_iso,
        /// Publication format ("TPB", "Annual"...)
        format,
        /// `Unknown`, `No` or `Yes`
        black_and_white,
        /// `Unknown`, `No`, `Yes` or `YesAndRightToLeft`
        manga,
        /// Raw comma-separated character list, see [`Issue::characters`]
        character,
        /// Raw comma-separated team list, see [`Issue::teams`]
        team,
        /// Raw comma-separated location list, see [`Issue::locations`]
        location,
        /// Scanner credits
        scan_information,
        /// Raw comma-separated story arc list, see [`Issue::story_arcs`]
        story_arc,
        /// Raw comma-separated story arc numbers, see [`Issue::story_arc_numbers`]
        story_arc_number,
        /// Group of related series
        series_group,
        /// One of the schema age ratings, `Unknown` when absent
        age_rating,
        /// Main character or team
        main_character_or_team,
        /// Review text
        review,
    );

    integer_accessors!(
        /// Issue count of the series, -1 when unset
        count,
        /// Volume, -1 when unset
        volume,
        /// Issue count of the alternate series, -1 when unset
        alternate_count,
        /// Publication year, -1 when unset
        year,
        /// Publication month, -1 when unset
        month,
        /// Publication day, -1 when unset
        day,
        /// Number of pages, 0 when unset
        page_count,
    );

    /// Community rating between 0 and 5, `None` when absent
    pub fn community_rating(&self) -> Option<f64> {
        self.community_rating
    }

    /// Whether a community rating is present
    pub fn has_community_rating(&self) -> bool {
        self.community_rating.is_some()
    }

    /// Pages in document order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page at `index` in document order
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Whether the document lists any pages
    pub fn has_pages(&self) -> bool {
        !self.pages.is_empty()
    }

    /// Cover pages in document order
    pub fn cover_pages(&self) -> Vec<&Page> {
        self.pages.iter().filter(|p| p.is_cover()).collect()
    }

    /// Story pages in document order
    pub fn story_pages(&self) -> Vec<&Page> {
        self.pages.iter().filter(|p| p.is_story()).collect()
    }

    /// Pages whose type list includes `page_type`
    pub fn pages_of_type(&self, page_type: &str) -> Vec<&Page> {
        self.pages
            .iter()
            .filter(|p| p.includes_type(page_type))
            .collect()
    }

    /// Manga is `Yes` or `YesAndRightToLeft`
    pub fn is_manga(&self) -> bool {
        MANGA_YES_VALUES.contains(&self.manga.as_str())
    }

    /// Manga is `YesAndRightToLeft`
    pub fn is_right_to_left(&self) -> bool {
        self.manga == MANGA_RIGHT_TO_LEFT
    }

    /// BlackAndWhite is `Yes`
    pub fn is_black_and_white(&self) -> bool {
        self.black_and_white == YES
    }

    /// Publication date from year, month and day.
    ///
    /// An unset month or day counts as 1. `None` when the year is unset or
    /// the parts do not form a calendar date.
    pub fn publication_date(&self) -> Option<NaiveDate> {
        if self.year == DEFAULT_INTEGER {
            return None;
        }
        let or_first = |value: i64| if value == DEFAULT_INTEGER { 1 } else { value };

        let year = i32::try_from(self.year).ok()?;
        let month = u32::try_from(or_first(self.month)).ok()?;
        let day = u32::try_from(or_first(self.day)).ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Genres split on commas
    pub fn genres(&self) -> Vec<String> {
        split_list(&self.genre)
    }

    /// Characters split on commas
    pub fn characters(&self) -> Vec<String> {
        split_list(&self.character)
    }

    /// Teams split on commas
    pub fn teams(&self) -> Vec<String> {
        split_list(&self.team)
    }

    /// Locations split on commas
    pub fn locations(&self) -> Vec<String> {
        split_list(&self.location)
    }

    /// Story arcs split on commas
    pub fn story_arcs(&self) -> Vec<String> {
        split_list(&self.story_arc)
    }

    /// Story arc numbers split on commas
    pub fn story_arc_numbers(&self) -> Vec<String> {
        split_list(&self.story_arc_number)
    }

    /// Web URLs split on whitespace
    pub fn web_urls(&self) -> Vec<String> {
        split_whitespace_list(&self.web)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(body: &str) -> Result<Issue> {
        Issue::from_xml(&format!("<ComicInfo>{}</ComicInfo>", body))
    }

    #[test]
    fn test_empty_document_defaults() {
        let i = issue("").unwrap();
        assert_eq!(i.title(), "");
        assert_eq!(i.genre(), "");
        assert_eq!(i.count(), -1);
        assert_eq!(i.year(), -1);
        assert_eq!(i.page_count(), 0);
        assert_eq!(i.black_and_white(), "Unknown");
        assert_eq!(i.manga(), "Unknown");
        assert_eq!(i.age_rating(), "Unknown");
        assert_eq!(i.community_rating(), None);
        assert!(!i.has_pages());
        assert!(i.genres().is_empty());
        assert!(i.characters().is_empty());
        assert!(i.web_urls().is_empty());
        assert_eq!(i.publication_date(), None);
    }

    #[test]
    fn test_self_closing_root() {
        let i = Issue::from_xml("<ComicInfo/>").unwrap();
        assert_eq!(i.series(), "");
    }

    #[test]
    fn test_empty_element_is_default() {
        let i = issue("<Count></Count><Manga/>").unwrap();
        assert_eq!(i.count(), -1);
        assert_eq!(i.manga(), "Unknown");
    }

    #[test]
    fn test_wrong_root() {
        assert!(matches!(
            Issue::from_xml("<ComicBook><Title>x</Title></ComicBook>"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(Issue::from_xml(""), Err(Error::Parse(_))));
        assert!(matches!(Issue::from_xml("  \n "), Err(Error::Parse(_))));
    }

    #[test]
    fn test_invalid_integer_aborts() {
        assert!(matches!(
            issue("<Volume>two</Volume>"),
            Err(Error::TypeCoercion { ref field, .. }) if field == "Volume"
        ));
    }

    #[test]
    fn test_page_count_invalid() {
        assert!(matches!(
            issue("<PageCount>many</PageCount>"),
            Err(Error::TypeCoercion { ref field, .. }) if field == "PageCount"
        ));
    }

    #[test]
    fn test_community_rating_presence() {
        let i = issue("<CommunityRating>0</CommunityRating>").unwrap();
        assert!(i.has_community_rating());
        assert_eq!(i.community_rating(), Some(0.0));

        assert!(!issue("").unwrap().has_community_rating());
        assert!(!issue("<CommunityRating></CommunityRating>")
            .unwrap()
            .has_community_rating());
    }

    #[test]
    fn test_text_kept_verbatim() {
        let i = issue("<Summary>Part one <!-- c --> part two</Summary><Title>  Padded  </Title>")
            .unwrap();
        assert_eq!(i.summary(), "Part one  part two");
        assert_eq!(i.title(), "  Padded  ");
    }

    #[test]
    fn test_non_finite_rating_is_coercion_error() {
        assert!(matches!(
            issue("<CommunityRating>NaN</CommunityRating>"),
            Err(Error::TypeCoercion { expected: "Float", .. })
        ));
    }

    #[test]
    fn test_manga_predicates() {
        let i = issue("<Manga>YesAndRightToLeft</Manga>").unwrap();
        assert!(i.is_manga());
        assert!(i.is_right_to_left());

        let i = issue("<Manga>Yes</Manga>").unwrap();
        assert!(i.is_manga());
        assert!(!i.is_right_to_left());

        let i = issue("<Manga>No</Manga>").unwrap();
        assert!(!i.is_manga());
    }

    #[test]
    fn test_black_and_white() {
        assert!(issue("<BlackAndWhite>Yes</BlackAndWhite>")
            .unwrap()
            .is_black_and_white());
        assert!(!issue("").unwrap().is_black_and_white());
    }

    #[test]
    fn test_publication_date() {
        let i = issue("<Year>2020</Year><Month>2</Month><Day>29</Day>").unwrap();
        assert_eq!(i.publication_date(), NaiveDate::from_ymd_opt(2020, 2, 29));

        let i = issue("<Year>2021</Year>").unwrap();
        assert_eq!(i.publication_date(), NaiveDate::from_ymd_opt(2021, 1, 1));

        let i = issue("<Year>2021</Year><Month>6</Month>").unwrap();
        assert_eq!(i.publication_date(), NaiveDate::from_ymd_opt(2021, 6, 1));

        let i = issue("<Month>6</Month><Day>3</Day>").unwrap();
        assert_eq!(i.publication_date(), None);
    }

    #[test]
    fn test_lenient_day_without_calendar_date() {
        // Day 31 validates in any month, but does not make a date in April
        let i = issue("<Year>2021</Year><Month>4</Month><Day>31</Day>").unwrap();
        assert_eq!(i.day(), 31);
        assert_eq!(i.publication_date(), None);

        let i = issue("<Year>2021</Year><Month>2</Month><Day>30</Day>").unwrap();
        assert_eq!(i.day(), 30);
        assert_eq!(i.publication_date(), None);
    }

    #[test]
    fn test_plural_accessors() {
        let i = issue(
            "<Characters>Batman, Robin ,</Characters>\
             <Teams>Justice League</Teams>\
             <Locations>Gotham City, Metropolis</Locations>\
             <StoryArc>Knightfall, Prodigal</StoryArc>\
             <StoryArcNumber>3, 7</StoryArcNumber>\
             <Web>https://a.example https://b.example</Web>",
        )
        .unwrap();

        assert_eq!(i.character(), "Batman, Robin ,");
        assert_eq!(i.characters(), vec!["Batman", "Robin"]);
        assert_eq!(i.team(), "Justice League");
        assert_eq!(i.teams(), vec!["Justice League"]);
        assert_eq!(i.location(), "Gotham City, Metropolis");
        assert_eq!(i.locations(), vec!["Gotham City", "Metropolis"]);
        assert_eq!(i.story_arc(), "Knightfall, Prodigal");
        assert_eq!(i.story_arcs(), vec!["Knightfall", "Prodigal"]);
        assert_eq!(i.story_arc_number(), "3, 7");
        assert_eq!(i.story_arc_numbers(), vec!["3", "7"]);
        assert_eq!(
            i.web_urls(),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_pages_in_order() {
        let i = issue(
            r#"<Pages>
                <Page Image="0" Type="FrontCover"/>
                <Page Image="1"/>
                <Page Image="2" Type="Advertisement"/>
                <Page Image="3" Type="BackCover"/>
            </Pages>"#,
        )
        .unwrap();

        assert!(i.has_pages());
        let images: Vec<i64> = i.pages().iter().map(Page::image).collect();
        assert_eq!(images, vec![0, 1, 2, 3]);

        let covers: Vec<i64> = i.cover_pages().iter().map(|p| p.image()).collect();
        assert_eq!(covers, vec![0, 3]);
        let stories: Vec<i64> = i.story_pages().iter().map(|p| p.image()).collect();
        assert_eq!(stories, vec![1]);
        assert_eq!(i.pages_of_type("Advertisement").len(), 1);
        assert_eq!(i.page(2).map(Page::page_type), Some("Advertisement"));
        assert!(i.page(4).is_none());
    }

    #[test]
    fn test_invalid_page_aborts_issue() {
        let result = issue(r#"<Pages><Page Image="0"/><Page Type="Story"/></Pages>"#);
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_page_limit() {
        let limits = Limits {
            max_pages: 1,
            ..Limits::default()
        };
        let xml = r#"<ComicInfo><Pages><Page Image="0"/><Page Image="1"/></Pages></ComicInfo>"#;
        assert!(matches!(
            Issue::from_xml_with_limits(xml, &limits),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_load_rejects_bare_token() {
        assert!(matches!(Issue::load("12345"), Err(Error::Parse(_))));
        assert!(matches!(Issue::load("ComicInfo"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Issue::load("/no/such/dir/ComicInfo.xml"),
            Err(Error::File { .. })
        ));
    }
}
