//! ComicInfo schema tables
//!
//! Valid enumeration values and default values, kept as data so that a new
//! schema value is a table change rather than a code change.

use indexmap::IndexSet;
use once_cell::sync::Lazy;

// =============================================================================
// Defaults
// =============================================================================

/// Default for absent string fields
pub const DEFAULT_STRING: &str = "";
/// Default for absent integer fields
pub const DEFAULT_INTEGER: i64 = -1;
/// Default for absent enum fields
pub const DEFAULT_ENUM: &str = "Unknown";
/// Default for an absent PageCount
pub const DEFAULT_PAGE_COUNT: i64 = 0;
/// Default for an absent page Type
pub const DEFAULT_PAGE_TYPE: &str = "Story";
/// Default for an absent page DoublePage
pub const DEFAULT_DOUBLE_PAGE: bool = false;
/// Default for an absent page ImageSize
pub const DEFAULT_IMAGE_SIZE: i64 = 0;

// =============================================================================
// Enumerations
// =============================================================================

/// Values of the YesNo type (BlackAndWhite)
pub static YES_NO_VALUES: Lazy<IndexSet<&'static str>> =
    Lazy::new(|| ["Unknown", "No", "Yes"].into_iter().collect());

/// Values of the Manga type
pub static MANGA_VALUES: Lazy<IndexSet<&'static str>> = Lazy::new(|| {
    ["Unknown", "No", "Yes", "YesAndRightToLeft"]
        .into_iter()
        .collect()
});

/// Values of the AgeRating type
pub static AGE_RATING_VALUES: Lazy<IndexSet<&'static str>> = Lazy::new(|| {
    [
        "Unknown",
        "Adults Only 18+",
        "Early Childhood",
        "Everyone",
        "Everyone 10+",
        "G",
        "Kids to Adults",
        "M",
        "MA15+",
        "Mature 17+",
        "PG",
        "R18+",
        "Rating Pending",
        "Teen",
        "X18+",
    ]
    .into_iter()
    .collect()
});

/// Values of the ComicPageType type
pub static PAGE_TYPE_VALUES: Lazy<IndexSet<&'static str>> = Lazy::new(|| {
    [
        "FrontCover",
        "InnerCover",
        "Roundup",
        "Story",
        "Advertisement",
        "Editorial",
        "Letters",
        "Preview",
        "BackCover",
        "Other",
        "Deleted",
    ]
    .into_iter()
    .collect()
});

/// Page types that count as covers
pub const COVER_PAGE_TYPES: &[&str] = &["FrontCover", "BackCover", "InnerCover"];

/// Manga values that mean the issue is manga
pub const MANGA_YES_VALUES: &[&str] = &["Yes", "YesAndRightToLeft"];

/// Manga value for right-to-left reading order
pub const MANGA_RIGHT_TO_LEFT: &str = "YesAndRightToLeft";

/// YesNo value meaning yes
pub const YES: &str = "Yes";

// =============================================================================
// Element and attribute names
// =============================================================================

/// Root element name
pub const ROOT_ELEMENT: &str = "ComicInfo";
/// Container element for pages
pub const PAGES_ELEMENT: &str = "Pages";
/// Page element name
pub const PAGE_ELEMENT: &str = "Page";

/// Top-level element names
pub mod elements {
    #![allow(missing_docs)]

    pub const TITLE: &str = "Title";
    pub const SERIES: &str = "Series";
    pub const NUMBER: &str = "Number";
    pub const COUNT: &str = "Count";
    pub const VOLUME: &str = "Volume";
    pub const ALTERNATE_SERIES: &str = "AlternateSeries";
    pub const ALTERNATE_NUMBER: &str = "AlternateNumber";
    pub const ALTERNATE_COUNT: &str = "AlternateCount";
    pub const SUMMARY: &str = "Summary";
    pub const NOTES: &str = "Notes";
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const DAY: &str = "Day";
    pub const WRITER: &str = "Writer";
    pub const PENCILLER: &str = "Penciller";
    pub const INKER: &str = "Inker";
    pub const COLORIST: &str = "Colorist";
    pub const LETTERER: &str = "Letterer";
    pub const COVER_ARTIST: &str = "CoverArtist";
    pub const EDITOR: &str = "Editor";
    pub const TRANSLATOR: &str = "Translator";
    pub const PUBLISHER: &str = "Publisher";
    pub const IMPRINT: &str = "Imprint";
    pub const GENRE: &str = "Genre";
    pub const WEB: &str = "Web";
    pub const PAGE_COUNT: &str = "PageCount";
    pub const LANGUAGE_ISO: &str = "LanguageISO";
    pub const FORMAT: &str = "Format";
    pub const BLACK_AND_WHITE: &str = "BlackAndWhite";
    pub const MANGA: &str = "Manga";
    pub const CHARACTERS: &str = "Characters";
    pub const TEAMS: &str = "Teams";
    pub const LOCATIONS: &str = "Locations";
    pub const SCAN_INFORMATION: &str = "ScanInformation";
    pub const STORY_ARC: &str = "StoryArc";
    pub const STORY_ARC_NUMBER: &str = "StoryArcNumber";
    pub const SERIES_GROUP: &str = "SeriesGroup";
    pub const AGE_RATING: &str = "AgeRating";
    pub const COMMUNITY_RATING: &str = "CommunityRating";
    pub const MAIN_CHARACTER_OR_TEAM: &str = "MainCharacterOrTeam";
    pub const REVIEW: &str = "Review";
}

/// Page attribute names
pub mod attributes {
    #![allow(missing_docs)]

    pub const IMAGE: &str = "Image";
    pub const TYPE: &str = "Type";
    pub const DOUBLE_PAGE: &str = "DoublePage";
    pub const IMAGE_SIZE: &str = "ImageSize";
    pub const KEY: &str = "Key";
    pub const BOOKMARK: &str = "Bookmark";
    pub const IMAGE_WIDTH: &str = "ImageWidth";
    pub const IMAGE_HEIGHT: &str = "ImageHeight";
}
