//! Page entries of a ComicInfo `Pages` list

use crate::error::{Error, Result};
use crate::schema::{
    attributes, COVER_PAGE_TYPES, DEFAULT_DOUBLE_PAGE, DEFAULT_IMAGE_SIZE, DEFAULT_INTEGER,
    DEFAULT_PAGE_TYPE, DEFAULT_STRING,
};
use crate::validators::{
    split_whitespace_list, validate_boolean, validate_comic_page_type, validate_integer,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

/// Recognized page attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAttribute {
    /// `Image`
    Image,
    /// `Type`
    Type,
    /// `DoublePage`
    DoublePage,
    /// `ImageSize`
    ImageSize,
    /// `Key`
    Key,
    /// `Bookmark`
    Bookmark,
    /// `ImageWidth`
    ImageWidth,
    /// `ImageHeight`
    ImageHeight,
}

impl PageAttribute {
    /// Every attribute, in schema order
    pub const ALL: [PageAttribute; 8] = [
        PageAttribute::Image,
        PageAttribute::Type,
        PageAttribute::DoublePage,
        PageAttribute::ImageSize,
        PageAttribute::Key,
        PageAttribute::Bookmark,
        PageAttribute::ImageWidth,
        PageAttribute::ImageHeight,
    ];

    /// Resolve a schema attribute name or its snake_case alias
    pub fn from_key(key: &str) -> Option<Self> {
        let attribute = match key {
            attributes::IMAGE | "image" => PageAttribute::Image,
            attributes::TYPE | "type" | "page_type" => PageAttribute::Type,
            attributes::DOUBLE_PAGE | "double_page" => PageAttribute::DoublePage,
            attributes::IMAGE_SIZE | "image_size" => PageAttribute::ImageSize,
            attributes::KEY | "key" => PageAttribute::Key,
            attributes::BOOKMARK | "bookmark" => PageAttribute::Bookmark,
            attributes::IMAGE_WIDTH | "image_width" => PageAttribute::ImageWidth,
            attributes::IMAGE_HEIGHT | "image_height" => PageAttribute::ImageHeight,
            _ => return None,
        };
        Some(attribute)
    }

    /// snake_case field name
    pub fn field_name(self) -> &'static str {
        match self {
            PageAttribute::Image => "image",
            PageAttribute::Type => "type",
            PageAttribute::DoublePage => "double_page",
            PageAttribute::ImageSize => "image_size",
            PageAttribute::Key => "key",
            PageAttribute::Bookmark => "bookmark",
            PageAttribute::ImageWidth => "image_width",
            PageAttribute::ImageHeight => "image_height",
        }
    }
}

/// One page of an issue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Page {
    image: i64,
    #[serde(rename = "type")]
    page_type: String,
    double_page: bool,
    image_size: i64,
    key: String,
    bookmark: String,
    image_width: i64,
    image_height: i64,
}

impl Page {
    /// Create a page for `image` with every other field at its default
    pub fn new(image: i64) -> Self {
        Self {
            image,
            page_type: DEFAULT_PAGE_TYPE.to_string(),
            double_page: DEFAULT_DOUBLE_PAGE,
            image_size: DEFAULT_IMAGE_SIZE,
            key: DEFAULT_STRING.to_string(),
            bookmark: DEFAULT_STRING.to_string(),
            image_width: DEFAULT_INTEGER,
            image_height: DEFAULT_INTEGER,
        }
    }

    /// Build a page from raw attributes.
    ///
    /// Keys may be schema names (`ImageWidth`) or snake_case aliases
    /// (`image_width`). Unrecognized keys are ignored. When a key appears more
    /// than once the last value wins.
    ///
    /// # Errors
    ///
    /// - [`Error::Schema`] when `Image` is missing or empty
    /// - [`Error::TypeCoercion`] for non-numeric integers or an unrecognized boolean
    /// - [`Error::InvalidEnum`] for an unknown page type
    pub fn from_attributes<I, K, V>(attrs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw: IndexMap<PageAttribute, String> = IndexMap::new();
        for (key, value) in attrs {
            match PageAttribute::from_key(key.as_ref()) {
                Some(attribute) => {
                    raw.insert(attribute, value.as_ref().to_string());
                }
                None => trace!(key = key.as_ref(), "ignoring unknown page attribute"),
            }
        }
        let get = |attribute: PageAttribute| raw.get(&attribute).map(String::as_str);

        let image = match get(PageAttribute::Image).filter(|v| !v.is_empty()) {
            Some(text) => validate_integer(Some(text), attributes::IMAGE, DEFAULT_INTEGER)?,
            None => return Err(Error::Schema("Image attribute is required for Page".into())),
        };

        let page_type = validate_comic_page_type(get(PageAttribute::Type))?;
        let double_page = validate_boolean(get(PageAttribute::DoublePage), attributes::DOUBLE_PAGE)?;

        let image_size = validate_integer(
            get(PageAttribute::ImageSize),
            attributes::IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
        )?;
        let image_size = if image_size < 0 {
            DEFAULT_IMAGE_SIZE
        } else {
            image_size
        };

        let image_width = validate_integer(
            get(PageAttribute::ImageWidth),
            attributes::IMAGE_WIDTH,
            DEFAULT_INTEGER,
        )?;
        let image_height = validate_integer(
            get(PageAttribute::ImageHeight),
            attributes::IMAGE_HEIGHT,
            DEFAULT_INTEGER,
        )?;

        Ok(Self {
            image,
            page_type,
            double_page,
            image_size,
            key: get(PageAttribute::Key).unwrap_or(DEFAULT_STRING).to_string(),
            bookmark: get(PageAttribute::Bookmark)
                .unwrap_or(DEFAULT_STRING)
                .to_string(),
            image_width,
            image_height,
        })
    }

    /// Image index
    pub fn image(&self) -> i64 {
        self.image
    }

    /// Raw page type text, possibly several whitespace-separated types
    pub fn page_type(&self) -> &str {
        &self.page_type
    }

    /// Whether the page spans two pages
    pub fn is_double_page(&self) -> bool {
        self.double_page
    }

    /// Image file size in bytes, 0 when unknown
    pub fn image_size(&self) -> i64 {
        self.image_size
    }

    /// Page key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Bookmark label
    pub fn bookmark(&self) -> &str {
        &self.bookmark
    }

    /// Image width in pixels, -1 when unset
    pub fn image_width(&self) -> i64 {
        self.image_width
    }

    /// Image height in pixels, -1 when unset
    pub fn image_height(&self) -> i64 {
        self.image_height
    }

    /// FrontCover, BackCover or InnerCover
    pub fn is_cover(&self) -> bool {
        COVER_PAGE_TYPES.contains(&self.page_type.as_str())
    }

    /// Story page
    pub fn is_story(&self) -> bool {
        self.page_type == "Story"
    }

    /// Deleted page
    pub fn is_deleted(&self) -> bool {
        self.page_type == "Deleted"
    }

    /// Individual page type tokens
    pub fn types(&self) -> Vec<String> {
        split_whitespace_list(&self.page_type)
    }

    /// Whether `page_type` is one of this page's types
    pub fn includes_type(&self, page_type: &str) -> bool {
        self.page_type.split_whitespace().any(|t| t == page_type)
    }

    /// Width and height, `None` where unset
    pub fn dimensions(&self) -> (Option<i64>, Option<i64>) {
        (unset_to_none(self.image_width), unset_to_none(self.image_height))
    }

    /// Both width and height are set
    pub fn dimensions_available(&self) -> bool {
        self.image_width != DEFAULT_INTEGER && self.image_height != DEFAULT_INTEGER
    }

    /// Width divided by height, `None` when unavailable or the height is zero
    pub fn aspect_ratio(&self) -> Option<f64> {
        if !self.dimensions_available() || self.image_height == 0 {
            return None;
        }
        Some(self.image_width as f64 / self.image_height as f64)
    }

    /// Has a non-empty bookmark
    pub fn is_bookmarked(&self) -> bool {
        !self.bookmark.is_empty()
    }

    /// Every field by snake_case name
    pub fn to_map(&self) -> IndexMap<&'static str, Value> {
        PageAttribute::ALL
            .iter()
            .map(|&attribute| (attribute.field_name(), self.value_of(attribute)))
            .collect()
    }

    /// Schema attributes that differ from their defaults. `Image` is always
    /// present.
    pub fn to_xml_attributes(&self) -> IndexMap<&'static str, String> {
        let mut attrs = IndexMap::new();
        attrs.insert(attributes::IMAGE, self.image.to_string());
        if self.page_type != DEFAULT_PAGE_TYPE {
            attrs.insert(attributes::TYPE, self.page_type.clone());
        }
        if self.double_page != DEFAULT_DOUBLE_PAGE {
            attrs.insert(attributes::DOUBLE_PAGE, self.double_page.to_string());
        }
        if self.image_size != DEFAULT_IMAGE_SIZE {
            attrs.insert(attributes::IMAGE_SIZE, self.image_size.to_string());
        }
        if !self.key.is_empty() {
            attrs.insert(attributes::KEY, self.key.clone());
        }
        if !self.bookmark.is_empty() {
            attrs.insert(attributes::BOOKMARK, self.bookmark.clone());
        }
        if self.image_width != DEFAULT_INTEGER {
            attrs.insert(attributes::IMAGE_WIDTH, self.image_width.to_string());
        }
        if self.image_height != DEFAULT_INTEGER {
            attrs.insert(attributes::IMAGE_HEIGHT, self.image_height.to_string());
        }
        attrs
    }

    fn value_of(&self, attribute: PageAttribute) -> Value {
        match attribute {
            PageAttribute::Image => self.image.into(),
            PageAttribute::Type => self.page_type.clone().into(),
            PageAttribute::DoublePage => self.double_page.into(),
            PageAttribute::ImageSize => self.image_size.into(),
            PageAttribute::Key => self.key.clone().into(),
            PageAttribute::Bookmark => self.bookmark.clone().into(),
            PageAttribute::ImageWidth => self.image_width.into(),
            PageAttribute::ImageHeight => self.image_height.into(),
        }
    }
}

fn unset_to_none(value: i64) -> Option<i64> {
    (value != DEFAULT_INTEGER).then_some(value)
}
