use bitflags::bitflags;

bitflags! {
    /// Style flags for a [`Font`], combinable with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKEOUT = 1 << 3;
    }
}

impl FontStyle {
    /// No styling; the empty flag set.
    pub const REGULAR: Self = Self::empty();
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::REGULAR
    }
}

/// A font request that converts to and from the attribute types of the
/// `fontdb`, `ttf-parser`, `swash` and `ab_glyph` ecosystems.
///
/// Bold maps to weight 700 and italic to an italic or oblique slant in
/// targets that model styles that way. The size is passed through where
/// the target carries one and omitted otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name, e.g. `"Liberation Serif"`.
    pub family: String,
    /// Style flag set.
    pub style: FontStyle,
    /// Size in points. Must be positive.
    pub size: f32,
}

impl Font {
    /// Size used when none is given.
    pub const DEFAULT_SIZE: f32 = 12.0;

    /// Creates a regular font of the default size.
    pub fn new(family: impl Into<String>) -> Self {
        Self::styled_sized(family, FontStyle::REGULAR, Self::DEFAULT_SIZE)
    }

    /// Creates a regular font of the given size.
    pub fn sized(family: impl Into<String>, size: f32) -> Self {
        Self::styled_sized(family, FontStyle::REGULAR, size)
    }

    /// Creates a font with the given style flags and the default size.
    pub fn styled(family: impl Into<String>, style: FontStyle) -> Self {
        Self::styled_sized(family, style, Self::DEFAULT_SIZE)
    }

    /// Creates a font with the given style flags and size.
    pub fn styled_sized(family: impl Into<String>, style: FontStyle, size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    pub fn bold(&self) -> bool {
        self.style.contains(FontStyle::BOLD)
    }

    pub fn italic(&self) -> bool {
        self.style.contains(FontStyle::ITALIC)
    }

    pub fn underline(&self) -> bool {
        self.style.contains(FontStyle::UNDERLINE)
    }

    pub fn strikeout(&self) -> bool {
        self.style.contains(FontStyle::STRIKEOUT)
    }

    /// Creates a font from `ttf-parser` face attributes. Weights of 700
    /// and above map to bold; italic and oblique slants map to italic.
    pub fn with_face_style(
        family: impl Into<String>,
        weight: ttf_parser::Weight,
        style: ttf_parser::Style,
        size: f32,
    ) -> Self {
        let mut flags = FontStyle::REGULAR;
        if weight.to_number() >= 700 {
            flags |= FontStyle::BOLD;
        }
        if matches!(style, ttf_parser::Style::Italic | ttf_parser::Style::Oblique) {
            flags |= FontStyle::ITALIC;
        }
        Self::styled_sized(family, flags, size)
    }

    /// Creates a font from `swash` attributes. Swash carries no family
    /// name itself, so one is supplied; the size defaults to 12.
    pub fn with_attributes(family: impl Into<String>, attrs: swash::Attributes) -> Self {
        let mut flags = FontStyle::REGULAR;
        if attrs.weight().0 >= 700 {
            flags |= FontStyle::BOLD;
        }
        if matches!(
            attrs.style(),
            swash::Style::Italic | swash::Style::Oblique(_)
        ) {
            flags |= FontStyle::ITALIC;
        }
        Self::styled(family, flags)
    }

    /// Creates a font from an `ab_glyph` pixel scale. The scale carries
    /// no style, so the font is regular; the vertical scale becomes the
    /// size.
    pub fn with_scale(family: impl Into<String>, scale: ab_glyph::PxScale) -> Self {
        Self::sized(family, scale.y)
    }

    /// The `fontdb` weight: 700 for bold, 400 otherwise.
    pub fn fontdb_weight(&self) -> fontdb::Weight {
        if self.bold() {
            fontdb::Weight::BOLD
        } else {
            fontdb::Weight::NORMAL
        }
    }

    /// The `fontdb` slant: italic or normal.
    pub fn fontdb_style(&self) -> fontdb::Style {
        if self.italic() {
            fontdb::Style::Italic
        } else {
            fontdb::Style::Normal
        }
    }

    /// The family as a `fontdb` query family.
    pub fn fontdb_family(&self) -> fontdb::Family<'_> {
        fontdb::Family::Name(&self.family)
    }

    /// The `ttf-parser` weight: `Bold` or `Normal`.
    pub fn ttf_weight(&self) -> ttf_parser::Weight {
        if self.bold() {
            ttf_parser::Weight::Bold
        } else {
            ttf_parser::Weight::Normal
        }
    }

    /// The `ttf-parser` slant: `Italic` or `Normal`.
    pub fn ttf_style(&self) -> ttf_parser::Style {
        if self.italic() {
            ttf_parser::Style::Italic
        } else {
            ttf_parser::Style::Normal
        }
    }

    /// The `swash` attribute triple. The stretch is always normal.
    pub fn attributes(&self) -> swash::Attributes {
        let weight = if self.bold() {
            swash::Weight::BOLD
        } else {
            swash::Weight::NORMAL
        };
        let style = if self.italic() {
            swash::Style::Italic
        } else {
            swash::Style::Normal
        };
        swash::Attributes::new(swash::Stretch::NORMAL, weight, style)
    }

    /// A uniform `ab_glyph` pixel scale from the size.
    pub fn px_scale(&self) -> ab_glyph::PxScale {
        ab_glyph::PxScale::from(self.size)
    }
}

/// Converts a `fontdb` face record. Takes the first family name, falling
/// back to the PostScript name; the size defaults to 12 since face
/// records carry none.
impl From<&fontdb::FaceInfo> for Font {
    fn from(face: &fontdb::FaceInfo) -> Self {
        let family = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| face.post_script_name.clone());
        let mut flags = FontStyle::REGULAR;
        if face.weight.0 >= 700 {
            flags |= FontStyle::BOLD;
        }
        if matches!(face.style, fontdb::Style::Italic | fontdb::Style::Oblique) {
            flags |= FontStyle::ITALIC;
        }
        Self::styled(family, flags)
    }
}
