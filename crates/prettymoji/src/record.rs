#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::Rgb;

/// A dataset entry.
///
/// A symbol record maps a symbol to its representative color. The symbol
/// usually is a single emoji, but prettymoji treats it as an opaque string and
/// only ever compares it for equality. The name, Unicode label, and area are
/// carried along for presentation and play no part in matching.
///
/// ```
/// # use prettymoji::{Rgb, SymbolRecord};
/// let record = SymbolRecord::new("🟣", "purple_circle", Rgb::new(0xaa, 0x8e, 0xd6))
///     .with_unicode("U+1F7E3")
///     .with_area(0.78);
/// assert_eq!(record.symbol(), "🟣");
/// assert_eq!(record.hex(), "#AA8ED6");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "prettymoji"))]
#[cfg_attr(
    feature = "json",
    derive(Deserialize, Serialize),
    serde(from = "RawRecord", into = "WrittenRecord")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolRecord {
    symbol: String,
    name: String,
    unicode: String,
    color: Rgb,
    area: f64,
}

impl SymbolRecord {
    /// Create a new record with the given symbol, display name, and color.
    pub fn new<S, N>(symbol: S, name: N, color: Rgb) -> Self
    where
        S: Into<String>,
        N: Into<String>,
    {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            unicode: String::new(),
            color,
            area: 0.0,
        }
    }

    /// Create a new record with a color in hexadecimal notation.
    ///
    /// The color is trusted and hence decomposed with the lenient
    /// [`hex_to_rgb`](crate::hex_to_rgb).
    pub fn from_hex<S, N>(symbol: S, name: N, hex: &str) -> Self
    where
        S: Into<String>,
        N: Into<String>,
    {
        Self::new(symbol, name, crate::hex_to_rgb(hex))
    }

    /// Update the Unicode label.
    #[must_use = "method returns a new record and does not mutate the original"]
    pub fn with_unicode<U: Into<String>>(mut self, unicode: U) -> Self {
        self.unicode = unicode.into();
        self
    }

    /// Update the area.
    #[must_use = "method returns a new record and does not mutate the original"]
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl SymbolRecord {
    /// Create a new record. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (symbol, name, color, unicode=None, area=0.0))]
    pub fn py_new(
        symbol: String,
        name: String,
        color: Rgb,
        unicode: Option<String>,
        area: f64,
    ) -> Self {
        Self::new(symbol, name, color)
            .with_unicode(unicode.unwrap_or_default())
            .with_area(area)
    }

    /// Get the symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the Unicode label, e.g., `U+1F7E3`.
    pub fn unicode(&self) -> &str {
        &self.unicode
    }

    /// Get the representative color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Get the representative color in canonical hexadecimal notation.
    pub fn hex(&self) -> String {
        self.color.to_string()
    }

    /// Get the area.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Return a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A record as it appears in a dataset document.
///
/// The color comes from `hex`. Documents may also carry `rgb` as three
/// numbers, which need not be integers. It is only checked against `hex`.
#[cfg(feature = "json")]
#[derive(Deserialize)]
struct RawRecord {
    #[serde(alias = "symbol")]
    emoji: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    unicode: String,
    #[serde(default)]
    hex: String,
    #[serde(default)]
    rgb: Option<[f64; 3]>,
    #[serde(default)]
    area: f64,
}

#[cfg(feature = "json")]
impl From<RawRecord> for SymbolRecord {
    fn from(value: RawRecord) -> Self {
        let color = crate::hex_to_rgb(&value.hex);
        let channels = <[u8; 3]>::from(color).map(f64::from);
        if value.rgb.is_some_and(|rgb| rgb != channels) {
            log::warn!(
                "record {:?} has rgb {:?} but hex {:?}, using hex",
                value.emoji,
                value.rgb,
                value.hex
            );
        }

        Self {
            symbol: value.emoji,
            name: value.name,
            unicode: value.unicode,
            color,
            area: value.area,
        }
    }
}

/// A record as it is written to a dataset document.
#[cfg(feature = "json")]
#[derive(Serialize)]
struct WrittenRecord {
    emoji: String,
    name: String,
    unicode: String,
    hex: String,
    rgb: [u8; 3],
    area: f64,
}

#[cfg(feature = "json")]
impl From<SymbolRecord> for WrittenRecord {
    fn from(value: SymbolRecord) -> Self {
        Self {
            hex: value.hex(),
            rgb: value.color.into(),
            emoji: value.symbol,
            name: value.name,
            unicode: value.unicode,
            area: value.area,
        }
    }
}
