#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::InvalidColor;

/// A 24-bit RGB color.
///
/// This struct combines three `u8` channels, which makes out-of-range channel
/// values unrepresentable. Its display is the canonical hashed hexadecimal
/// notation, which prettymoji always writes with uppercase digits:
///
/// ```
/// # use prettymoji::Rgb;
/// let violet = Rgb::new(0x7c, 0x4d, 0xff);
/// assert_eq!(format!("{}", violet), "#7C4DFF");
/// assert_eq!(violet[1], 77);
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #7c4dff;"></div>
/// </div>
/// <br>
///
/// Parsing goes through the strict [`parse_color`](crate::parse_color), so
/// `Rgb::from_str` rejects anything but `#` followed by six hexadecimal digits.
#[cfg_attr(
    feature = "pyffi",
    doc = "Since there is no Python feature equivalent to trait implementations in
    Rust, the Python class for `Rgb` provides equivalent functionality
    through [`Rgb::coordinates`], [`Rgb::__len__`], and [`Rgb::__getitem__`]."
)]
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, sequence, module = "prettymoji"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new RGB color from its channels. <i class=python-only>Python
    /// only!</i>
    #[new]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse the hashed hexadecimal color. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, InvalidColor> {
        crate::parse_color(s)
    }

    /// Access this color's channels. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the channel at the given index. <i class=python-only>Python
    /// only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid channel index",
            )),
        }
    }

    /// Calculate the Euclidian distance between the two colors. <i
    /// class=python-only>Python only!</i>
    pub fn distance(&self, other: &Rgb) -> f64 {
        self.do_distance(other)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        let [r, g, b] = self.0;
        format!("Rgb({}, {}, {})", r, g, b)
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Rgb {
    /// Create a new RGB color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Calculate the Euclidian distance between the two colors.
    ///
    /// ```
    /// # use prettymoji::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// assert_eq!(black.distance(&Rgb::new(3, 4, 0)), 5.0);
    /// ```
    pub fn distance(&self, other: &Rgb) -> f64 {
        self.do_distance(other)
    }
}

impl Rgb {
    /// The color black, which is also what malformed trusted colors decompose
    /// to.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Calculate the squared Euclidian distance between the two colors.
    ///
    /// The square root is monotonic, so comparing squared distances orders
    /// colors exactly like comparing distances. Since the squared distance is
    /// an integer, equal distances also compare as exactly equal.
    pub fn squared_distance(&self, other: &Rgb) -> u32 {
        let [r1, g1, b1] = self.0.map(i32::from);
        let [r2, g2, b2] = other.0.map(i32::from);

        let r_delta = r1 - r2;
        let g_delta = g1 - g2;
        let b_delta = b1 - b2;

        // At most 3 * 255², which easily fits.
        (r_delta * r_delta + g_delta * g_delta + b_delta * b_delta) as u32
    }

    fn do_distance(&self, other: &Rgb) -> f64 {
        f64::from(self.squared_distance(other)).sqrt()
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl core::str::FromStr for Rgb {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_color(s)
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = *self.as_ref();
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}
