//! Utility module implementing datasets of symbol records.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "json")]
use crate::error::DatasetError;
use crate::{Rgb, SymbolRecord};

/// A dataset.
///
/// A dataset is an immutable, ordered sequence of [`SymbolRecord`]s. It
/// preserves the order of records as loaded and neither reorders nor
/// deduplicates them, since order decides between equally good matches.
/// Instances have no interior mutability and hence can be shared freely, e.g.,
/// as an `Arc<Dataset>`. To reload, create a new dataset and swap the handle.
///
/// A dataset without records is *empty*. That is a valid state, not an error,
/// and all matching operations simply come up without a match.
///
/// ```
/// # use prettymoji::{Dataset, Rgb, SymbolRecord};
/// let dataset = Dataset::new(vec![
///     SymbolRecord::new("🟥", "red_square", Rgb::new(0xdd, 0x2e, 0x44)),
///     SymbolRecord::new("🟦", "blue_square", Rgb::new(0x55, 0xac, 0xee)),
/// ]);
///
/// let closest = dataset.find_closest(Rgb::new(0xff, 0, 0)).map(|r| r.symbol());
/// assert_eq!(closest, Some("🟥"));
/// assert!(Dataset::empty().find_closest(Rgb::BLACK).is_none());
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, sequence, module = "prettymoji"))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SymbolRecord>,
}

impl Dataset {
    /// Create a new dataset with the given records.
    pub fn new(records: Vec<SymbolRecord>) -> Self {
        Self { records }
    }

    /// Create a new empty dataset.
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Get the record at the given index.
    pub fn get(&self, index: usize) -> Option<&SymbolRecord> {
        self.records.get(index)
    }

    /// Get an iterator over the records, in dataset order.
    pub fn iter(&self) -> core::slice::Iter<'_, SymbolRecord> {
        self.records.iter()
    }

    /// Find the record whose color comes closest to the given color.
    ///
    /// See [`find_closest`](crate::find_closest).
    pub fn find_closest(&self, color: Rgb) -> Option<&SymbolRecord> {
        crate::find_closest(self, color)
    }

    /// Find the first record with the given symbol.
    ///
    /// See [`find_by_symbol`](crate::find_by_symbol).
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&SymbolRecord> {
        crate::find_by_symbol(self, symbol)
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Dataset {
    /// Create a new dataset with the given records. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(records: Vec<SymbolRecord>) -> Self {
        Self::new(records)
    }

    /// Parse a dataset document. <i class=python-only>Python only!</i>
    #[cfg(all(feature = "pyffi", feature = "json"))]
    #[staticmethod]
    #[pyo3(name = "from_json")]
    pub fn py_from_json(json: &str) -> Result<Self, DatasetError> {
        Self::from_json(json)
    }

    /// Find the record whose color comes closest to the given color. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "find_closest")]
    pub fn py_find_closest(&self, color: Rgb) -> Option<SymbolRecord> {
        self.find_closest(color).cloned()
    }

    /// Find the first record with the given symbol. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "find_by_symbol")]
    pub fn py_find_by_symbol(&self, symbol: &str) -> Option<SymbolRecord> {
        self.find_by_symbol(symbol).cloned()
    }

    /// Get the record at the given index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<SymbolRecord> {
        to_offset(self.len(), index)
            .and_then(|offset| self.get(offset))
            .cloned()
            .ok_or_else(|| pyo3::exceptions::PyIndexError::new_err("Invalid record index"))
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Get the number of records. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Determine whether this dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Dataset({} records)", self.len())
    }
}

#[cfg(feature = "json")]
impl Dataset {
    /// Parse a dataset document.
    ///
    /// The document is a JSON array of objects with the fields `emoji` (or
    /// `symbol`), `name`, `unicode`, `hex`, `rgb`, and `area`. The color is
    /// decomposed from `hex`, while `rgb`, if present, must be three numbers
    /// but otherwise is ignored. Records must have a non-empty symbol.
    ///
    /// ```
    /// # use prettymoji::{Dataset, Rgb};
    /// # use prettymoji::error::DatasetError;
    /// let dataset = Dataset::from_json(r##"[
    ///     {"emoji": "🟣", "name": "purple_circle", "unicode": "U+1F7E3",
    ///      "hex": "#AA8ED6", "rgb": [170, 142, 214], "area": 0.78}
    /// ]"##)?;
    /// assert_eq!(dataset.len(), 1);
    /// assert_eq!(dataset[0].color(), Rgb::new(170, 142, 214));
    /// # Ok::<(), DatasetError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Self::validate(serde_json::from_str(json)?)
    }

    /// Read a dataset document.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, DatasetError> {
        Self::validate(serde_json::from_reader(reader)?)
    }

    /// Write this dataset as a document.
    pub fn to_json(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string(&self.records)?)
    }

    fn validate(records: Vec<SymbolRecord>) -> Result<Self, DatasetError> {
        if let Some(index) = records.iter().position(|r| r.symbol().is_empty()) {
            return Err(DatasetError::EmptySymbol { index });
        }

        log::debug!("loaded dataset with {} records", records.len());
        Ok(Self::new(records))
    }
}

/// Convert a Python index, which counts from the end if negative, into an
/// offset for a sequence of the given length.
#[cfg(any(test, feature = "pyffi"))]
fn to_offset(len: usize, index: isize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        usize::try_from(index).ok().filter(|&offset| offset < len)
    }
}

impl AsRef<[SymbolRecord]> for Dataset {
    fn as_ref(&self) -> &[SymbolRecord] {
        &self.records
    }
}

impl core::ops::Index<usize> for Dataset {
    type Output = SymbolRecord;

    /// Access the record with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if the index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SymbolRecord;
    type IntoIter = core::slice::Iter<'a, SymbolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<SymbolRecord>> for Dataset {
    fn from(value: Vec<SymbolRecord>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<SymbolRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = SymbolRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
