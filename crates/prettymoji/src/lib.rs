//! # Pretty 🌸 Emoji
//!
//! Prettymoji matches colors to emoji and emoji back to colors.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. With the `pyffi` feature enabled, prettymoji also exposes its matching
engine to Python."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Prettymoji's main abstractions are:
//!
//!   * [`Rgb`] is a **24-bit color** with three `u8` channels. It displays
//!     as hashed hexadecimal with uppercase digits, e.g., `#7C4DFF`.
//!   * [`SymbolRecord`] maps a **symbol**, usually an emoji, to its
//!     representative color. It also carries a display name, a Unicode label,
//!     and an area, which matter for presentation only.
//!   * [`Dataset`] is an **immutable, ordered sequence of records**. With the
//!     `json` feature, it can be parsed from a JSON document.
//!   * [`find_closest`], [`find_by_symbol`], and [`parse_color`] make up the
//!     **matching engine**. They are pure functions without state or side
//!     effects.
//!   * The [`state`] module derives a user interface's state, i.e., color
//!     validity and closest match, from its inputs, and the [`input`] module
//!     shapes raw text from input fields into queries.
//!
//!
//! ## 2. Matching
//!
//! Matching a color to a symbol measures the Euclidian distance in RGB between
//! the color and every record's color and picks the closest record. When
//! several records are equally close, the one that comes first in the dataset
//! wins. Matching a symbol to a color looks up the first record with exactly
//! that symbol.
//!
//! ```
//! # use prettymoji::{find_by_symbol, find_closest, parse_color, Dataset, Rgb, SymbolRecord};
//! # use prettymoji::error::InvalidColor;
//! let dataset = Dataset::new(vec![
//!     SymbolRecord::new("🍋", "lemon", Rgb::new(0xff, 0xcc, 0x4d)),
//!     SymbolRecord::new("🍇", "grapes", Rgb::new(0x74, 0x4e, 0xaa)),
//!     SymbolRecord::new("🥝", "kiwi_fruit", Rgb::new(0x77, 0xb2, 0x55)),
//! ]);
//!
//! // Color to symbol
//! let violet = parse_color("#7C4DFF")?;
//! let grapes = find_closest(&dataset, violet).unwrap();
//! assert_eq!(grapes.symbol(), "🍇");
//!
//! // Symbol to color
//! let kiwi = find_by_symbol(&dataset, "🥝").unwrap();
//! assert_eq!(kiwi.hex(), "#77B255");
//! # Ok::<(), InvalidColor>(())
//! ```
//!
//! [`parse_color`] is strict and only accepts `#` followed by exactly six
//! hexadecimal digits. Its only error, [`InvalidColor`](error::InvalidColor),
//! is the only error raised by the matching engine. Everything else is total
//! and signals the absence of a match with `None`, including for an empty
//! dataset.
//!
//!
//! ## 3. Optional Features
//!
//! Prettymoji supports two feature flags:
//!
//!   - **`json`** controls [`Dataset::from_json`], [`Dataset::from_reader`],
//!     and [`Dataset::to_json`] as well as their implementation with
//!     [serde](https://serde.rs). This feature is enabled by default.
//!   - **`pyffi`** controls prettymoji's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Prettymoji logs through the [log](https://crates.io/crates/log) facade but
//! never installs a logger itself.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

pub mod error;
pub mod input;
pub mod state;

mod dataset;
mod matcher;
mod parse;
mod record;
mod rgb;

pub use dataset::Dataset;
pub use matcher::{find_by_symbol, find_closest};
pub use parse::{hex_to_rgb, parse_color};
pub use record::SymbolRecord;
pub use rgb::Rgb;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn prettymoji(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_color, m)?)?;

    m.add_class::<Dataset>()?;
    m.add_class::<Rgb>()?;
    m.add_class::<SymbolRecord>()?;

    Ok(())
}
