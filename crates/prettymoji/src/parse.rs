#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::InvalidColor;
use crate::Rgb;

/// Parse the six hexadecimal digits into three channels. This function only
/// checks that each pair of digits is hexadecimal; callers have already
/// checked the length.
fn parse_digits(s: &str) -> Result<[u8; 3], InvalidColor> {
    fn parse_channel(s: &str, index: usize) -> Result<u8, InvalidColor> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(InvalidColor::MalformedHex)?;

        // from_str_radix accepts a leading `+`, which is no hex digit.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColor::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| InvalidColor::MalformedHex)
    }

    let r = parse_channel(s, 0)?;
    let g = parse_channel(s, 1)?;
    let b = parse_channel(s, 2)?;
    Ok([r, g, b])
}

/// Parse the text as an RGB color.
///
/// This function is strict: The text must be a `#` followed by exactly six
/// hexadecimal digits, in either case, without surrounding white space. It
/// performs no auto-correction whatsoever, so partial input from a user who
/// still is typing is just as invalid as garbage. Shaping raw input into a
/// candidate color is the job of
/// [`shape_color_input`](crate::input::shape_color_input).
///
/// ```
/// # use prettymoji::{parse_color, Rgb};
/// # use prettymoji::error::InvalidColor;
/// assert_eq!(parse_color("#7C4DFF")?, Rgb::new(124, 77, 255));
/// assert_eq!(parse_color("7C4DFF"), Err(InvalidColor::MissingHash));
/// assert_eq!(parse_color("#7C4DF"), Err(InvalidColor::UnexpectedLength));
/// assert_eq!(parse_color("#7C4DFFF"), Err(InvalidColor::UnexpectedLength));
/// assert_eq!(parse_color("#ZZZZZZ"), Err(InvalidColor::MalformedHex));
/// # Ok::<(), InvalidColor>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn parse_color(s: &str) -> Result<Rgb, InvalidColor> {
    let digits = s.strip_prefix('#').ok_or(InvalidColor::MissingHash)?;
    if digits.len() != 6 {
        return Err(InvalidColor::UnexpectedLength);
    }

    parse_digits(digits).map(Rgb::from)
}

/// Decompose a trusted hexadecimal color into its channels.
///
/// Unlike [`parse_color`], this function is lenient: The leading `#` is
/// optional. It also is total: Malformed text decomposes to [`Rgb::BLACK`]
/// after logging a warning. That makes it suitable for colors from a dataset,
/// which are trusted to be well-formed, but entirely unsuitable for validating
/// user input.
pub fn hex_to_rgb(s: &str) -> Rgb {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() == 6 {
        if let Ok(channels) = parse_digits(digits) {
            return Rgb::from(channels);
        }
    }

    log::warn!("malformed trusted color {:?} decomposes to black", s);
    Rgb::BLACK
}

#[cfg(test)]
mod test {
    use super::{hex_to_rgb, parse_color};
    use crate::error::InvalidColor;
    use crate::Rgb;

    #[test]
    fn test_parse_color() -> Result<(), InvalidColor> {
        assert_eq!(parse_color("#7C4DFF")?, Rgb::new(124, 77, 255));
        assert_eq!(parse_color("#7c4dff")?, Rgb::new(124, 77, 255));
        assert_eq!(parse_color("#000000")?, Rgb::BLACK);
        assert_eq!(parse_color("#ffFFff")?, Rgb::new(255, 255, 255));
        Ok(())
    }

    #[test]
    fn test_parse_color_rejects() {
        assert_eq!(parse_color("7C4DFF"), Err(InvalidColor::MissingHash));
        assert_eq!(parse_color(""), Err(InvalidColor::MissingHash));
        assert_eq!(parse_color(" #7C4DFF"), Err(InvalidColor::MissingHash));
        assert_eq!(parse_color("#"), Err(InvalidColor::UnexpectedLength));
        assert_eq!(parse_color("#7C4DF"), Err(InvalidColor::UnexpectedLength));
        assert_eq!(parse_color("#7C4DFFF"), Err(InvalidColor::UnexpectedLength));
        assert_eq!(parse_color("#7C4DFF "), Err(InvalidColor::UnexpectedLength));
        assert_eq!(parse_color("#fff"), Err(InvalidColor::UnexpectedLength));
        assert_eq!(parse_color("#ZZZZZZ"), Err(InvalidColor::MalformedHex));
        assert_eq!(parse_color("#+1+2+3"), Err(InvalidColor::MalformedHex));
        assert_eq!(parse_color("#-1-2-3"), Err(InvalidColor::MalformedHex));

        // Six bytes, but the emoji straddles the channel boundaries.
        assert_eq!(parse_color("#🟣00"), Err(InvalidColor::MalformedHex));
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#7C4DFF"), Rgb::new(124, 77, 255));
        assert_eq!(hex_to_rgb("7c4dff"), Rgb::new(124, 77, 255));
        assert_eq!(hex_to_rgb("#ABCDEF"), Rgb::new(0xab, 0xcd, 0xef));

        // Malformed trusted input decomposes to black.
        assert_eq!(hex_to_rgb("#ABCDE"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("##ABCDEF"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#GHIJKL"), Rgb::BLACK);
        assert_eq!(hex_to_rgb(""), Rgb::BLACK);
    }
}
