use crate::{Dataset, Rgb, SymbolRecord};

/// Find the candidate closest to the origin.
///
/// This function compares the origin to every candidate, computing the
/// distance with the given function, and returns the index of the closest
/// candidate, or `None` if there are no candidates. The running minimum starts
/// out as the first candidate's distance and is only replaced by a strictly
/// smaller distance. Hence, of several equally close candidates, the first one
/// wins.
pub(crate) fn find_closest_index<C, F, D>(
    origin: &Rgb,
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = Rgb>,
    F: FnMut(&Rgb, &Rgb) -> D,
    D: PartialOrd,
{
    let mut iter = candidates.into_iter();
    let mut min_distance = compute_distance(origin, &iter.next()?);
    let mut min_index = 0;

    for (index, candidate) in iter.enumerate() {
        let distance = compute_distance(origin, &candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = index + 1;
        }
    }

    Some(min_index)
}

/// Find the record whose color comes closest to the given color.
///
/// This function scans the entire dataset, measuring the Euclidian distance in
/// RGB between the given color and each record's color. It returns the record
/// with the smallest distance. If several records are equally close, the one
/// appearing first in the dataset wins. If the dataset is empty, there is no
/// match.
///
/// ```
/// # use prettymoji::{find_closest, Dataset, Rgb, SymbolRecord};
/// let dataset = Dataset::new(vec![
///     SymbolRecord::new("A", "first", Rgb::new(0, 0, 0)),
///     SymbolRecord::new("B", "second", Rgb::new(0, 0, 0)),
///     SymbolRecord::new("C", "third", Rgb::new(255, 255, 255)),
/// ]);
///
/// let closest = find_closest(&dataset, Rgb::new(10, 10, 10));
/// assert_eq!(closest.map(|r| r.symbol()), Some("A"));
///
/// let closest = find_closest(&dataset, Rgb::new(200, 200, 200));
/// assert_eq!(closest.map(|r| r.symbol()), Some("C"));
/// ```
pub fn find_closest(dataset: &Dataset, color: Rgb) -> Option<&SymbolRecord> {
    let colors = dataset.iter().map(SymbolRecord::color);
    let index = find_closest_index(&color, colors, Rgb::squared_distance)?;
    dataset.get(index)
}

/// Find the first record with the given symbol.
///
/// This function compares symbols for exact string equality. It does not
/// normalize Unicode or fold case. If several records have the same symbol,
/// the one appearing first in the dataset wins.
///
/// ```
/// # use prettymoji::{find_by_symbol, Dataset, Rgb, SymbolRecord};
/// let dataset = Dataset::new(vec![
///     SymbolRecord::new("🍎", "red_apple", Rgb::new(0xdd, 0x2e, 0x44)),
///     SymbolRecord::new("🍏", "green_apple", Rgb::new(0x77, 0xb2, 0x55)),
/// ]);
///
/// let apple = find_by_symbol(&dataset, "🍏").map(|r| r.hex());
/// assert_eq!(apple.as_deref(), Some("#77B255"));
/// assert!(find_by_symbol(&dataset, "🍐").is_none());
/// ```
pub fn find_by_symbol<'d>(dataset: &'d Dataset, symbol: &str) -> Option<&'d SymbolRecord> {
    dataset.iter().find(|record| record.symbol() == symbol)
}
