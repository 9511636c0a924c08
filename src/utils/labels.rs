use crate::matrix::Node;

/// Maps a city index to its display label: `A`, `B`, ..., `Z`, `AA`, `AB`, ...
///
/// # Example
/// ```
/// use tsp::utils::city_label;
/// assert_eq!(city_label(0), "A");
/// assert_eq!(city_label(25), "Z");
/// assert_eq!(city_label(26), "AA");
/// ```
pub fn city_label(city: Node) -> String {
    let mut label = Vec::with_capacity(2);
    let mut rest = city as u64 + 1;

    while rest > 0 {
        rest -= 1;
        label.push(char::from(b'A' + (rest % 26) as u8));
        rest /= 26;
    }

    label.into_iter().rev().collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn spreadsheet_style() {
        assert_eq!(city_label(1), "B");
        assert_eq!(city_label(27), "AB");
        assert_eq!(city_label(51), "AZ");
        assert_eq!(city_label(52), "BA");
        assert_eq!(city_label(701), "ZZ");
        assert_eq!(city_label(702), "AAA");
    }

    #[test]
    fn unique() {
        let labels: HashSet<_> = (0..2000).map(city_label).collect();
        assert_eq!(labels.len(), 2000);
    }
}
