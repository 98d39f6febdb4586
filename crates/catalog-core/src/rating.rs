//! Star Rating
//!
//! Splits a 0–5 rating into full, half and empty stars.

use crate::filter::MAX_RATING;

pub const STAR_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn class(&self) -> &'static str {
        match self {
            Star::Full => "star full",
            Star::Half => "star half",
            Star::Empty => "star empty",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Star::Full | Star::Half => "★",
            Star::Empty => "☆",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarCounts {
    pub full: usize,
    pub half: usize,
    pub empty: usize,
}

impl StarCounts {
    /// `floor(r)` full stars, a half star iff the fractional part is at
    /// least 0.5, empty stars for the rest. Out-of-range input is clamped.
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, MAX_RATING) };
        let full = rating.floor() as usize;
        let half = usize::from(rating.fract() >= 0.5);
        Self { full, half, empty: STAR_COUNT - full - half }
    }

    /// Stars in display order.
    pub fn stars(&self) -> Vec<Star> {
        std::iter::repeat(Star::Full)
            .take(self.full)
            .chain(std::iter::repeat(Star::Half).take(self.half))
            .chain(std::iter::repeat(Star::Empty).take(self.empty))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_and_a_half() {
        let counts = StarCounts::from_rating(3.5);
        assert_eq!(counts, StarCounts { full: 3, half: 1, empty: 1 });
        assert_eq!(
            counts.stars(),
            vec![Star::Full, Star::Full, Star::Full, Star::Half, Star::Empty]
        );
    }

    #[test]
    fn test_below_half_rounds_down() {
        assert_eq!(StarCounts::from_rating(4.2), StarCounts { full: 4, half: 0, empty: 1 });
        assert_eq!(StarCounts::from_rating(4.7), StarCounts { full: 4, half: 1, empty: 0 });
    }

    #[test]
    fn test_bounds() {
        assert_eq!(StarCounts::from_rating(0.0), StarCounts { full: 0, half: 0, empty: 5 });
        assert_eq!(StarCounts::from_rating(5.0), StarCounts { full: 5, half: 0, empty: 0 });
        assert_eq!(StarCounts::from_rating(6.3), StarCounts { full: 5, half: 0, empty: 0 });
        assert_eq!(StarCounts::from_rating(-1.0), StarCounts { full: 0, half: 0, empty: 5 });
        assert_eq!(StarCounts::from_rating(f64::NAN), StarCounts { full: 0, half: 0, empty: 5 });
    }

    #[test]
    fn test_always_five_stars() {
        for tenths in 0..=50 {
            let counts = StarCounts::from_rating(tenths as f64 / 10.0);
            assert_eq!(counts.full + counts.half + counts.empty, STAR_COUNT);
            assert_eq!(counts.stars().len(), STAR_COUNT);
        }
    }
}
