use crate::id::*;

/// A single star rating in the range 1..=5.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// The zero-based histogram bucket of this rating.
    ///
    /// Only valid for valid rating values.
    pub fn star_index(self) -> usize {
        debug_assert!(self.is_valid());
        (self.0 - 1) as usize
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Average of visible ratings, rounded to 2 decimal places.
///
/// 0.0 denotes the absence of any visible rating.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(i8::from(val));
        self.cnt += 1;
    }

    pub fn build(self) -> AvgRatingValue {
        if self.cnt > 0 {
            let avg = self.acc as f64 / self.cnt as f64;
            // Round half away from zero to 2 decimal places
            AvgRatingValue::from((avg * 100.0).round() / 100.0).clamp()
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

/// Counts of visible reviews per star value 1..=5.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StarHistogram([u64; 5]);

impl StarHistogram {
    pub fn add(&mut self, val: RatingValue) {
        self.0[val.star_index()] += 1;
    }

    pub fn count(&self, val: RatingValue) -> u64 {
        self.0[val.star_index()]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Pairs of (star value, count), ascending by star value.
    pub fn counts(&self) -> impl Iterator<Item = (RatingValue, u64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, cnt)| (RatingValue::new(i as i8 + 1), *cnt))
    }

    pub fn from_counts(counts: [u64; 5]) -> Self {
        Self(counts)
    }

    pub fn into_counts(self) -> [u64; 5] {
        self.0
    }
}

/// The derived aggregate over a provider's currently visible reviews.
///
/// Always a pure function of the review set, never patched incrementally.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub provider_id  : Id,
    pub average      : AvgRatingValue,
    pub review_count : u64,
    pub histogram    : StarHistogram,
}

impl RatingSummary {
    pub fn empty(provider_id: Id) -> Self {
        Self {
            provider_id,
            average: Default::default(),
            review_count: 0,
            histogram: Default::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RatingSummaryBuilder {
    provider_id: Id,
    avg: AvgRatingValueBuilder,
    histogram: StarHistogram,
}

impl RatingSummaryBuilder {
    pub fn new(provider_id: Id) -> Self {
        Self {
            provider_id,
            avg: Default::default(),
            histogram: Default::default(),
        }
    }

    pub fn add(&mut self, val: RatingValue) {
        self.avg += val;
        self.histogram.add(val);
    }

    pub fn build(self) -> RatingSummary {
        let Self {
            provider_id,
            avg,
            histogram,
        } = self;
        RatingSummary {
            provider_id,
            average: avg.build(),
            review_count: histogram.total(),
            histogram,
        }
    }
}
