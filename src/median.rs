//! Median computation policies for [`AugmentedIntervalTree`](crate::AugmentedIntervalTree).
//!
//! A policy computes a node's split point from the aggregate bounds of its
//! partition. Every policy here satisfies the tree's contract
//! `min <= median(min, max) <= max`, including at the extremes of the
//! underlying type.
//!
//! Floating-point policies work on [`ordered_float::OrderedFloat`] because
//! the tree needs a total order over its points (behind the `ordered-float`
//! feature). Date/time policies cover [`chrono`] types (behind the `chrono`
//! feature).

/// Computes the `i16` median between `min` and `max`.
#[inline]
#[must_use]
pub fn i16_median(min: &i16, max: &i16) -> i16 {
    // widen so min + max cannot overflow
    ((i32::from(*min) + i32::from(*max)) / 2) as i16
}

/// Computes the `i32` median between `min` and `max`.
#[inline]
#[must_use]
pub fn i32_median(min: &i32, max: &i32) -> i32 {
    ((i64::from(*min) + i64::from(*max)) / 2) as i32
}

/// Computes the `i64` median between `min` and `max`.
#[inline]
#[must_use]
pub fn i64_median(min: &i64, max: &i64) -> i64 {
    ((i128::from(*min) + i128::from(*max)) / 2) as i64
}

/// Computes the `u32` median between `min` and `max`.
#[inline]
#[must_use]
pub fn u32_median(min: &u32, max: &u32) -> u32 {
    min + (max - min) / 2
}

/// Computes the `u64` median between `min` and `max`.
#[inline]
#[must_use]
pub fn u64_median(min: &u64, max: &u64) -> u64 {
    min + (max - min) / 2
}

/// Computes the `usize` median between `min` and `max`.
#[inline]
#[must_use]
pub fn usize_median(min: &usize, max: &usize) -> usize {
    min + (max - min) / 2
}

/// Computes the `OrderedFloat<f32>` median between `min` and `max`.
#[cfg(feature = "ordered-float")]
#[inline]
#[must_use]
pub fn f32_median(
    min: &ordered_float::OrderedFloat<f32>,
    max: &ordered_float::OrderedFloat<f32>,
) -> ordered_float::OrderedFloat<f32> {
    ordered_float::OrderedFloat((min.0 + max.0) / 2.0)
}

/// Computes the `OrderedFloat<f64>` median between `min` and `max`.
#[cfg(feature = "ordered-float")]
#[inline]
#[must_use]
pub fn f64_median(
    min: &ordered_float::OrderedFloat<f64>,
    max: &ordered_float::OrderedFloat<f64>,
) -> ordered_float::OrderedFloat<f64> {
    ordered_float::OrderedFloat((min.0 + max.0) / 2.0)
}

/// Computes the `DateTime<Utc>` median between `min` and `max` by adding half
/// the span to `min`, which cannot leave the representable range.
#[cfg(feature = "chrono")]
#[inline]
#[must_use]
pub fn datetime_median(
    min: &chrono::DateTime<chrono::Utc>,
    max: &chrono::DateTime<chrono::Utc>,
) -> chrono::DateTime<chrono::Utc> {
    *min + (*max - *min) / 2
}

/// Computes the `NaiveDateTime` median between `min` and `max`.
#[cfg(feature = "chrono")]
#[inline]
#[must_use]
pub fn naive_datetime_median(
    min: &chrono::NaiveDateTime,
    max: &chrono::NaiveDateTime,
) -> chrono::NaiveDateTime {
    *min + (*max - *min) / 2
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integer_medians_stay_within_bounds_at_extremes() {
        let cases = [
            (i32::MIN, i32::MAX),
            (i32::MIN, i32::MIN),
            (i32::MAX, i32::MAX),
            (-7, 4),
            (3, 3),
        ];
        for (min, max) in cases {
            let median = i32_median(&min, &max);
            assert!(min <= median && median <= max, "median of ({min}, {max})");
        }

        assert_eq!(i64_median(&i64::MIN, &i64::MAX), 0);
        assert_eq!(u64_median(&0, &u64::MAX), u64::MAX / 2);
        assert_eq!(i16_median(&i16::MIN, &i16::MAX), 0);
    }

    #[test]
    fn integer_median_averages() {
        assert_eq!(i32_median(&0, &10), 5);
        assert_eq!(i32_median(&0, &11), 5);
        assert_eq!(i64_median(&-10, &-4), -7);
        assert_eq!(u32_median(&4, &9), 6);
    }

    #[cfg(feature = "ordered-float")]
    #[test]
    fn float_median_is_exact_midpoint() {
        use ordered_float::OrderedFloat;
        assert_eq!(
            f64_median(&OrderedFloat(1.0), &OrderedFloat(2.0)),
            OrderedFloat(1.5)
        );
        assert_eq!(
            f32_median(&OrderedFloat(-3.0), &OrderedFloat(3.0)),
            OrderedFloat(0.0)
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn datetime_median_is_half_span() {
        use chrono::{TimeZone, Utc};
        let min = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2020, 1, 3, 0, 0, 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(datetime_median(&min, &max), expected);
        assert_eq!(datetime_median(&min, &min), min);
    }
}
