//! Rating - 评分值对象与平均分聚合
//!
//! 平均分是派生值，每次读取时由当前评论集合重新计算，从不持久化。
//! 详情页和列表页都经过 [`RatingSummary::average`]，这是唯一的计算入口。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 评分下限
pub const MIN_RATING: u8 = 1;
/// 评分上限
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("Rating must be an integer between 1 and 5")]
    OutOfRange,

    #[error("Rating must be an integer between 1 and 5")]
    NotAnInteger,
}

/// 评分（1-5 的整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, RatingError> {
        if value < MIN_RATING as i64 || value > MAX_RATING as i64 {
            return Err(RatingError::OutOfRange);
        }
        Ok(Self(value as u8))
    }

    /// 解析 JSON 中的评分
    ///
    /// 接受整数和整数字符串（如 `"4"`），拒绝小数、布尔值等
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RatingError> {
        match value {
            serde_json::Value::Number(n) => {
                let v = n.as_i64().ok_or(RatingError::NotAnInteger)?;
                Self::new(v)
            }
            serde_json::Value::String(s) => {
                let v = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| RatingError::NotAnInteger)?;
                Self::new(v)
            }
            _ => Err(RatingError::NotAnInteger),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一本书的评分汇总
///
/// 可以由评分迭代器构建（详情页），也可以由存储层的 SUM/COUNT 构建（列表页）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSummary {
    total: u64,
    count: u64,
}

impl RatingSummary {
    pub fn new(total: u64, count: u64) -> Self {
        Self { total, count }
    }

    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = Rating>,
    {
        ratings
            .into_iter()
            .fold(Self::default(), |acc, r| Self {
                total: acc.total + r.value() as u64,
                count: acc.count + 1,
            })
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// 平均分，保留一位小数；无评论时为 0
    ///
    /// 用整数运算做四舍五入（.x5 向上），结果与 `round(sum / count, 1)` 精确一致
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let tenths = (20 * self.total + self.count) / (2 * self.count);
        tenths as f64 / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(values: &[i64]) -> Vec<Rating> {
        values.iter().map(|v| Rating::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_empty_reviews_average_is_zero() {
        let summary = RatingSummary::from_ratings(Vec::new());
        assert_eq!(summary.count(), 0);
        assert_eq!(summary.average(), 0.0);
    }

    #[test]
    fn test_average_of_four_and_five() {
        let summary = RatingSummary::from_ratings(ratings(&[4, 5]));
        assert_eq!(summary.average(), 4.5);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        // 4 + 4 + 5 = 13 / 3 = 4.333...
        assert_eq!(RatingSummary::from_ratings(ratings(&[4, 4, 5])).average(), 4.3);
        // 5 + 5 + 4 = 14 / 3 = 4.666...
        assert_eq!(RatingSummary::from_ratings(ratings(&[5, 5, 4])).average(), 4.7);
        // 17 / 4 = 4.25，半数向上
        assert_eq!(RatingSummary::from_ratings(ratings(&[4, 4, 4, 5])).average(), 4.3);
        assert_eq!(RatingSummary::from_ratings(ratings(&[1])).average(), 1.0);
    }

    #[test]
    fn test_average_matches_float_rounding_for_small_sets() {
        for count in 1..=12u64 {
            for total in count..=count * 5 {
                let expected = ((total as f64 / count as f64) * 10.0).round() / 10.0;
                let actual = RatingSummary::new(total, count).average();
                assert!(
                    (actual - expected).abs() < 1e-9,
                    "total={} count={} actual={} expected={}",
                    total,
                    count,
                    actual,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_summary_from_store_equals_summary_from_ratings() {
        let from_ratings = RatingSummary::from_ratings(ratings(&[3, 4, 5, 2]));
        assert_eq!(from_ratings, RatingSummary::new(14, 4));
        assert_eq!(from_ratings.average(), 3.5);
    }

    #[test]
    fn test_rating_range() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange));
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange));
        assert_eq!(Rating::new(-3), Err(RatingError::OutOfRange));
    }

    #[test]
    fn test_rating_from_json() {
        use serde_json::json;

        assert_eq!(Rating::from_json(&json!(4)).unwrap().value(), 4);
        assert_eq!(Rating::from_json(&json!("5")).unwrap().value(), 5);
        assert_eq!(Rating::from_json(&json!(4.5)), Err(RatingError::NotAnInteger));
        assert_eq!(Rating::from_json(&json!("4.5")), Err(RatingError::NotAnInteger));
        assert_eq!(Rating::from_json(&json!("abc")), Err(RatingError::NotAnInteger));
        assert_eq!(Rating::from_json(&json!(true)), Err(RatingError::NotAnInteger));
        assert_eq!(Rating::from_json(&json!(null)), Err(RatingError::NotAnInteger));
        assert_eq!(Rating::from_json(&json!(0)), Err(RatingError::OutOfRange));
        assert_eq!(Rating::from_json(&json!(6)), Err(RatingError::OutOfRange));
    }
}
