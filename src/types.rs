//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// 边权（整数，可为负）
pub type Weight = i64;

/// 最短路距离
///
/// 所有有限值都小于 `Infinite`，`Infinite` 加任何权值仍为 `Infinite`。
/// JSON 中有限值序列化为整数，不可达序列化为 `null`。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "Option<Weight>", into = "Option<Weight>")]
pub enum Distance {
    Finite(Weight),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// 有限距离的值
    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_add(b)),
            _ => Distance::Infinite,
        }
    }
}

impl From<Option<Weight>> for Distance {
    fn from(v: Option<Weight>) -> Self {
        v.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl From<Distance> for Option<Weight> {
    fn from(d: Distance) -> Self {
        d.value()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}
