use thiserror::Error;

/// A rating on the fixed scale from 1 to 5.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(i8);

#[derive(Debug, Error)]
#[error("rating must be 1..5")]
pub struct RatingValueOutOfRange;

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub const fn into_inner(self) -> i8 {
        self.0
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueOutOfRange;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if from < i64::from(Self::min().0) || from > i64::from(Self::max().0) {
            return Err(RatingValueOutOfRange);
        }
        Ok(Self(from as i8))
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}
