use time::Duration;

///
/// Lead time window a reminder is created for.
/// Upper bounds are inclusive.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderBucket {
    ThirtyMinutes,
    TwoHours,
    OneDay,
}

impl ReminderBucket {
    /// Ordered from the tightest window
    pub const ALL: [Self; 3] = [Self::ThirtyMinutes, Self::TwoHours, Self::OneDay];

    pub fn minutes(self) -> i64 {
        match self {
            Self::ThirtyMinutes => 30,
            Self::TwoHours => 120,
            Self::OneDay => 1440,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ThirtyMinutes => "in 30 minutes",
            Self::TwoHours => "in about 2 hours",
            Self::OneDay => "in less than 24 hours",
        }
    }

    ///
    /// Finds the tightest bucket containing the lead time.
    ///
    /// ### Returns
    /// None when start already passed or is more than a day away
    ///
    pub fn for_lead_time(lead_time: Duration) -> Option<Self> {
        if lead_time <= Duration::ZERO {
            return None;
        }

        Self::ALL
            .into_iter()
            .find(|bucket| lead_time <= Duration::minutes(bucket.minutes()))
    }
}
