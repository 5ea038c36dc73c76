use chrono::{DateTime, TimeZone};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// 2023-04-30T00:00:00+02:00, midnight Paris time on the game's first day
pub const GAME_EPOCH_UNIX_SECONDS: i64 = 1_682_805_600;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Cannot select a daily secret from an empty roster")]
    DegenerateRoster,
}

/// Maps an instant onto today's roster index.
///
/// The index moves forward by one every 24 hours counted from a fixed
/// epoch and wraps around the roster. Days are counted with floor
/// division, so instants before the epoch still map into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySelector {
    epoch_seconds: i64,
}

impl DailySelector {
    pub fn new<Tz: TimeZone>(epoch: &DateTime<Tz>) -> Self {
        Self {
            epoch_seconds: epoch.timestamp(),
        }
    }

    pub fn from_unix_seconds(epoch_seconds: i64) -> Self {
        Self { epoch_seconds }
    }

    /// Whole days elapsed since the epoch
    pub fn day_number<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> i64 {
        (now.timestamp() - self.epoch_seconds).div_euclid(SECONDS_PER_DAY)
    }

    pub fn select_index<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        roster_size: usize,
    ) -> Result<usize, SelectionError> {
        if roster_size == 0 {
            return Err(SelectionError::DegenerateRoster);
        }

        let day = self.day_number(now);
        Ok(day.rem_euclid(roster_size as i64) as usize)
    }
}

impl Default for DailySelector {
    fn default() -> Self {
        Self::from_unix_seconds(GAME_EPOCH_UNIX_SECONDS)
    }
}
