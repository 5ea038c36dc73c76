use chrono::{DateTime, TimeZone};
use tokio::sync::Mutex;
use tracing::{error, info};

use footle_core::{DailySelector, SelectionError};
use footle_persistence::SnapshotStore;
use footle_types::{CandidateSummary, RosterSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("No roster snapshot named '{name}' was found")]
    SnapshotMissing { name: String },
    #[error(transparent)]
    DegenerateRoster(#[from] SelectionError),
    #[error("Failed to load roster snapshot: {0}")]
    Store(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy)]
struct DayState {
    day_number: i64,
    index: usize,
    found_count: u32,
}

/// Today's secret as served to one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySecret {
    pub day_number: i64,
    pub index: usize,
    pub candidate: CandidateSummary,
}

/// The loaded roster plus the per-day state shared by every request
pub struct DailyGame {
    roster: RosterSnapshot,
    selector: DailySelector,
    day: Mutex<DayState>,
}

impl DailyGame {
    pub fn new<Tz: TimeZone>(
        roster: RosterSnapshot,
        selector: DailySelector,
        now: &DateTime<Tz>,
    ) -> Result<Self, SelectionError> {
        let index = selector.select_index(now, roster.len())?;
        let day_number = selector.day_number(now);

        if let Some(secret) = roster.get(index) {
            info!(
                "Day {} secret is '{}' (index {})",
                day_number, secret.identifier, index
            );
        }

        Ok(Self {
            roster,
            selector,
            day: Mutex::new(DayState {
                day_number,
                index,
                found_count: 0,
            }),
        })
    }

    pub fn roster(&self) -> &RosterSnapshot {
        &self.roster
    }

    /// Today's secret, rolling the day over first if needed
    pub async fn current_secret<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DailySecret {
        let mut day = self.day.lock().await;
        self.roll_over(&mut day, now);

        DailySecret {
            day_number: day.day_number,
            index: day.index,
            candidate: self.roster.candidates[day.index].clone(),
        }
    }

    /// Credit a win scored against `day_number`. Wins against a day that
    /// has already rolled over are not counted.
    pub async fn record_win<Tz: TimeZone>(&self, day_number: i64, now: &DateTime<Tz>) -> bool {
        let mut day = self.day.lock().await;
        self.roll_over(&mut day, now);

        if day.day_number != day_number {
            info!(
                "Ignoring win for day {} scored after rollover to day {}",
                day_number, day.day_number
            );
            return false;
        }

        day.found_count += 1;
        true
    }

    pub async fn found_today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> u32 {
        let mut day = self.day.lock().await;
        self.roll_over(&mut day, now);
        day.found_count
    }

    fn roll_over<Tz: TimeZone>(&self, day: &mut DayState, now: &DateTime<Tz>) {
        let day_number = self.selector.day_number(now);
        if day_number == day.day_number {
            return;
        }

        // Roster emptiness is rejected in new()
        let Ok(index) = self.selector.select_index(now, self.roster.len()) else {
            error!("Cannot roll over to day {} with an empty roster", day_number);
            return;
        };
        info!(
            "Day {} secret is '{}' (index {}), {} found on day {}",
            day_number,
            self.roster.candidates[index].identifier,
            index,
            day.found_count,
            day.day_number
        );

        *day = DayState {
            day_number,
            index,
            found_count: 0,
        };
    }
}

/// Load the named roster snapshot and set up the daily game on top of it
pub async fn load_daily_game<Tz: TimeZone>(
    store: &dyn SnapshotStore,
    name: &str,
    selector: DailySelector,
    now: &DateTime<Tz>,
) -> Result<DailyGame, StartupError> {
    let roster = store
        .load(name)
        .await?
        .ok_or_else(|| StartupError::SnapshotMissing {
            name: name.to_string(),
        })?;

    info!(
        "Loaded roster snapshot '{}' with {} candidates built at {}",
        name,
        roster.len(),
        roster.built_at
    );

    Ok(DailyGame::new(roster, selector, now)?)
}
