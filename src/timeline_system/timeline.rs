use chrono::{DateTime, Duration, SecondsFormat, Utc};
use tracing::info;

use crate::clock::mars_clock::MarsClock;
use crate::clock::planetary_time::PlanetaryTimeResult;
use crate::errors::ValidationError;

/// A run of conversions sampled at a fixed cadence, as a widget timeline or a
/// live clock face would request them.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    pub entries: Vec<PlanetaryTimeResult>,
    sol_rollovers: Vec<(i64, DateTime<Utc>)>,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Samples `count` instants starting at `start`, `step` apart.
    ///
    /// Fails on the first sample that leaves the conversion window; nothing
    /// is returned for a partially valid run.
    pub fn generate(
        clock: &MarsClock,
        start: DateTime<Utc>,
        step: Duration,
        count: usize,
        longitude_east_degrees: f64,
    ) -> Result<Self, ValidationError> {
        let mut timeline = Timeline::new();
        let mut instant = start;

        for index in 0..count {
            if index > 0 {
                instant = instant.checked_add_signed(step).ok_or_else(|| {
                    let saturated = if step < Duration::zero() {
                        DateTime::<Utc>::MIN_UTC
                    } else {
                        DateTime::<Utc>::MAX_UTC
                    };
                    ValidationError::InstantOutOfRange { instant: saturated }
                })?;
            }
            timeline.collect(clock.calculate(instant, longitude_east_degrees)?);
        }

        info!(
            samples = timeline.entries.len(),
            rollovers = timeline.sol_rollovers.len(),
            "generated Mars time timeline"
        );
        Ok(timeline)
    }

    /// Appends one result, recording a rollover whenever the sol number changes.
    pub fn collect(&mut self, result: PlanetaryTimeResult) {
        if let Some(last) = self.entries.last() {
            if last.sol_number != result.sol_number {
                self.sol_rollovers
                    .push((result.sol_number, result.source_instant));
            }
        }
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_sol(&self) -> Option<i64> {
        self.entries.first().map(|entry| entry.sol_number)
    }

    pub fn last_sol(&self) -> Option<i64> {
        self.entries.last().map(|entry| entry.sol_number)
    }

    /// Sols entered after the first sample, with the first sampled instant in each.
    pub fn sol_rollovers(&self) -> &[(i64, DateTime<Utc>)] {
        &self.sol_rollovers
    }

    fn format_duration(elapsed_seconds: i64) -> String {
        let hours = elapsed_seconds / 3600;
        let minutes = (elapsed_seconds % 3600) / 60;
        let seconds = elapsed_seconds % 60;
        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    pub fn summary(&self) -> String {
        let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) else {
            return "--- Timeline Summary ---\nNo samples".to_string();
        };

        let span = (last.source_instant - first.source_instant).num_seconds().abs();
        let mut summary = format!(
            "--- Timeline Summary ---\n\
             Samples: {}\n\
             Earth span: {}\n\
             Sols: {} to {}\n\
             MTC: {} to {}\n\
             LMST: {} to {}",
            self.entries.len(),
            Self::format_duration(span),
            first.sol_number,
            last.sol_number,
            first.coordinated_time,
            last.coordinated_time,
            first.local_time,
            last.local_time
        );

        if !self.sol_rollovers.is_empty() {
            summary.push_str("\n--- Sol Rollovers ---");
            for (sol, instant) in &self.sol_rollovers {
                summary.push_str(&format!(
                    "\nSol {} first sampled at {}",
                    sol,
                    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
                ));
            }
        }
        summary
    }
}
