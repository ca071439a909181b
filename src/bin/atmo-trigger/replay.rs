use std::io::Read;

use anyhow::{Context as _, Result, bail};
use atmo::atmo::{Driver, Quantity};
use csv::Reader;
use thiserror::Error;

const TEMPERATURE_INDEX: usize = 0;
const PRESSURE_INDEX: usize = 1;
const HUMIDITY_INDEX: usize = 2;
const ALTITUDE_INDEX: usize = 3;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("no sample started yet")]
    NotStarted,

    #[error("recording exhausted after {rows} rows")]
    Exhausted { rows: usize },

    #[error("no {quantity} recorded in row {row}")]
    Missing { quantity: Quantity, row: usize },
}

/// Raw readings of one recorded sample; `None` replays as a failed read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sample {
    temperature: Option<i32>,
    pressure: Option<i32>,
    humidity: Option<i32>,
    altitude: Option<i32>,
}

/// Driver replaying a CSV recording of raw readings.
///
/// Columns are milli-degrees Celsius, milli-Pascals, hundredths of a percent and meters,
/// after a header row. Each temperature read moves on to the next sample, so one refresh
/// cycle consumes one row.
#[derive(Debug)]
pub struct ReplayDriver {
    samples: Vec<Sample>,
    next: usize,
}

impl ReplayDriver {
    pub fn new(reader: impl Read) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let mut samples = Vec::new();

        for (i, row) in reader.records().enumerate() {
            let row = row.with_context(|| format!("failed to read CSV row {}", i + 1))?;
            if row.len() < 4 {
                bail!(
                    "CSV row {} too short: expected 4 columns, got {}",
                    i + 1,
                    row.len()
                );
            }

            let cell = |index: usize| -> Result<Option<i32>> {
                let raw = row[index].trim();
                if raw.is_empty() {
                    return Ok(None);
                }
                raw.parse().map(Some).with_context(|| {
                    format!("failed to parse CSV row {} column {index}: {raw}", i + 1)
                })
            };

            samples.push(Sample {
                temperature: cell(TEMPERATURE_INDEX)?,
                pressure: cell(PRESSURE_INDEX)?,
                humidity: cell(HUMIDITY_INDEX)?,
                altitude: cell(ALTITUDE_INDEX)?,
            });
        }

        Ok(Self { samples, next: 0 })
    }

    fn current(&self) -> Result<(usize, &Sample), ReplayError> {
        let row = self.next.checked_sub(1).ok_or(ReplayError::NotStarted)?;
        self.samples
            .get(row)
            .map(|sample| (row + 1, sample))
            .ok_or(ReplayError::Exhausted {
                rows: self.samples.len(),
            })
    }

    fn read(&self, quantity: Quantity) -> Result<i32, ReplayError> {
        let (row, sample) = self.current()?;
        let value = match quantity {
            Quantity::Temperature => sample.temperature,
            Quantity::Pressure => sample.pressure,
            Quantity::Humidity => sample.humidity,
            Quantity::Altitude => sample.altitude,
        };

        value.ok_or(ReplayError::Missing { quantity, row })
    }
}

impl Driver for ReplayDriver {
    type Error = ReplayError;

    fn connected(&self) -> bool {
        self.next < self.samples.len()
    }

    fn read_temperature(&mut self) -> Result<i32, Self::Error> {
        if self.next < self.samples.len() {
            self.next += 1;
        } else {
            return Err(ReplayError::Exhausted {
                rows: self.samples.len(),
            });
        }
        self.read(Quantity::Temperature)
    }

    fn read_pressure(&mut self) -> Result<i32, Self::Error> {
        self.read(Quantity::Pressure)
    }

    fn read_humidity(&mut self) -> Result<i32, Self::Error> {
        self.read(Quantity::Humidity)
    }

    fn read_altitude(&mut self) -> Result<i32, Self::Error> {
        self.read(Quantity::Altitude)
    }
}
