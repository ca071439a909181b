use thiserror::Error;

use crate::atmo::{Driver, Quantity};

#[derive(Debug, Error)]
#[error("scripted {0} failure")]
pub struct ScriptedError(Quantity);

/// In-memory driver returning fixed values, optionally failing one quantity.
#[derive(Debug)]
pub struct ScriptedDriver {
    values: [i32; 4],
    failing: Option<Quantity>,
    connected: bool,
    reads: Vec<Quantity>,
}

impl ScriptedDriver {
    /// Values in refresh order: temperature, pressure, humidity, altitude.
    pub fn new(values: [i32; 4]) -> Self {
        Self {
            values,
            failing: None,
            connected: true,
            reads: Vec::new(),
        }
    }

    pub fn fail(&mut self, quantity: Quantity) {
        self.failing = Some(quantity);
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn reads(&self) -> &[Quantity] {
        &self.reads
    }

    fn read(&mut self, quantity: Quantity, index: usize) -> Result<i32, ScriptedError> {
        self.reads.push(quantity);
        if self.failing == Some(quantity) {
            return Err(ScriptedError(quantity));
        }

        Ok(self.values[index])
    }
}

impl Driver for ScriptedDriver {
    type Error = ScriptedError;

    fn connected(&self) -> bool {
        self.connected
    }

    fn read_temperature(&mut self) -> Result<i32, Self::Error> {
        self.read(Quantity::Temperature, 0)
    }

    fn read_pressure(&mut self) -> Result<i32, Self::Error> {
        self.read(Quantity::Pressure, 1)
    }

    fn read_humidity(&mut self) -> Result<i32, Self::Error> {
        self.read(Quantity::Humidity, 2)
    }

    fn read_altitude(&mut self) -> Result<i32, Self::Error> {
        self.read(Quantity::Altitude, 3)
    }
}
