use std::error::Error as StdError;

/// Blocking access to a combined temperature, pressure, humidity and altitude sensor.
///
/// Raw units: milli-degrees Celsius, milli-Pascals, hundredths of a percent and meters.
/// The adapter borrows the driver and never connects or disconnects it.
pub trait Driver {
    type Error: StdError + Send + Sync + 'static;

    fn connected(&self) -> bool;

    fn read_temperature(&mut self) -> Result<i32, Self::Error>;

    fn read_pressure(&mut self) -> Result<i32, Self::Error>;

    fn read_humidity(&mut self) -> Result<i32, Self::Error>;

    fn read_altitude(&mut self) -> Result<i32, Self::Error>;
}
