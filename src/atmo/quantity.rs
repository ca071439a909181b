use std::fmt;
use std::str::FromStr;

use crate::atmo::AtmoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Pressure,
    Humidity,
    Altitude,
}

impl Quantity {
    /// Refresh and report order.
    pub const ALL: [Quantity; 4] = [
        Quantity::Temperature,
        Quantity::Pressure,
        Quantity::Humidity,
        Quantity::Altitude,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Temperature => "temperature",
            Quantity::Pressure => "pressure",
            Quantity::Humidity => "humidity",
            Quantity::Altitude => "altitude",
        }
    }

    /// Human name printed at the start of a report line.
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::Pressure => "Barometer",
            Quantity::Humidity => "Humidity",
            Quantity::Altitude => "Altitude",
        }
    }

    /// Display unit appended to the converted value.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Temperature => "°F",
            Quantity::Pressure => "\" Hg",
            Quantity::Humidity => "%",
            Quantity::Altitude => "ft",
        }
    }

    pub(crate) fn short_label(&self) -> &'static str {
        match self {
            Quantity::Temperature => "Temp",
            Quantity::Pressure => "Baro",
            Quantity::Humidity => "Humi",
            Quantity::Altitude => "Alt",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quantity {
    type Err = AtmoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "temp" | "temperature" => Ok(Quantity::Temperature),
            "pres" | "pressure" | "baro" | "barometer" => Ok(Quantity::Pressure),
            "hum" | "humi" | "humidity" => Ok(Quantity::Humidity),
            "alt" | "alti" | "altitude" => Ok(Quantity::Altitude),
            _ => Err(AtmoError::UnrecognizedAction {
                action: s.to_string(),
            }),
        }
    }
}
