//! Raw sensor units to display units.

const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;
const FAHRENHEIT_OFFSET: f64 = 32.0;
const FEET_PER_METER: f64 = 3.2808;
const MILLI_PASCALS_PER_INCH_HG: f64 = 3_386_389.0;

/// Whole degrees Celsius from milli-degrees.
///
/// The division truncates toward zero before the result is widened, so
/// 3_999 becomes 3.0. Reports depend on this.
pub fn celsius_from_milli(milli_celsius: i32) -> f64 {
    f64::from(milli_celsius / 1000)
}

pub fn fahrenheit_from_celsius(celsius: f64) -> f64 {
    celsius * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_OFFSET
}

pub fn feet_from_meters(meters: i32) -> f64 {
    f64::from(meters) * FEET_PER_METER
}

pub fn percent_from_hundredths(hundredths: i32) -> f64 {
    f64::from(hundredths) / 100.0
}

pub fn inches_hg_from_milli_pascals(milli_pascals: i32) -> f64 {
    f64::from(milli_pascals) / MILLI_PASCALS_PER_INCH_HG
}
