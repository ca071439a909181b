use chrono::Utc;
use chrono_tz::Tz;
use tracing::trace;

use crate::atmo::{
    AtmoError, Driver, MeasurementState, Quantity, celsius_from_milli, fahrenheit_from_celsius,
    feet_from_meters, inches_hg_from_milli_pascals, percent_from_hundredths,
};

/// Cached readings of one environmental sensor, addressed by `name`.
#[derive(Debug)]
pub struct Atmo<'a, D> {
    driver: &'a mut D,

    name: String,

    timezone: Tz,

    temperature: MeasurementState,

    pressure: MeasurementState,

    humidity: MeasurementState,

    altitude: MeasurementState,
}

impl<'a, D: Driver> Atmo<'a, D> {
    /// Creates an adapter with every state zeroed at the current time.
    pub fn new(driver: &'a mut D, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            driver,
            name: name.into(),
            timezone: Tz::UTC,
            temperature: MeasurementState::new(Quantity::Temperature.label(), now),
            pressure: MeasurementState::new(Quantity::Pressure.label(), now),
            humidity: MeasurementState::new(Quantity::Humidity.label(), now),
            altitude: MeasurementState::new(Quantity::Altitude.label(), now),
        }
    }

    /// Timezone used for the `since` timestamps of rendered reports.
    ///
    /// Defaults to UTC, not the host's local time.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn state(&self, quantity: Quantity) -> &MeasurementState {
        match quantity {
            Quantity::Temperature => &self.temperature,
            Quantity::Pressure => &self.pressure,
            Quantity::Humidity => &self.humidity,
            Quantity::Altitude => &self.altitude,
        }
    }

    fn state_mut(&mut self, quantity: Quantity) -> &mut MeasurementState {
        match quantity {
            Quantity::Temperature => &mut self.temperature,
            Quantity::Pressure => &mut self.pressure,
            Quantity::Humidity => &mut self.humidity,
            Quantity::Altitude => &mut self.altitude,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.driver.connected()
    }

    pub fn reset_all(&mut self) {
        for quantity in Quantity::ALL {
            self.state_mut(quantity).reset();
        }
    }

    /// Reads one quantity from the driver and caches it.
    ///
    /// On failure the cached value and timestamp are left as they were.
    pub fn refresh(&mut self, quantity: Quantity) -> Result<i32, AtmoError> {
        let read = match quantity {
            Quantity::Temperature => self.driver.read_temperature(),
            Quantity::Pressure => self.driver.read_pressure(),
            Quantity::Humidity => self.driver.read_humidity(),
            Quantity::Altitude => self.driver.read_altitude(),
        };
        let value = read.map_err(|e| AtmoError::read(quantity, e))?;

        self.state_mut(quantity).update(value);
        trace!(adapter = %self.name, %quantity, value, "refreshed reading");

        Ok(value)
    }

    /// Milli-degrees Celsius.
    pub fn refresh_temperature(&mut self) -> Result<i32, AtmoError> {
        self.refresh(Quantity::Temperature)
    }

    /// Milli-Pascals.
    pub fn refresh_pressure(&mut self) -> Result<i32, AtmoError> {
        self.refresh(Quantity::Pressure)
    }

    /// Hundredths of a percent.
    pub fn refresh_humidity(&mut self) -> Result<i32, AtmoError> {
        self.refresh(Quantity::Humidity)
    }

    /// Meters.
    pub fn refresh_altitude(&mut self) -> Result<i32, AtmoError> {
        self.refresh(Quantity::Altitude)
    }

    /// Refreshes every quantity in report order, stopping at the first failed read.
    ///
    /// Quantities after the failing one keep their previous values.
    pub fn refresh_all(&mut self) -> Result<(), AtmoError> {
        for quantity in Quantity::ALL {
            self.refresh(quantity)?;
        }

        Ok(())
    }

    pub fn celsius(&self) -> f64 {
        celsius_from_milli(self.temperature.value())
    }

    pub fn fahrenheit(&self) -> f64 {
        fahrenheit_from_celsius(self.celsius())
    }

    pub fn inches_hg(&self) -> f64 {
        inches_hg_from_milli_pascals(self.pressure.value())
    }

    pub fn humidity_percent(&self) -> f64 {
        percent_from_hundredths(self.humidity.value())
    }

    pub fn feet_elevation(&self) -> f64 {
        feet_from_meters(self.altitude.value())
    }

    /// Cached value of `quantity` in its display unit.
    pub fn converted(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Temperature => self.fahrenheit(),
            Quantity::Pressure => self.inches_hg(),
            Quantity::Humidity => self.humidity_percent(),
            Quantity::Altitude => self.feet_elevation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmo::testing::ScriptedDriver;

    #[test]
    fn new_adapter_is_zeroed() {
        let mut driver = ScriptedDriver::new([21_000, 101_325_000, 4_500, 40]);
        let before = Utc::now();
        let atmo = Atmo::new(&mut driver, "porch");

        assert_eq!(atmo.name(), "porch");
        assert_eq!(atmo.timezone(), Tz::UTC);
        for quantity in Quantity::ALL {
            let state = atmo.state(quantity);
            assert_eq!(state.value(), 0);
            assert_eq!(state.label(), quantity.label());
            assert!(state.since() >= before);
        }
    }

    #[test]
    fn refresh_all_stores_driver_values() {
        let mut driver = ScriptedDriver::new([21_000, 101_325_000, 4_500, 40]);
        let mut atmo = Atmo::new(&mut driver, "porch");

        let started = Utc::now();
        atmo.refresh_all().unwrap();

        assert_eq!(atmo.state(Quantity::Temperature).value(), 21_000);
        assert_eq!(atmo.state(Quantity::Pressure).value(), 101_325_000);
        assert_eq!(atmo.state(Quantity::Humidity).value(), 4_500);
        assert_eq!(atmo.state(Quantity::Altitude).value(), 40);
        for quantity in Quantity::ALL {
            assert!(atmo.state(quantity).since() >= started);
        }
    }

    #[test]
    fn refresh_all_stops_at_first_failure() {
        let mut driver = ScriptedDriver::new([21_000, 101_325_000, 4_500, 40]);
        driver.fail(Quantity::Humidity);
        let mut atmo = Atmo::new(&mut driver, "porch");
        let humidity_before = atmo.state(Quantity::Humidity).clone();
        let altitude_before = atmo.state(Quantity::Altitude).clone();

        let err = atmo.refresh_all().unwrap_err();

        assert!(matches!(
            err,
            AtmoError::Read {
                quantity: Quantity::Humidity,
                ..
            }
        ));
        assert_eq!(atmo.state(Quantity::Temperature).value(), 21_000);
        assert_eq!(atmo.state(Quantity::Pressure).value(), 101_325_000);
        assert_eq!(atmo.state(Quantity::Humidity), &humidity_before);
        assert_eq!(atmo.state(Quantity::Altitude), &altitude_before);
        drop(atmo);
        assert_eq!(
            driver.reads(),
            &[Quantity::Temperature, Quantity::Pressure, Quantity::Humidity]
        );
    }

    #[test]
    fn failed_read_keeps_previous_value() {
        let mut driver = ScriptedDriver::new([21_000, 0, 0, 0]);
        let mut atmo = Atmo::new(&mut driver, "porch");
        assert_eq!(atmo.refresh_temperature().unwrap(), 21_000);
        let cached = atmo.state(Quantity::Temperature).clone();

        atmo.driver.fail(Quantity::Temperature);
        assert!(atmo.refresh_temperature().is_err());

        assert_eq!(atmo.state(Quantity::Temperature), &cached);
    }

    #[test]
    fn single_refreshes_touch_only_their_quantity() {
        let mut driver = ScriptedDriver::new([21_000, 101_325_000, 4_500, 40]);
        let mut atmo = Atmo::new(&mut driver, "porch");

        assert_eq!(atmo.refresh_pressure().unwrap(), 101_325_000);
        assert_eq!(atmo.refresh_humidity().unwrap(), 4_500);
        assert_eq!(atmo.refresh_altitude().unwrap(), 40);

        assert_eq!(atmo.state(Quantity::Temperature).value(), 0);
        assert_eq!(atmo.state(Quantity::Pressure).value(), 101_325_000);
        assert_eq!(atmo.state(Quantity::Humidity).value(), 4_500);
        assert_eq!(atmo.state(Quantity::Altitude).value(), 40);

        atmo.driver.fail(Quantity::Humidity);
        assert!(matches!(
            atmo.refresh_humidity(),
            Err(AtmoError::Read {
                quantity: Quantity::Humidity,
                ..
            })
        ));
        assert_eq!(atmo.state(Quantity::Humidity).value(), 4_500);
        assert_eq!(
            atmo.driver.reads(),
            &[
                Quantity::Pressure,
                Quantity::Humidity,
                Quantity::Altitude,
                Quantity::Humidity
            ]
        );
    }

    #[test]
    fn reset_all_zeroes_every_state() {
        let mut driver = ScriptedDriver::new([21_000, 101_325_000, 4_500, 40]);
        let mut atmo = Atmo::new(&mut driver, "porch");
        atmo.refresh_all().unwrap();

        let before = Utc::now();
        atmo.reset_all();

        for quantity in Quantity::ALL {
            assert_eq!(atmo.state(quantity).value(), 0);
            assert!(atmo.state(quantity).since() >= before);
        }
    }

    #[test]
    fn connectivity_comes_from_driver() {
        let mut driver = ScriptedDriver::new([0; 4]);
        driver.disconnect();
        let atmo = Atmo::new(&mut driver, "porch");
        assert!(!atmo.is_connected());
    }

    #[test]
    fn derived_readings() {
        let mut driver = ScriptedDriver::new([3_999, 101_325_000, 5_500, 100]);
        let mut atmo = Atmo::new(&mut driver, "porch");
        atmo.refresh_all().unwrap();

        assert_eq!(atmo.celsius(), 3.0);
        assert!((atmo.fahrenheit() - 37.4).abs() < 1e-9);
        assert!((atmo.feet_elevation() - 328.08).abs() < 1e-9);
        assert_eq!(atmo.humidity_percent(), 55.0);
        assert_eq!(format!("{:.2}", atmo.inches_hg()), "29.92");
    }
}
