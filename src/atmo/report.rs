use crate::atmo::{Atmo, Driver, Quantity};

impl<D: Driver> Atmo<'_, D> {
    /// One report line for `quantity`, converted to its display unit with two decimals.
    pub fn render(&self, quantity: Quantity) -> String {
        let converted = format!("{:.2}", self.converted(quantity));
        self.state(quantity)
            .render(&converted, quantity.unit(), self.timezone())
    }

    pub fn temperature_string(&self) -> String {
        self.render(Quantity::Temperature)
    }

    pub fn pressure_string(&self) -> String {
        self.render(Quantity::Pressure)
    }

    pub fn humidity_string(&self) -> String {
        self.render(Quantity::Humidity)
    }

    pub fn altitude_string(&self) -> String {
        self.render(Quantity::Altitude)
    }

    /// The adapter name followed by every quantity's line, from cached values only.
    pub fn full_report(&self) -> String {
        let mut report = String::with_capacity(512);
        report.push_str(self.name());
        report.push('\n');
        for quantity in Quantity::ALL {
            report.push_str(&self.render(quantity));
        }
        report
    }
}
