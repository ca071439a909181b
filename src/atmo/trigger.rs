use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::atmo::{Action, Atmo, AtmoError, Driver};

/// Channel a trigger's report is delivered on.
pub type ReportSender = UnboundedSender<Trigger>;

/// A request for a report from the adapter named `target`.
///
/// The same value comes back on `report_to` with `error` and `message` filled in.
#[derive(Debug, Clone)]
pub struct Trigger {
    pub target: String,

    pub action: String,

    pub error: bool,

    pub message: String,

    pub report_to: ReportSender,
}

impl Trigger {
    pub fn new(
        target: impl Into<String>,
        action: impl Into<String>,
        report_to: ReportSender,
    ) -> Self {
        Self {
            target: target.into(),
            action: action.into(),
            error: false,
            message: String::new(),
            report_to,
        }
    }

    fn report(mut self, error: bool, message: String) {
        self.error = error;
        self.message = message;

        let report_to = self.report_to.clone();
        if report_to.send(self).is_err() {
            debug!("report receiver dropped before delivery");
        }
    }
}

impl<D: Driver> Atmo<'_, D> {
    /// Answers `trigger` with exactly one report on its own channel.
    ///
    /// Nothing is read from the driver when the trigger addresses another adapter.
    /// Failures never escape; they become error reports.
    pub fn dispatch(&mut self, trigger: Trigger) {
        debug!(
            adapter = %self.name(),
            trigger_target = %trigger.target,
            action = %trigger.action,
            "dispatching trigger"
        );

        match self.respond(&trigger.target, &trigger.action) {
            Ok(message) => trigger.report(false, message),
            Err(err) => {
                let message = self.error_message(&err);
                trigger.report(true, message);
            }
        }
    }

    fn respond(&mut self, target: &str, action: &str) -> Result<String, AtmoError> {
        if target != self.name() {
            return Err(AtmoError::RoutingMismatch {
                name: self.name().to_string(),
                target: target.to_string(),
            });
        }

        self.refresh_all()?;

        let message = match action.parse::<Action>()? {
            Action::All => format!("{} Report: {}", self.name(), self.full_report()),
            Action::Single(quantity) => format!(
                "{} {}: {}",
                self.name(),
                quantity.short_label(),
                self.render(quantity)
            ),
        };

        Ok(message)
    }

    fn error_message(&self, err: &AtmoError) -> String {
        match err {
            AtmoError::RoutingMismatch { .. } => format!("error - {err}"),
            AtmoError::Read { .. } => {
                format!("error - {} couldn't get sensor update - {err}", self.name())
            }
            AtmoError::UnrecognizedAction { .. } => {
                format!("error - {} couldn't handle trigger - {err}", self.name())
            }
        }
    }
}
