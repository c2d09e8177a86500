//! Add Metric modal
//!
//! The dialog's visibility flag and the form it contains. Submitting the form
//! validates the input and hands back a draft; nothing appends the draft to
//! the metric list.

use thiserror::Error;

use crate::metrics::{ParseTrendError, Trend};

/// Form validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Trend selector value outside `up`, `down`, `neutral`
    #[error(transparent)]
    InvalidTrend(#[from] ParseTrendError),
}

/// Visibility of the "Add New Metric" dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// "Add Metric" button
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Dialog open-change callback; close button, overlay click and Escape
    /// all arrive here with `false`
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// Raw input captured by the Add Metric form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddMetricForm {
    pub name: String,
    pub value: String,
    pub change: String,
    /// `None` until the user picks a direction
    pub trend: Option<Trend>,
}

/// A validated but unsaved metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDraft {
    pub name: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

impl AddMetricForm {
    /// Set the trend from the selector's raw value; empty clears it
    pub fn set_trend(&mut self, raw: &str) -> Result<(), FormError> {
        self.trend = if raw.is_empty() {
            None
        } else {
            Some(raw.parse()?)
        };
        Ok(())
    }

    /// Check every required field
    pub fn validate(&self) -> Result<MetricDraft, FormError> {
        let name = required(&self.name, "Metric Name")?;
        let value = required(&self.value, "Current Value")?;
        let change = required(&self.change, "Change Percentage")?;
        let trend = self.trend.ok_or(FormError::MissingField("Trend Direction"))?;

        Ok(MetricDraft {
            name,
            value,
            change,
            trend,
        })
    }
}

fn required(field: &str, label: &'static str) -> Result<String, FormError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(label))
    } else {
        Ok(trimmed.to_string())
    }
}
