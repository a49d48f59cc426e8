//! Cell metrics: separator thickness and per-role margins.
//!
//! Every value is a pixel count. The defaults match the list cells of the
//! settings screens; concrete cells override the label and accessory margins
//! through [`CellMetricsBuilder`].
//!
//! # Example
//!
//! ```
//! use escher_system::metrics::{CellMetrics, MetricsError};
//!
//! let metrics = CellMetrics::builder()
//!     .label_margin(6)
//!     .accessory_margin(2)
//!     .build()?;
//!
//! assert_eq!(metrics.separator_thickness, 1);
//! assert_eq!(metrics.label_margin, 6);
//! assert_eq!(metrics.accessory_margin, 2);
//! # Ok::<(), MetricsError>(())
//! ```

use thiserror_no_std::Error;

/// Largest accepted metric value.
///
/// Cell geometry is expressed in display coordinates, which fit in an `i16`
/// on every supported panel.
pub const MAX_METRIC: u32 = 0x7FFF;

/// Largest accepted separator thickness.
pub const MAX_SEPARATOR_THICKNESS: u32 = 8;

/// Metric validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MetricsError {
    /// A margin does not fit the display coordinate range.
    #[error("metric `{metric}` = {value} exceeds the coordinate range")]
    MetricOutOfRange {
        /// Name of the offending metric.
        metric: &'static str,
        /// Rejected value.
        value: u32,
    },
    /// The separator is thicker than [`MAX_SEPARATOR_THICKNESS`].
    #[error("separator thickness {value} exceeds the maximum")]
    SeparatorTooThick {
        /// Rejected value.
        value: u32,
    },
}

/// Separator thickness and margins used by the cell layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CellMetrics {
    /// Border drawn on every edge of the cell, never covered by content.
    pub separator_thickness: u32,
    /// Space above and below the label, and below the accessory.
    pub vertical_margin: u32,
    /// Left/right margin of the sub-accessory.
    pub horizontal_margin: u32,
    /// Left/right margin of the label.
    pub label_margin: u32,
    /// Left/right margin of the accessory.
    pub accessory_margin: u32,
}

impl CellMetrics {
    /// Metrics of a plain list cell.
    pub const DEFAULT: Self = Self {
        separator_thickness: 1,
        vertical_margin: 4,
        horizontal_margin: 10,
        label_margin: 10,
        accessory_margin: 10,
    };

    /// Start from [`CellMetrics::DEFAULT`] and override individual values.
    pub const fn builder() -> CellMetricsBuilder {
        CellMetricsBuilder {
            metrics: Self::DEFAULT,
        }
    }

    /// Validate metrics read from a configuration document.
    ///
    /// # Errors
    ///
    /// Returns the first [`MetricsError`] found.
    ///
    /// # Example
    ///
    /// ```
    /// use escher_system::metrics::CellMetrics;
    ///
    /// let mut raw = CellMetrics::DEFAULT;
    /// raw.separator_thickness = 40;
    /// assert!(CellMetrics::from_config(raw).is_err());
    /// ```
    pub fn from_config(raw: Self) -> Result<Self, MetricsError> {
        CellMetricsBuilder { metrics: raw }.build()
    }

    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::SeparatorTooThick`] or
    /// [`MetricsError::MetricOutOfRange`].
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.separator_thickness > MAX_SEPARATOR_THICKNESS {
            return Err(MetricsError::SeparatorTooThick {
                value: self.separator_thickness,
            });
        }
        let margins = [
            ("vertical_margin", self.vertical_margin),
            ("horizontal_margin", self.horizontal_margin),
            ("label_margin", self.label_margin),
            ("accessory_margin", self.accessory_margin),
        ];
        for (metric, value) in margins {
            if value > MAX_METRIC {
                return Err(MetricsError::MetricOutOfRange { metric, value });
            }
        }
        Ok(())
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`CellMetrics`].
///
/// Setting the horizontal margin also resets the label and accessory margins,
/// so call it before overriding either of them.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct CellMetricsBuilder {
    metrics: CellMetrics,
}

impl CellMetricsBuilder {
    /// Set the separator (border) thickness.
    pub const fn separator_thickness(mut self, value: u32) -> Self {
        self.metrics.separator_thickness = value;
        self
    }

    /// Set the vertical margin.
    pub const fn vertical_margin(mut self, value: u32) -> Self {
        self.metrics.vertical_margin = value;
        self
    }

    /// Set the horizontal margin, also used as label and accessory margin.
    pub const fn horizontal_margin(mut self, value: u32) -> Self {
        self.metrics.horizontal_margin = value;
        self.metrics.label_margin = value;
        self.metrics.accessory_margin = value;
        self
    }

    /// Override the label margin.
    pub const fn label_margin(mut self, value: u32) -> Self {
        self.metrics.label_margin = value;
        self
    }

    /// Override the accessory margin.
    pub const fn accessory_margin(mut self, value: u32) -> Self {
        self.metrics.accessory_margin = value;
        self
    }

    /// Validate and return the metrics.
    ///
    /// # Errors
    ///
    /// See [`CellMetrics::validate`].
    pub fn build(self) -> Result<CellMetrics, MetricsError> {
        self.metrics.validate()?;
        Ok(self.metrics)
    }
}
