//! Editing-cycle configuration

use serde::{Deserialize, Serialize};

use crate::errors::{DictEditError, Result};
use crate::ops::DEFAULT_ORDER_STEP;

/// Options fixed when an editing cycle opens
///
/// The fields are public so hosts can build options directly; operations
/// that use `order_step` check it with [`check_order_step`] before touching
/// the buffer. Deserialization checks it up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCycleOptions")]
pub struct CycleOptions {
    /// When false the cycle is view-only and every mutation fails with `ReadOnly`
    pub editable: bool,

    /// Spacing used by resequencing and by the suggested order of new entries
    pub order_step: f64,
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            editable: true,
            order_step: DEFAULT_ORDER_STEP,
        }
    }
}

impl CycleOptions {
    /// View-only options with the default order step
    pub fn read_only() -> Self {
        Self {
            editable: false,
            ..Self::default()
        }
    }

    /// Set the order step without checking it
    pub fn with_order_step(mut self, order_step: f64) -> Self {
        self.order_step = order_step;
        self
    }

    /// Set the order step, rejecting anything but a finite step above 0
    ///
    /// # Errors
    /// * `InvalidOrderStep` - `order_step` is zero, negative, NaN or infinite
    pub fn try_with_order_step(self, order_step: f64) -> Result<Self> {
        Ok(self.with_order_step(check_order_step(order_step)?))
    }

    /// Check every option
    ///
    /// # Errors
    /// * `InvalidOrderStep` - see [`check_order_step`]
    pub fn validate(&self) -> Result<()> {
        check_order_step(self.order_step).map(|_| ())
    }
}

/// Accept a finite order step greater than 0
///
/// Anything else would let resequencing write non-finite or negative orders,
/// which validation rejects.
///
/// # Errors
/// * `InvalidOrderStep` - `step` is zero, negative, NaN or infinite
pub fn check_order_step(step: f64) -> Result<f64> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(DictEditError::InvalidOrderStep { step })
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawCycleOptions {
    editable: bool,
    order_step: f64,
}

impl Default for RawCycleOptions {
    fn default() -> Self {
        let defaults = CycleOptions::default();
        Self {
            editable: defaults.editable,
            order_step: defaults.order_step,
        }
    }
}

impl TryFrom<RawCycleOptions> for CycleOptions {
    type Error = DictEditError;

    fn try_from(raw: RawCycleOptions) -> Result<Self> {
        CycleOptions {
            editable: raw.editable,
            ..CycleOptions::default()
        }
        .try_with_order_step(raw.order_step)
    }
}
