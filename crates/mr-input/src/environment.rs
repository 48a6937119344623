//! Environment constants held in a textual and a numeric form.

use mr_core::{MrError, MrResult, Real, ensure_finite, parse_real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric value meaning "never set".
pub const UNSET_SENTINEL: Real = -999.9;

/// How a set on one representation affects the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EnvSync {
    /// Text and number are stored independently.
    #[default]
    Independent,
    /// A numeric set reformats the text; a parseable text set updates the number.
    Synchronized,
}

/// One environment constant with its two views.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvScalar {
    text: String,
    value: Real,
}

impl Default for EnvScalar {
    fn default() -> Self {
        Self {
            text: String::new(),
            value: UNSET_SENTINEL,
        }
    }
}

impl EnvScalar {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Real {
        self.value
    }

    /// True once the numeric form holds something other than the exact sentinel.
    pub fn is_set(&self) -> bool {
        self.value != UNSET_SENTINEL
    }

    pub fn set_text(&mut self, text: impl Into<String>, sync: EnvSync, what: &'static str) {
        self.text = text.into();
        tracing::trace!(what, text = %self.text, "set environment text");
        if sync == EnvSync::Synchronized {
            match parse_real(&self.text, what) {
                Ok(v) => self.value = v,
                Err(err) => {
                    tracing::warn!(what, text = %self.text, %err, "text kept verbatim, numeric form unchanged");
                }
            }
        }
    }

    pub fn set_value(&mut self, value: Real, sync: EnvSync, what: &'static str) {
        self.value = value;
        tracing::trace!(what, value, "set environment value");
        if sync == EnvSync::Synchronized {
            self.text = value.to_string();
        }
    }

    /// Best available number: the numeric form if set, else the parsed text.
    pub fn resolve(&self, what: &'static str) -> MrResult<Real> {
        if self.is_set() {
            return ensure_finite(self.value, what);
        }
        if self.text.trim().is_empty() {
            return Err(MrError::Unset { what });
        }
        parse_real(&self.text, what)
    }
}

/// Gravity, sea density and water depth.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Environment {
    pub gravity: EnvScalar,
    pub sea_density: EnvScalar,
    pub depth: EnvScalar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_text_and_sentinel() {
        let s = EnvScalar::default();
        assert_eq!(s.text(), "");
        assert_eq!(s.value(), UNSET_SENTINEL);
        assert!(!s.is_set());
    }

    #[test]
    fn value_next_to_sentinel_counts_as_set() {
        let mut s = EnvScalar::default();
        s.set_value(-999.9000001, EnvSync::Independent, "depth");
        assert!(s.is_set());
        assert_eq!(s.resolve("depth").unwrap(), -999.9000001);

        s.set_value(UNSET_SENTINEL, EnvSync::Independent, "depth");
        assert!(!s.is_set());
    }

    #[test]
    fn independent_sets_do_not_cross() {
        let mut s = EnvScalar::default();
        s.set_value(1025.0, EnvSync::Independent, "sea density");
        assert_eq!(s.value(), 1025.0);
        assert_eq!(s.text(), "");

        s.set_text("1000", EnvSync::Independent, "sea density");
        assert_eq!(s.text(), "1000");
        assert_eq!(s.value(), 1025.0);
    }

    #[test]
    fn synchronized_sets_update_both_views() {
        let mut s = EnvScalar::default();
        s.set_text(" 9.81 ", EnvSync::Synchronized, "gravity");
        assert_eq!(s.text(), " 9.81 ");
        assert_eq!(s.value(), 9.81);

        s.set_value(350.5, EnvSync::Synchronized, "gravity");
        assert_eq!(s.text(), "350.5");
        assert_eq!(s.value(), 350.5);
    }

    #[test]
    fn synchronized_unparseable_text_passes_through() {
        let mut s = EnvScalar::default();
        s.set_value(9.81, EnvSync::Synchronized, "gravity");
        s.set_text("g_default", EnvSync::Synchronized, "gravity");
        assert_eq!(s.text(), "g_default");
        assert_eq!(s.value(), 9.81);
    }

    #[test]
    fn resolve_prefers_number_then_text() {
        let mut s = EnvScalar::default();
        assert_eq!(s.resolve("depth"), Err(MrError::Unset { what: "depth" }));

        s.set_text("320", EnvSync::Independent, "depth");
        assert_eq!(s.resolve("depth").unwrap(), 320.0);

        s.set_value(350.0, EnvSync::Independent, "depth");
        assert_eq!(s.resolve("depth").unwrap(), 350.0);
    }

    #[test]
    fn resolve_reports_bad_text() {
        let mut s = EnvScalar::default();
        s.set_text("shallow", EnvSync::Independent, "depth");
        assert_eq!(
            s.resolve("depth"),
            Err(MrError::InvalidArg { what: "depth" })
        );
    }

    #[test]
    fn resolve_rejects_non_finite_number() {
        let mut s = EnvScalar::default();
        s.set_value(Real::NAN, EnvSync::Independent, "gravity");
        assert!(matches!(
            s.resolve("gravity"),
            Err(MrError::NonFinite { what: "gravity", .. })
        ));
    }
}
