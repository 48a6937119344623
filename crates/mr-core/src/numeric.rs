use crate::MrError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MrError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MrError::NonFinite { what, value: v })
    }
}

/// Parse a textual scalar (surrounding whitespace ignored) into a finite `Real`.
pub fn parse_real(text: &str, what: &'static str) -> Result<Real, MrError> {
    let v = text
        .trim()
        .parse::<Real>()
        .map_err(|_| MrError::InvalidArg { what })?;
    ensure_finite(v, what)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_real_accepts_padded_text() {
        assert_eq!(parse_real("  9.81 ", "gravity").unwrap(), 9.81);
        assert_eq!(parse_real("1.025e3", "sea density").unwrap(), 1025.0);
        assert_eq!(parse_real("-350", "depth").unwrap(), -350.0);
    }

    #[test]
    fn parse_real_rejects_unit_suffix_and_blank() {
        assert_eq!(
            parse_real("350 m", "depth"),
            Err(MrError::InvalidArg { what: "depth" })
        );
        assert_eq!(
            parse_real("   ", "gravity"),
            Err(MrError::InvalidArg { what: "gravity" })
        );
    }

    #[test]
    fn parse_real_rejects_non_finite_text() {
        for text in ["inf", "-inf", "NaN"] {
            let err = parse_real(text, "sea density").unwrap_err();
            assert!(matches!(err, MrError::NonFinite { what: "sea density", .. }));
        }
    }
}
