/// Largest magnitude an `f32` can hold, widened to `f64`.
pub const MAX_F32: f64 = f32::MAX as f64;

/// Returns `true` if `value` lies in the range of an integer with the given
/// width and signedness.
///
/// This is the mathematical question a round-trip check answers: a value
/// survives `as` and back exactly when it fits.
///
/// # Example
/// ```
/// use castgen::util::num::fits;
///
/// assert!(fits(127, 8, true));
/// assert!(!fits(128, 8, true));
/// assert!(!fits(-1, 32, false));
/// assert!(fits(i128::from(u64::MAX), 64, false));
/// ```
#[must_use]
pub const fn fits(value: i128, bits: u32, signed: bool) -> bool {
    if signed {
        let half = 1i128 << (bits - 1);
        value >= -half && value < half
    } else {
        value >= 0 && value < (1i128 << bits)
    }
}

/// Reproduces an integer-to-integer `as` cast.
///
/// The value keeps its low `bits` bits and is reinterpreted with the given
/// signedness, which is exactly what `as` does between primitive integers.
///
/// # Example
/// ```
/// use castgen::util::num::wrap;
///
/// assert_eq!(wrap(200, 8, true), i128::from(200u8 as i8));
/// assert_eq!(wrap(-1, 16, false), i128::from(u16::MAX));
/// assert_eq!(wrap(300, 8, false), 44);
/// assert_eq!(wrap(-5, 64, true), -5);
/// ```
#[must_use]
pub const fn wrap(value: i128, bits: u32, signed: bool) -> i128 {
    let modulus = 1i128 << bits;
    let low = value & (modulus - 1);
    if signed && low >= modulus >> 1 { low - modulus } else { low }
}

/// Reproduces an integer-to-float `as` cast, widened back to `f64`.
///
/// Rounds to the nearest representable value of the float width, so
/// `i32::MAX` becomes `2^31` at 32 bits.
///
/// # Example
/// ```
/// use castgen::util::num::int_to_float;
///
/// assert_eq!(int_to_float(i128::from(i32::MAX), 32), 2_147_483_648.0);
/// assert_eq!(int_to_float(i128::from(i32::MAX), 64), 2_147_483_647.0);
/// assert_eq!(int_to_float(i128::from(u64::MAX), 64), 18_446_744_073_709_551_616.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn int_to_float(value: i128, float_bits: u32) -> f64 {
    if float_bits == 32 {
        f64::from(value as f32)
    } else {
        value as f64
    }
}

/// Rounds an `f64` to the precision of the given float width.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn to_float_width(value: f64, float_bits: u32) -> f64 {
    if float_bits == 32 {
        f64::from(value as f32)
    } else {
        value
    }
}

/// Returns `true` if an integer `as` cast of `value` keeps its integral part.
///
/// The fractional part is dropped by the cast either way and is not counted
/// as loss. NaN and infinities never fit.
///
/// # Example
/// ```
/// use castgen::util::num::float_fits;
///
/// assert!(float_fits(255.9, 8, false));
/// assert!(!float_fits(256.0, 8, false));
/// assert!(float_fits(-0.5, 8, false));
/// assert!(!float_fits(9_223_372_036_854_775_808.0, 64, true));
/// assert!(!float_fits(f64::NAN, 32, true));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn float_fits(value: f64, bits: u32, signed: bool) -> bool {
    let whole = value.trunc();
    // Anything this large is outside every supported integer range.
    if !whole.is_finite() || whole.abs() >= 1e30 {
        return false;
    }
    fits(whole as i128, bits, signed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn wrap_matches_primitive_casts() {
        for value in [-70_000i64, -129, -128, -1, 0, 1, 127, 128, 255, 256, 65_535, 65_536] {
            let wide = i128::from(value);
            assert_eq!(wrap(wide, 8, true), i128::from(value as i8));
            assert_eq!(wrap(wide, 8, false), i128::from(value as u8));
            assert_eq!(wrap(wide, 16, true), i128::from(value as i16));
            assert_eq!(wrap(wide, 16, false), i128::from(value as u16));
            assert_eq!(wrap(wide, 32, false), i128::from(value as u32));
            assert_eq!(wrap(wide, 64, false), i128::from(value as u64));
        }
        assert_eq!(wrap(i128::from(u64::MAX), 64, true), -1);
    }

    #[test]
    fn fits_agrees_with_wrap() {
        for bits in [8, 16, 32, 64] {
            for signed in [true, false] {
                for value in [-(1i128 << 64), -129, -1, 0, 1, 127, 128, 255, 256, 1i128 << 63] {
                    let round_trip = wrap(value, bits, signed) == value;
                    assert_eq!(fits(value, bits, signed), round_trip, "{value} at {bits}/{signed}");
                }
            }
        }
    }

    #[test]
    fn float_rounding() {
        assert_eq!(to_float_width(0.1, 64), 0.1);
        assert_ne!(to_float_width(0.1, 32), 0.1);
        assert_eq!(int_to_float(16_777_217, 32), 16_777_216.0);
    }
}
