use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Fortran-like scientific number formatting
    ///
    /// The exponent always carries a sign and is padded to `exp_pad` digits,
    /// matching the look of values in the mctal file.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use mctools_utils::ValueExt;
    /// assert_eq!(1.5e-3_f64.sci(5, 2), "1.50000e-03");
    /// assert_eq!((-20.0_f64).sci(3, 2), "-2.000e+01");
    /// assert_eq!(1e36_f64.sci(2, 3), "1.00e+036");
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", &self, precision = precision);

        // LowerExp always writes an 'e'
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };

        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };

        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
