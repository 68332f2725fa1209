//! Display formatting for the presentation-facing read model.
//!
//! Amounts render as localized currency (`$1,234.50`), list entries get a
//! sign prefix derived from the transaction kind, and dates render in the
//! short `Jan 1, 2024` style.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, macros::format_description};

use crate::transaction::TransactionKind;

/// Format `number` as a currency string, e.g. `$1,234.50` or `-$4.50`.
pub fn currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Format a transaction amount with its sign prefix: `+` for income, `-`
/// for an expense.
///
/// `amount` is the stored positive magnitude.
pub fn signed_currency(kind: TransactionKind, amount: f64) -> String {
    let magnitude = currency(amount.abs());

    match kind {
        TransactionKind::Income => format!("+{magnitude}"),
        TransactionKind::Expense => format!("-{magnitude}"),
    }
}

/// Format `date` in the short style used in transaction lists, e.g.
/// `Jan 1, 2024`.
pub fn short_date(date: Date) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");

    // Formatting a date with a date-only description cannot fail in
    // practice; fall back to the ISO form rather than propagating.
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod currency_tests {
    use super::currency;

    #[test]
    fn zero_renders_with_two_decimals() {
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn small_amount_keeps_trailing_zero() {
        assert_eq!(currency(4.5), "$4.50");
    }

    #[test]
    fn thousands_are_separated() {
        assert_eq!(currency(1234.5), "$1,234.50");
    }

    #[test]
    fn negative_amounts_get_a_leading_minus() {
        assert_eq!(currency(-4.5), "-$4.50");
    }

    #[test]
    fn whole_amounts_render_cents() {
        assert_eq!(currency(100.0), "$100.00");
    }
}

#[cfg(test)]
mod signed_currency_tests {
    use crate::transaction::TransactionKind;

    use super::signed_currency;

    #[test]
    fn income_is_prefixed_with_plus() {
        assert_eq!(signed_currency(TransactionKind::Income, 100.0), "+$100.00");
    }

    #[test]
    fn expense_is_prefixed_with_minus() {
        assert_eq!(signed_currency(TransactionKind::Expense, 4.5), "-$4.50");
    }
}

#[cfg(test)]
mod short_date_tests {
    use time::macros::date;

    use super::short_date;

    #[test]
    fn renders_short_month_and_unpadded_day() {
        assert_eq!(short_date(date!(2024 - 01 - 01)), "Jan 1, 2024");
    }

    #[test]
    fn renders_double_digit_day() {
        assert_eq!(short_date(date!(2025 - 12 - 31)), "Dec 31, 2025");
    }
}
