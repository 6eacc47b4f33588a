use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, EUR = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount the way the dashboard displays it: French locale
/// thousands separator and decimal mark, correct number of decimal places for
/// the currency, currency symbol last (ex. "12 345,67 €").
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    let minor_units = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 { "-" } else { "" };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::fr);
    if decimal_places == 0 {
        format!("{}{} {}", sign, integer_part, currency.symbol())
    } else {
        format!(
            "{}{}{}{:0width$} {}",
            sign,
            integer_part,
            Locale::fr.decimal(),
            minor_units % scale,
            currency.symbol(),
            width = decimal_places as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(integer: &str, rest: &str, currency: Currency) -> String {
        format!(
            "{}{} {}",
            integer.replace(' ', Locale::fr.separator()),
            rest,
            currency.symbol()
        )
    }

    #[test]
    fn formats_euros_in_french_locale() {
        let eur = Currency::EUR;
        assert_eq!(format_amount(1234.5, eur), expected("1 234", ",50", eur));
        assert_eq!(format_amount(0.0, eur), expected("0", ",00", eur));
        assert_eq!(format_amount(2.999, eur), expected("3", ",00", eur));
    }

    #[test]
    fn keeps_sign_of_negative_amounts() {
        let eur = Currency::EUR;
        assert_eq!(format_amount(-0.5, eur), expected("-0", ",50", eur));
        assert_eq!(format_amount(-0.001, eur), expected("0", ",00", eur));
    }

    #[test]
    fn zero_decimal_currencies() {
        let jpy = Currency::JPY;
        assert_eq!(format_amount(1500.4, jpy), expected("1 500", "", jpy));
    }
}
