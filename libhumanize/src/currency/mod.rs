//! Currency formatting with per-currency symbols, precision and grouping.
//!
//! The currency table is a static, read-only list keyed by ISO code. Callers
//! that need a currency outside the table can pass their own symbol and
//! rules to [`format_amount`].

use crate::grouping::{GroupingStyle, group};
use serde::Serialize;
use tracing::debug;


/// Display rules for a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyFormat {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimal_places: usize,
    pub grouping: GroupingStyle,
}

const fn western(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
    decimal_places: usize,
) -> CurrencyFormat {
    CurrencyFormat {
        code,
        symbol,
        name,
        decimal_places,
        grouping: GroupingStyle::Western,
    }
}

/// Every currency known to [`currency`].
pub static CURRENCIES: &[CurrencyFormat] = &[
    western("USD", "$", "US Dollar", 2),
    western("EUR", "€", "Euro", 2),
    western("GBP", "£", "British Pound", 2),
    western("JPY", "¥", "Japanese Yen", 0),
    western("CNY", "¥", "Chinese Yuan", 2),
    western("CHF", "₣", "Swiss Franc", 2),
    western("CAD", "C$", "Canadian Dollar", 2),
    western("AUD", "A$", "Australian Dollar", 2),
    western("NZD", "NZ$", "New Zealand Dollar", 2),
    western("SEK", "kr", "Swedish Krona", 2),
    western("NOK", "kr", "Norwegian Krone", 2),
    western("DKK", "kr", "Danish Krone", 2),
    CurrencyFormat {
        code: "INR",
        symbol: "₹",
        name: "Indian Rupee",
        decimal_places: 2,
        grouping: GroupingStyle::Indian,
    },
    western("KRW", "₩", "South Korean Won", 0),
    western("SGD", "S$", "Singapore Dollar", 2),
    western("HKD", "HK$", "Hong Kong Dollar", 2),
    western("THB", "฿", "Thai Baht", 2),
    western("MYR", "RM", "Malaysian Ringgit", 2),
    western("IDR", "Rp", "Indonesian Rupiah", 0),
    western("PHP", "₱", "Philippine Peso", 2),
    western("VND", "₫", "Vietnamese Dong", 0),
    western("TWD", "NT$", "Taiwan Dollar", 2),
    western("AED", "د.إ", "UAE Dirham", 2),
    western("SAR", "﷼", "Saudi Riyal", 2),
    western("ILS", "₪", "Israeli Shekel", 2),
    western("EGP", "£", "Egyptian Pound", 2),
    western("ZAR", "R", "South African Rand", 2),
    western("NGN", "₦", "Nigerian Naira", 2),
    western("KES", "KSh", "Kenyan Shilling", 2),
    western("TRY", "₺", "Turkish Lira", 2),
    western("MXN", "$", "Mexican Peso", 2),
    western("BRL", "R$", "Brazilian Real", 2),
    western("ARS", "$", "Argentine Peso", 2),
    western("CLP", "$", "Chilean Peso", 0),
    western("COP", "$", "Colombian Peso", 2),
    western("PEN", "S/", "Peruvian Sol", 2),
    western("PLN", "zł", "Polish Złoty", 2),
    western("CZK", "Kč", "Czech Koruna", 2),
    western("HUF", "Ft", "Hungarian Forint", 0),
    western("RON", "lei", "Romanian Leu", 2),
    western("UAH", "₴", "Ukrainian Hryvnia", 2),
    western("BTC", "₿", "Bitcoin", 8),
    western("ETH", "Ξ", "Ethereum", 18),
    western("XAU", "oz", "Gold Ounce", 4),
    western("XAG", "oz", "Silver Ounce", 4),
];

/// A monetary amount in any of the supported numeric shapes.
///
/// Text amounts are decimal strings (`"-1234.5678"`); they are rounded
/// exactly, so they may carry more digits than an `f64` can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount<'a> {
    Int(i128),
    UInt(u128),
    Float(f64),
    Text(&'a str),
}

macro_rules! amount_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Amount<'_> {
            fn from(value: $t) -> Self {
                Amount::Int(value as i128)
            }
        })*
    };
}

amount_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Amount<'_> {
    fn from(value: u128) -> Self {
        Amount::UInt(value)
    }
}

impl From<f32> for Amount<'_> {
    fn from(value: f32) -> Self {
        Amount::Float(f64::from(value))
    }
}

impl From<f64> for Amount<'_> {
    fn from(value: f64) -> Self {
        Amount::Float(value)
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    fn from(value: &'a str) -> Self {
        Amount::Text(value)
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    fn from(value: &'a String) -> Self {
        Amount::Text(value.as_str())
    }
}

/// Looks up a currency by code, ignoring case.
///
/// # Examples
///
/// ```
/// use libhumanize::currency::currency_info;
///
/// assert_eq!(currency_info("eur").unwrap().symbol, "€");
/// assert!(currency_info("XYZ").is_none());
/// ```
pub fn currency_info(code: &str) -> Option<&'static CurrencyFormat> {
    CURRENCIES
        .iter()
        .find(|format| format.code.eq_ignore_ascii_case(code))
}

/// Returns whether the code is in the currency table.
pub fn is_supported(code: &str) -> bool {
    currency_info(code).is_some()
}

/// Returns every supported currency code.
pub fn supported_currencies() -> Vec<&'static str> {
    CURRENCIES.iter().map(|format| format.code).collect()
}

/// Formats an amount with the symbol, precision and grouping of `code`.
///
/// Unknown codes fall back to the upper-cased code as symbol, two decimals
/// and Western grouping.
///
/// # Examples
///
/// ```
/// use libhumanize::currency::currency;
///
/// assert_eq!(currency(1234567.89, "USD"), "$ 1,234,567.89");
/// assert_eq!(currency(12345678, "INR"), "₹ 1,23,45,678.00");
/// assert_eq!(currency(-500000, "JPY"), "¥ -500,000");
/// assert_eq!(currency(12345, "XYZ"), "XYZ 12,345.00");
/// ```
pub fn currency<'a>(amount: impl Into<Amount<'a>>, code: &str) -> String {
    match currency_info(code) {
        Some(format) => format_amount(
            amount,
            format.symbol,
            format.decimal_places,
            format.grouping,
        ),
        None => {
            debug!(code, "unknown currency code, using code as symbol");
            format_amount(
                amount,
                &code.to_uppercase(),
                2,
                GroupingStyle::Western,
            )
        }
    }
}

/// Like [`currency`], followed by the currency name for known codes.
///
/// # Examples
///
/// ```
/// use libhumanize::currency::currency_with_name;
///
/// assert_eq!(currency_with_name(50000, "EUR"), "€ 50,000.00 (Euro)");
/// ```
pub fn currency_with_name<'a>(amount: impl Into<Amount<'a>>, code: &str) -> String {
    match currency_info(code) {
        Some(format) => format!("{} ({})", currency(amount, code), format.name),
        None => currency(amount, code),
    }
}

/// Formats an amount as `"<symbol> [-]<grouped>[.<decimals>]"`.
///
/// Text that is not a plain decimal number is rendered verbatim after the
/// symbol.
pub fn format_amount<'a>(
    amount: impl Into<Amount<'a>>,
    symbol: &str,
    decimal_places: usize,
    grouping: GroupingStyle,
) -> String {
    let (negative, whole, fraction) = match amount.into() {
        Amount::Int(value) => (
            value < 0,
            value.unsigned_abs().to_string(),
            "0".repeat(decimal_places),
        ),
        Amount::UInt(value) => (false, value.to_string(), "0".repeat(decimal_places)),
        Amount::Float(value) if value.is_nan() => return format!("{symbol} NaN"),
        Amount::Float(value) if value.is_infinite() => {
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{symbol} {sign}Infinity");
        }
        Amount::Float(value) => {
            let text = format!("{:.*}", decimal_places, value.abs());
            let (whole, fraction) = text.split_once('.').unwrap_or((&text, ""));
            (value < 0.0, whole.to_string(), fraction.to_string())
        }
        Amount::Text(text) => match Decimal::parse(text) {
            Some(decimal) => decimal.round_half_even(decimal_places),
            None => return format!("{symbol} {text}"),
        },
    };

    let sign = if negative { "-" } else { "" };
    let grouped = group(&whole, grouping);
    if fraction.is_empty() {
        format!("{symbol} {sign}{grouped}")
    } else {
        format!("{symbol} {sign}{grouped}.{fraction}")
    }
}

/// An exact decimal number split into digit strings.
struct Decimal<'a> {
    negative: bool,
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> Decimal<'a> {
    fn parse(text: &'a str) -> Option<Self> {
        let text = text.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return None;
        }
        Some(Self {
            negative,
            whole,
            fraction,
        })
    }

    /// Rounds to `places` fraction digits, ties to even.
    fn round_half_even(&self, places: usize) -> (bool, String, String) {
        let whole = self.whole.trim_start_matches('0');
        let whole = if whole.is_empty() { "0" } else { whole };

        if self.fraction.len() <= places {
            let mut fraction = self.fraction.to_string();
            fraction.push_str(&"0".repeat(places - self.fraction.len()));
            let negative = self.negative && (is_nonzero(whole) || is_nonzero(&fraction));
            return (negative, whole.to_string(), fraction);
        }

        let (kept, dropped) = self.fraction.split_at(places);
        let mut digits: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();

        let first = dropped.as_bytes()[0];
        let tail_nonzero = dropped.bytes().skip(1).any(|b| b != b'0');
        let last_odd = digits.last().is_some_and(|d| (d - b'0') % 2 == 1);
        let round_up = first > b'5' || (first == b'5' && (tail_nonzero || last_odd));

        if round_up {
            let mut i = digits.len();
            loop {
                if i == 0 {
                    digits.insert(0, b'1');
                    break;
                }
                i -= 1;
                if digits[i] == b'9' {
                    digits[i] = b'0';
                } else {
                    digits[i] += 1;
                    break;
                }
            }
        }

        let split = digits.len() - places;
        let fraction = String::from_utf8_lossy(&digits[split..]).into_owned();
        let whole = String::from_utf8_lossy(&digits[..split]).into_owned();
        let negative = self.negative && digits.iter().any(|b| *b != b'0');
        (negative, whole, fraction)
    }
}

fn is_nonzero(digits: &str) -> bool {
    digits.bytes().any(|b| b != b'0')
}
