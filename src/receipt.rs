//! Telebirr receipt text extraction
//!
//! Turns the raw OCR output of a photographed payment confirmation into a
//! typed [`TransactionRecord`]. OCR text is noisy and line breaks cannot be
//! trusted, so the whole blob is pooled into one flat token sequence (split
//! on whitespace, not on newlines) and each field is found by an independent
//! first-match scan over that pool. Extraction is best-effort: a missing
//! field yields a default, never an error.

use lazy_regex::{lazy_regex, Lazy, Regex};
use std::fmt;

/// The literal marker deciding whether OCR text is a payment confirmation at all.
pub const RECEIPT_GATE: &str = "Successful";

/// Currency assumed when the receipt carries no recognizable currency code.
pub const DEFAULT_CURRENCY: &str = "ETB";

/// Known currency codes as they appear on receipts: `(ETB)`, `(USD)`, ...
static CURRENCY_REGEX: Lazy<Regex> = lazy_regex!(r"\((ETB|USD|EUR|RUB|GBP|CAD|INR|KRW|BRL|ZAR)\)");

/// Amount: a numeric run ending in `.NN` at the end of the token, optionally
/// decorated with a parenthesized currency suffix (`-1,250.75(ETB)`). The
/// leading minus/em-dash OCR artifacts sit outside the capture, so the sign
/// is discarded and amounts come out unsigned. A date-like token that happens
/// to end in `NN.NN` would be miscaptured; that is a known heuristic of the
/// receipt format, kept as-is.
static AMOUNT_REGEX: Lazy<Regex> = lazy_regex!(r"([0-9][0-9,]*\.[0-9]{2})(?:\([A-Z]{3}\))?$");

static DATE_REGEX: Lazy<Regex> = lazy_regex!(r"[0-9]{4}/[0-9]{2}/[0-9]{2}");
static TIME_REGEX: Lazy<Regex> = lazy_regex!(r"[0-9]{2}:[0-9]{2}:[0-9]{2}");

/// Transaction reference code: 10 consecutive upper-case letters/digits.
static CODE_REGEX: Lazy<Regex> = lazy_regex!(r"[A-Z0-9]{10}");

/// A payment confirmation extracted from OCR text.
///
/// Built fresh per inbound image and immutable afterwards; nothing here is
/// persisted beyond the single reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Present when the gate token was found (always `Some` for a constructed record).
    pub status: Option<String>,
    /// Unsigned decimal amount, empty when no amount-like token was found.
    pub amount: String,
    /// 3-letter currency code, defaults to [`DEFAULT_CURRENCY`].
    pub currency: String,
    /// `YYYY/MM/DD` token, verbatim.
    pub date: Option<String>,
    /// `HH:MM:SS` token, verbatim.
    pub time: Option<String>,
    /// Transaction reference token, verbatim.
    pub code: Option<String>,
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status: {}, amount: {} {}, date: {}, time: {}, code: {}",
            self.status.as_deref().unwrap_or("-"),
            if self.amount.is_empty() { "-" } else { &self.amount },
            self.currency,
            self.date.as_deref().unwrap_or("-"),
            self.time.as_deref().unwrap_or("-"),
            self.code.as_deref().unwrap_or("-"),
        )
    }
}

/// Extracts a [`TransactionRecord`] from raw OCR text.
///
/// Returns `None` when no token equals [`RECEIPT_GATE`] — the text is not a
/// receipt and no partial record is fabricated for it. Otherwise every field
/// is filled by a first-match-wins scan over the whitespace-separated tokens;
/// absent fields fall back to their defaults.
///
/// The function is pure: same input, same record, no side effects.
pub fn extract(raw_text: &str) -> Option<TransactionRecord> {
    let tokens: Vec<&str> = raw_text.split_whitespace().collect();

    let status = tokens.iter().copied().find(|t| *t == RECEIPT_GATE)?;

    let currency = tokens
        .iter()
        .find_map(|t| CURRENCY_REGEX.captures(t).map(|c| c[1].to_string()))
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let amount = tokens
        .iter()
        .find_map(|t| AMOUNT_REGEX.captures(t).map(|c| c[1].to_string()))
        .unwrap_or_default();

    let date = tokens.iter().copied().find(|t| DATE_REGEX.is_match(t)).map(str::to_string);
    let time = tokens.iter().copied().find(|t| TIME_REGEX.is_match(t)).map(str::to_string);
    let code = tokens.iter().copied().find(|t| CODE_REGEX.is_match(t)).map(str::to_string);

    Some(TransactionRecord {
        status: Some(status.to_string()),
        amount,
        currency,
        date,
        time,
        code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_full_receipt() {
        let text = "Transaction Successful Transfer Money -1,250.75(ETB) 2024/05/01 14:32:05 BD12XQ7F9Z";
        let record = extract(text).unwrap();

        assert_eq!(record.status.as_deref(), Some("Successful"));
        assert_eq!(record.amount, "1,250.75");
        assert_eq!(record.currency, "ETB");
        assert_eq!(record.date.as_deref(), Some("2024/05/01"));
        assert_eq!(record.time.as_deref(), Some("14:32:05"));
        assert_eq!(record.code.as_deref(), Some("BD12XQ7F9Z"));
    }

    #[test]
    fn non_receipt_text_yields_nothing() {
        assert_eq!(extract("hello world"), None);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("   \n\t  "), None);
    }

    #[test]
    fn gate_must_be_a_whole_token() {
        // "Successfully" contains the marker as a substring but is not the token
        assert_eq!(extract("Transfer Successfully completed"), None);
    }

    #[test]
    fn gate_alone_yields_defaults() {
        let record = extract("Successful").unwrap();

        assert_eq!(record.status.as_deref(), Some("Successful"));
        assert_eq!(record.amount, "");
        assert_eq!(record.currency, DEFAULT_CURRENCY);
        assert_eq!(record.date, None);
        assert_eq!(record.time, None);
        assert_eq!(record.code, None);
    }

    #[test]
    fn first_currency_token_wins() {
        let record = extract("Successful (USD) (EUR)").unwrap();
        assert_eq!(record.currency, "USD");
    }

    #[test]
    fn first_amount_token_wins() {
        let record = extract("Successful 10.50 999.99").unwrap();
        assert_eq!(record.amount, "10.50");
    }

    #[test]
    fn amount_sign_is_discarded() {
        let record = extract("Successful —45.00").unwrap();
        assert_eq!(record.amount, "45.00");
    }

    #[test]
    fn standalone_currency_token_is_cleaned() {
        let record = extract("Successful 13.00 (ETB)").unwrap();
        assert_eq!(record.currency, "ETB");
        assert_eq!(record.amount, "13.00");
    }

    #[test]
    fn unknown_currency_falls_back_to_default() {
        let record = extract("Successful (XYZ) 5.00").unwrap();
        assert_eq!(record.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn tokens_pool_across_lines() {
        // OCR line breaks are not field separators
        let record = extract("Successful\n2024/05/01\n14:32:05").unwrap();
        assert_eq!(record.date.as_deref(), Some("2024/05/01"));
        assert_eq!(record.time.as_deref(), Some("14:32:05"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Successful -1,250.75(ETB) 2024/05/01 14:32:05 BD12XQ7F9Z";
        assert_eq!(extract(text), extract(text));
    }
}
