use crate::models::code_kind::{CodeKind, ScanCode};
use regex::Regex;
use std::sync::LazyLock;

/// Typed by hand: letter, two digits, one alphanumeric, five digits.
static MANUAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{2}[A-Z0-9][0-9]{5}$").unwrap());

/// Printed barcode: the manual code plus one trailing format digit.
static BARCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{2}[A-Z0-9][0-9]{6}$").unwrap());

static NFC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Classify a raw scan into its code kind and the value stored in the roster.
///
/// Rules are tried in order and the first match wins. A barcode resolves to
/// the same identifier as its hand-typed form, so its last character is
/// dropped.
pub fn classify(raw: &str) -> ScanCode {
    let trimmed = raw.trim();
    let upper = trimmed.to_ascii_uppercase();

    if MANUAL_RE.is_match(&upper) {
        return ScanCode::new(CodeKind::ManualAlnum, upper);
    }

    if BARCODE_RE.is_match(&upper) {
        let mut value = upper;
        value.pop();
        return ScanCode::new(CodeKind::BarcodeAlnum, value);
    }

    if NFC_RE.is_match(&upper) {
        return ScanCode::new(CodeKind::NfcNumeric, trimmed.to_string());
    }

    ScanCode::invalid(trimmed)
}
