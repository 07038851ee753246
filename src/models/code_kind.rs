use serde::Serialize;

/// Shape of a scanned code, decided by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CodeKind {
    ManualAlnum,
    BarcodeAlnum,
    NfcNumeric,
    Invalid,
}

/// Roster column family a code kind is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CodeColumn {
    Barcode,
    Nfc,
}

impl CodeKind {
    pub fn column(&self) -> Option<CodeColumn> {
        match self {
            CodeKind::ManualAlnum | CodeKind::BarcodeAlnum => Some(CodeColumn::Barcode),
            CodeKind::NfcNumeric => Some(CodeColumn::Nfc),
            CodeKind::Invalid => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::ManualAlnum => "manual",
            CodeKind::BarcodeAlnum => "barcode",
            CodeKind::NfcNumeric => "nfc",
            CodeKind::Invalid => "invalid",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "manual" => Some(CodeKind::ManualAlnum),
            "barcode" => Some(CodeKind::BarcodeAlnum),
            "nfc" => Some(CodeKind::NfcNumeric),
            "invalid" => Some(CodeKind::Invalid),
            _ => None,
        }
    }
}

/// A classified scan. For `Invalid` the value is the raw (trimmed) input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanCode {
    pub kind: CodeKind,
    pub value: String,
}

impl ScanCode {
    pub fn new(kind: CodeKind, value: String) -> Self {
        Self { kind, value }
    }

    pub fn invalid(raw: &str) -> Self {
        Self {
            kind: CodeKind::Invalid,
            value: raw.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.kind != CodeKind::Invalid
    }
}
