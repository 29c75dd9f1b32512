//! Entity kinds and their fixed field layouts.
//!
//! The header names are the canonical on-disk field names and must be
//! preserved byte-for-byte, Turkish diacritics included.

use std::fmt;

/// Store-assigned identifier field, present in every kind.
pub const ID_FIELD: &str = "id";

/// Required-on-create reference field, present in every kind.
pub const REFERENCE_FIELD: &str = "Referans ID";

/// Store-stamped modification timestamp, present in every kind.
pub const UPDATED_FIELD: &str = "Son Güncelleme";

/// Field layout of the spindle (primary asset) kind.
pub const SPINDLE_HEADERS: &[&str] = &[
    ID_FIELD,
    REFERENCE_FIELD,
    "Çalışma Saati",
    "Takılı Olduğu Makine",
    "Makinaya Takıldığı Tarih",
    UPDATED_FIELD,
];

/// Field layout of the yedek (spare asset) kind.
pub const YEDEK_HEADERS: &[&str] = &[
    ID_FIELD,
    REFERENCE_FIELD,
    "Açıklama",
    "Tamirde mi",
    "Bakıma Gönderilme",
    "Geri Dönme",
    "Söküldüğü Makine",
    "Sökülme Tarihi",
    UPDATED_FIELD,
];

/// One of the two tracked record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Rotating tool assets mounted on machines
    Spindle,
    /// Spare-part counterparts
    Yedek,
}

impl EntityKind {
    /// Field names in declared order; header row order on every write.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Spindle => SPINDLE_HEADERS,
            EntityKind::Yedek => YEDEK_HEADERS,
        }
    }

    /// Name of this kind's backing file inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            EntityKind::Spindle => "spindle_data.csv",
            EntityKind::Yedek => "yedek_data.csv",
        }
    }

    /// Source-kind tag used by the export document's `Tablo` column.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Spindle => "Spindle",
            EntityKind::Yedek => "Yedek",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
