use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde_repr")]
use serde_repr::{Deserialize_repr, Serialize_repr};
#[cfg(feature = "strum")]
use strum_macros::{AsRefStr, EnumIter};

/// Коды статуса для категоризации ошибок.
///
/// # Диапазоны:
/// - 1xxx: Общие ошибки (конфигурация, инициализация)
/// - 2xxx: Ошибки данных (валидация доменных значений)
/// - 5xxx: Хранилище (повреждённые данные, прочитанные из БД)
/// - 6xxx: IO
/// - 8xxx: Ошибки кодека (декодирование composite-литералов)
///
/// `num_enum::TryFromPrimitive` даёт `TryFrom<u32>`.
#[cfg_attr(feature = "strum", derive(AsRefStr, EnumIter))]
#[cfg_attr(feature = "serde_repr", derive(Serialize_repr, Deserialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 1xxx: Общие ошибки ===
    Internal = 1003,
    InvalidConfig = 1006,

    // === 2xxx: Ошибки данных ===
    InvalidValue = 2004,

    // === 5xxx: Хранилище ===
    CorruptedData = 5002,

    // === 6xxx: IO ===
    UnexpectedEof = 6007,

    // === 8xxx: Кодек ===
    InvalidInteger = 8005,
    SizeLimit = 8007,
    DepthLimit = 8008,
    DecodingError = 8011,
    UnknownTag = 8012,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    /// Числовое представление кода статуса.
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Ошибка в данных, пришедших от клиента (диапазон 2xxx).
    pub fn is_client_error(&self) -> bool {
        (2000..=4999).contains(&self.code())
    }

    /// Внутренняя или инфраструктурная ошибка (диапазоны 1xxx и 5xxx..7xxx).
    pub fn is_server_error(&self) -> bool {
        matches!(self.code(), 1000..=1999 | 5000..=7999)
    }

    /// Ошибка кодека (диапазон 8xxx).
    pub fn is_codec_error(&self) -> bool {
        (8000..=8999).contains(&self.code())
    }

    /// HTTP-статус для слоя, который отдаёт ошибку наружу.
    ///
    /// Повреждённая запись в БД не является ошибкой клиента, поэтому всё,
    /// кроме `InvalidValue`, отдаётся как 500.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidValue => 400,
            _ => 500,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        #[cfg(feature = "strum")]
        {
            write!(f, "{} ({})", self.as_ref(), self.code())
        }
        #[cfg(not(feature = "strum"))]
        {
            write!(f, "{:?} ({})", self, self.code())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
