use std::{any::Any, error::Error};

use crate::StatusCode;

/// Расширение для ошибок кодека и доменного слоя (object-safe).
///
/// Предоставляет вспомогательные методы для работы с ошибками:
/// - извлечение статус-кода,
/// - безопасное сообщение для клиента,
/// - детализированное сообщение для логов,
/// - формирование тегов для систем наблюдаемости.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// Статус ошибки. По умолчанию [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Возвращает ошибку как [`Any`](std::any::Any) для downcast.
    fn as_any(&self) -> &dyn Any;

    /// Безопасное сообщение для клиента.
    ///
    /// Не содержит внутренних деталей (например, фрагментов сохранённых
    /// данных). Для внутренних ошибок возвращает `"Internal server error"`.
    fn client_message(&self) -> String {
        match self.status_code() {
            StatusCode::Internal => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Детализированное сообщение для логов.
    fn log_message(&self) -> String {
        format!("{self:?}")
    }

    /// Набор тегов для метрик.
    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("error_type", self.type_name()),
            ("status_code", self.status_code().to_string()),
        ]
    }

    /// Имя типа ошибки без пути модуля.
    fn type_name(&self) -> String {
        std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
            .to_string()
    }
}
