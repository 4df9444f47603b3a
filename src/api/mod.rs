//! Внешний API движка раздачи.
//!
//! Здесь описываются:
//! - команды (commands.rs) – то, что меняет состояние (новая раздача, действие, смена улицы);
//! - запросы (queries.rs) – только чтение: вид стола и активные кнопки;
//! - текстовый лог стола (narration.rs);
//! - DTO (dto.rs) – структуры для фронта и записи раздач;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod narration;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use narration::*;
pub use queries::*;
