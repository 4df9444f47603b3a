//! Движок ставок одной раздачи No-Limit Texas Hold'em за столом на 6 мест.
//!
//! Слои:
//! - `domain` – карты, фишки, игроки, фазы, конфиг стола;
//! - `engine` – `HandEngine`: проверка и применение действий, улицы, борд;
//! - `infra` – RNG, загрузка конфига, запись раздач и хранилище;
//! - `api` – команды, DTO и текстовый лог для панели.
//!
//! Силу рук движок не оценивает и банк не делит.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
