//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - загрузка конфига стола;
//! - маппинг движка в записи раздач;
//! - хранилище истории и расчёт выигрышей без шоудауна.

pub mod config;
pub mod mapping;
pub mod persistence;
pub mod rng;
pub mod settlement;

pub use config::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
pub use settlement::*;
