use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use log::info;
use thiserror::Error;
use uuid::Uuid;

use crate::api::dto::{HandRecord, HandSubmission};
use crate::api::errors::SubmissionError;

/// Ошибки хранилища раздач.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("запись раздачи не прошла проверку: {0}")]
    Invalid(#[from] SubmissionError),

    #[error("раздача {0} не найдена")]
    NotFound(Uuid),

    #[error("раздача {0} уже сохранена")]
    AlreadyExists(Uuid),
}

/// Абстракция хранилища истории раздач.
///
/// Движок его не вызывает: снимок делает владелец движка, когда раздача
/// окончена. Ошибка сохранения не откатывает состояние движка.
pub trait HandStore {
    /// Сохранить раздачу. `winnings` – если посчитаны снаружи, иначе пусто.
    fn save(
        &mut self,
        submission: HandSubmission,
        winnings: Option<BTreeMap<String, i64>>,
    ) -> Result<Uuid, StoreError>;

    fn find_by_id(&self, id: Uuid) -> Option<HandRecord>;

    /// Раздачи от новых к старым, с пагинацией.
    fn find_all(&self, limit: usize, offset: usize) -> Vec<HandRecord>;

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryHandStore {
    hands: HashMap<Uuid, HandRecord>,
    /// Порядок вставки – для стабильной сортировки при равном `created_at`.
    order: Vec<Uuid>,
}

impl InMemoryHandStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Вставить готовую запись (например, импорт истории).
    pub fn insert_record(&mut self, record: HandRecord) -> Result<(), StoreError> {
        if self.hands.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }
        self.order.push(record.id);
        self.hands.insert(record.id, record);
        Ok(())
    }
}

impl HandStore for InMemoryHandStore {
    fn save(
        &mut self,
        submission: HandSubmission,
        winnings: Option<BTreeMap<String, i64>>,
    ) -> Result<Uuid, StoreError> {
        submission.validate()?;

        let id = Uuid::new_v4();
        let record = HandRecord {
            id,
            stacks: submission.stacks,
            player_cards: submission.player_cards,
            action_sequence: submission.actions,
            winnings: winnings.unwrap_or_default(),
            dealer_position: submission.dealer_position,
            small_blind_position: submission.small_blind_position,
            big_blind_position: submission.big_blind_position,
            created_at: Utc::now(),
        };
        self.insert_record(record)?;

        info!("hand {} saved ({} total)", id, self.hands.len());
        Ok(id)
    }

    fn find_by_id(&self, id: Uuid) -> Option<HandRecord> {
        self.hands.get(&id).cloned()
    }

    fn find_all(&self, limit: usize, offset: usize) -> Vec<HandRecord> {
        let mut records: Vec<(usize, &HandRecord)> = self
            .order
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| self.hands.get(id).map(|r| (pos, r)))
            .collect();

        // Новые сверху; при одинаковом времени – позже вставленные.
        records.sort_by(|(pa, a), (pb, b)| b.created_at.cmp(&a.created_at).then(pb.cmp(pa)));

        records
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(_, r)| r.clone())
            .collect()
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        if self.hands.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.order.retain(|x| *x != id);
        Ok(())
    }
}
