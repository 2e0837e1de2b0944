use super::{Change, ChangeSet};
use crate::core::{EntityKind, FinancialRecord, Record};
use crate::storage::StoreState;

/// Working copy of the store for one logical write.
///
/// All mutations land on a private clone of the state. The owner either
/// takes the result with [`StoreTx::into_parts`] and swaps it in, or drops
/// the transaction and nothing is observable.
pub struct StoreTx {
    state: StoreState,
    changes: ChangeSet,
}

impl StoreTx {
    pub fn begin(base: &StoreState) -> Self {
        Self {
            state: base.clone(),
            changes: ChangeSet::new(),
        }
    }

    /// State as seen from inside the transaction, including its own writes
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    pub fn insert<T: Record>(&mut self, record: T) {
        let id = record.id().to_string();
        T::collection_mut(&mut self.state).push(record);
        self.changes.push(Change::Inserted { entity: T::KIND, id });
    }

    pub fn update<T: Record>(&mut self, id: &str, patch: &T::Patch) -> usize {
        let touched = T::collection_mut(&mut self.state).update(id, patch);
        for _ in 0..touched {
            self.changes.push(Change::Updated {
                entity: T::KIND,
                id: id.to_string(),
            });
        }
        touched
    }

    pub fn remove_where<T, F>(&mut self, predicate: F) -> Vec<String>
    where
        T: Record,
        F: Fn(&T) -> bool,
    {
        let removed = T::collection_mut(&mut self.state).remove_where(predicate);
        for id in &removed {
            self.changes.push(Change::Removed {
                entity: T::KIND,
                id: id.clone(),
            });
        }
        removed
    }

    pub fn replace_all<T: Record>(&mut self, records: Vec<T>) {
        let count = records.len();
        T::collection_mut(&mut self.state).replace(records);
        self.changes.push(Change::Replaced { entity: T::KIND, count });
    }

    pub fn push_financial(&mut self, record: FinancialRecord) {
        let id = format!("{}-{}", record.year, record.month);
        self.state.financials.push_back(record);
        self.changes.push(Change::Inserted {
            entity: EntityKind::FinancialRecord,
            id,
        });
    }

    pub fn replace_financials(&mut self, records: Vec<FinancialRecord>) {
        let count = records.len();
        self.state.financials = records.into_iter().collect();
        self.changes.push(Change::Replaced {
            entity: EntityKind::FinancialRecord,
            count,
        });
    }

    pub fn set_company_name(&mut self, name: String) {
        self.state.company_name = name;
        self.changes.push(Change::SettingChanged { key: "companyName" });
    }

    pub fn into_parts(self) -> (StoreState, ChangeSet) {
        (self.state, self.changes)
    }
}
