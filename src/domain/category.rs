use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// Income/expense category buckets, stored as a single object blob.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CategoryBook {
    pub income: Vec<Category>,
    pub expense: Vec<Category>,
}

impl CategoryBook {
    /// A freshly initialized store has no categories at all; seed the stock
    /// set so the household form has something to offer.
    pub fn seed_defaults(&mut self) {
        if !self.income.is_empty() || !self.expense.is_empty() {
            return;
        }
        for name in ["Food", "Transport", "Entertainment", "Daily goods"] {
            let id = self.next_id();
            self.expense.push(Category {
                id,
                name: name.to_string(),
            });
        }
        for name in ["Salary", "Extra income"] {
            let id = self.next_id();
            self.income.push(Category {
                id,
                name: name.to_string(),
            });
        }
    }

    /// Inserts `name` into the expense bucket unless a category of that exact
    /// name is already present. Returns whether an insert happened.
    pub fn ensure_expense(&mut self, name: &str) -> bool {
        if self.expense.iter().any(|c| c.name == name) {
            return false;
        }
        let id = self.next_id();
        self.expense.push(Category {
            id,
            name: name.to_string(),
        });
        true
    }

    fn next_id(&self) -> u64 {
        self.income
            .iter()
            .chain(self.expense.iter())
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}
