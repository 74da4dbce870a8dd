//! Expense service
//!
//! Business logic for expenses and budgets. The service holds the decrypted
//! [`AppData`] for the session and writes it back through the gateway after
//! every change. Concurrent writers are not merged: the last save wins.
//!
//! Changes are made on a copy of the data and only take effect once the save
//! succeeds, so a failed write leaves the session as it was.

use tracing::debug;

use crate::crypto::Password;
use crate::error::{VaultError, VaultResult};
use crate::models::{normalize_category, AppData, Expense, ExpenseId, ExpenseUpdate, NewExpense};
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Service for expense and budget management
pub struct ExpenseService<'a, S: KeyValueStore> {
    gateway: &'a mut PersistenceGateway<S>,
    password: &'a Password,
    data: AppData,
}

impl<'a, S: KeyValueStore> ExpenseService<'a, S> {
    /// Unlock the stored data with `password`
    ///
    /// Requires an established password. Opening a fresh store would otherwise
    /// let the first save set the password without the setup policy.
    pub fn open(gateway: &'a mut PersistenceGateway<S>, password: &'a Password) -> VaultResult<Self> {
        if !gateway.is_setup()? {
            return Err(VaultError::NotSetup);
        }
        let data = gateway.unlock(password)?;
        Ok(Self {
            gateway,
            password,
            data,
        })
    }

    /// The current data
    pub fn data(&self) -> &AppData {
        &self.data
    }

    fn commit(&mut self, next: AppData) -> VaultResult<()> {
        self.gateway.save(&next, self.password)?;
        self.data = next;
        Ok(())
    }

    // === Expenses ===

    /// Record a new expense
    pub fn add_expense(&mut self, input: NewExpense) -> VaultResult<Expense> {
        let mut expense = Expense::new(input);
        expense.category = normalize_category(&expense.category);
        expense
            .validate()
            .map_err(|e| VaultError::Validation(e.to_string()))?;

        let mut next = self.data.clone();
        next.expenses.push(expense.clone());
        self.commit(next)?;

        debug!(recurring = expense.is_recurring, "Added expense");
        Ok(expense)
    }

    /// Apply a patch to an existing expense
    pub fn update_expense(&mut self, id: &ExpenseId, update: ExpenseUpdate) -> VaultResult<Expense> {
        let index = self.index_of(id)?;

        let mut updated = self.data.expenses[index].clone();
        updated.apply(update);
        updated.category = normalize_category(&updated.category);
        updated
            .validate()
            .map_err(|e| VaultError::Validation(e.to_string()))?;

        let mut next = self.data.clone();
        next.expenses[index] = updated.clone();
        self.commit(next)?;

        debug!("Updated expense");
        Ok(updated)
    }

    /// Delete an expense
    pub fn delete_expense(&mut self, id: &ExpenseId) -> VaultResult<Expense> {
        let index = self.index_of(id)?;
        let mut next = self.data.clone();
        let removed = next.expenses.remove(index);
        self.commit(next)?;

        debug!("Deleted expense");
        Ok(removed)
    }

    /// Find an expense by full id or id prefix
    pub fn find(&self, query: &str) -> VaultResult<&Expense> {
        self.data
            .find_expense(query)
            .ok_or_else(|| VaultError::expense_not_found(query))
    }

    /// All expenses, newest date first
    pub fn list_expenses(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.data.expenses.iter().collect();
        expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        expenses
    }

    /// Recurring expenses, ordered by day of month
    pub fn recurring_expenses(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.data.recurring().collect();
        expenses.sort_by_key(|e| e.recurring_day.unwrap_or(0));
        expenses
    }

    fn index_of(&self, id: &ExpenseId) -> VaultResult<usize> {
        self.data
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| VaultError::expense_not_found(id.as_str()))
    }

    // === Budgets ===

    /// Set the monthly budget for a category
    pub fn set_budget(&mut self, category: &str, amount: f64) -> VaultResult<()> {
        let category = normalize_category(category);
        if category.is_empty() {
            return Err(VaultError::Validation("Category cannot be empty".into()));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(VaultError::Validation(format!(
                "Budget must be a non-negative number (got {})",
                amount
            )));
        }

        let mut next = self.data.clone();
        next.budgets.insert(category, amount);
        self.commit(next)?;

        debug!("Set budget");
        Ok(())
    }

    /// Remove the budget for a category
    pub fn remove_budget(&mut self, category: &str) -> VaultResult<f64> {
        let category = normalize_category(category);
        let mut next = self.data.clone();
        let removed = next
            .budgets
            .remove(&category)
            .ok_or_else(|| VaultError::budget_not_found(&category))?;
        self.commit(next)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (PersistenceGateway<MemoryStore>, Password) {
        let password = Password::new("correcthorse123");
        let mut gateway = PersistenceGateway::new(MemoryStore::new());
        gateway.setup(&password, &password).unwrap();
        (gateway, password)
    }

    /// Memory store whose writes can be made to fail
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: Rc<Cell<bool>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> VaultResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> VaultResult<()> {
            if self.fail_writes.get() {
                return Err(VaultError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> VaultResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_open_requires_setup() {
        let mut gateway = PersistenceGateway::new(MemoryStore::new());
        let short = Password::new("x");

        let result = ExpenseService::open(&mut gateway, &short);
        assert!(matches!(result, Err(VaultError::NotSetup)));
        assert!(!gateway.is_setup().unwrap());
        assert!(gateway.store().is_empty());
    }

    #[test]
    fn test_failed_save_leaves_session_unchanged() {
        let password = Password::new("correcthorse123");
        let fail_writes = Rc::new(Cell::new(false));
        let mut gateway = PersistenceGateway::new(FlakyStore {
            inner: MemoryStore::new(),
            fail_writes: Rc::clone(&fail_writes),
        });
        gateway.setup(&password, &password).unwrap();

        {
            let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
            let kept = service
                .add_expense(NewExpense::one_off(10.0, "Food", "Lunch", date(2024, 1, 1)))
                .unwrap();

            fail_writes.set(true);
            let failed = service.add_expense(NewExpense::one_off(
                99.0,
                "Shopping",
                "Shoes",
                date(2024, 1, 2),
            ));
            assert!(matches!(failed, Err(VaultError::Storage(_))));
            assert!(service.set_budget("Food", 50.0).is_err());
            assert!(service.delete_expense(&kept.id).is_err());
            assert_eq!(service.data().expenses.len(), 1);
            assert!(service.data().budgets.is_empty());

            // The next successful save must not carry the failed changes
            fail_writes.set(false);
            service.set_budget("Housing", 900.0).unwrap();
        }

        let data = gateway.load(&password).unwrap();
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.expenses[0].description, "Lunch");
        assert_eq!(data.budgets.len(), 1);
        assert_eq!(data.budgets.get("Housing"), Some(&900.0));
    }

    #[test]
    fn test_add_expense_persists() {
        let (mut gateway, password) = setup();
        {
            let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
            let expense = service
                .add_expense(NewExpense::one_off(42.5, "food", "Lunch", date(2024, 1, 1)))
                .unwrap();
            assert_eq!(expense.category, "Food");
        }

        let data = gateway.load(&password).unwrap();
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.expenses[0].description, "Lunch");
        assert!(gateway.is_setup().unwrap());
    }

    #[test]
    fn test_add_invalid_expense_is_rejected() {
        let (mut gateway, password) = setup();
        let mut service = ExpenseService::open(&mut gateway, &password).unwrap();

        let result = service.add_expense(NewExpense::recurring(
            10.0,
            "Food",
            "Meal kit",
            date(2024, 1, 1),
            30,
        ));
        assert!(result.unwrap_err().is_validation());
        assert!(service.data().expenses.is_empty());
    }

    #[test]
    fn test_open_with_wrong_password() {
        let (mut gateway, password) = setup();
        gateway.save(&AppData::empty(), &password).unwrap();

        let wrong = Password::new("wrongpassword");
        let result = ExpenseService::open(&mut gateway, &wrong);
        assert!(matches!(result, Err(VaultError::LoadFailed)));
    }

    #[test]
    fn test_update_expense() {
        let (mut gateway, password) = setup();
        let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
        let expense = service
            .add_expense(NewExpense::one_off(10.0, "Food", "Lunch", date(2024, 1, 1)))
            .unwrap();

        let updated = service
            .update_expense(
                &expense.id,
                ExpenseUpdate {
                    amount: Some(15.0),
                    recurring_day: Some(Some(3)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount, 15.0);
        assert!(updated.is_recurring);
        assert_eq!(service.recurring_expenses().len(), 1);
    }

    #[test]
    fn test_invalid_update_leaves_expense_unchanged() {
        let (mut gateway, password) = setup();
        let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
        let expense = service
            .add_expense(NewExpense::one_off(10.0, "Food", "Lunch", date(2024, 1, 1)))
            .unwrap();

        let result = service.update_expense(
            &expense.id,
            ExpenseUpdate {
                amount: Some(-3.0),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(service.data().expenses[0].amount, 10.0);
    }

    #[test]
    fn test_update_missing_expense() {
        let (mut gateway, password) = setup();
        let mut service = ExpenseService::open(&mut gateway, &password).unwrap();

        let result = service.update_expense(&ExpenseId::from("missing"), ExpenseUpdate::default());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_expense() {
        let (mut gateway, password) = setup();
        {
            let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
            let expense = service
                .add_expense(NewExpense::one_off(10.0, "Food", "Lunch", date(2024, 1, 1)))
                .unwrap();
            service.delete_expense(&expense.id).unwrap();
            assert!(service.delete_expense(&expense.id).unwrap_err().is_not_found());
        }

        assert!(gateway.load(&password).unwrap().expenses.is_empty());
    }

    #[test]
    fn test_list_is_newest_first() {
        let (mut gateway, password) = setup();
        let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
        service
            .add_expense(NewExpense::one_off(1.0, "Food", "Old", date(2024, 1, 1)))
            .unwrap();
        service
            .add_expense(NewExpense::one_off(2.0, "Food", "New", date(2024, 3, 1)))
            .unwrap();
        service
            .add_expense(NewExpense::one_off(3.0, "Food", "Middle", date(2024, 2, 1)))
            .unwrap();

        let names: Vec<&str> = service
            .list_expenses()
            .into_iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(names, vec!["New", "Middle", "Old"]);
    }

    #[test]
    fn test_find_by_prefix() {
        let (mut gateway, password) = setup();
        let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
        let expense = service
            .add_expense(NewExpense::one_off(1.0, "Food", "Snack", date(2024, 1, 1)))
            .unwrap();

        assert_eq!(service.find(expense.id.short()).unwrap().id, expense.id);
        assert!(service.find("zzzzzzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_budgets() {
        let (mut gateway, password) = setup();
        {
            let mut service = ExpenseService::open(&mut gateway, &password).unwrap();
            service.set_budget("food", 200.0).unwrap();
            service.set_budget("Housing", 1000.0).unwrap();
            assert!(service.set_budget("Food", -1.0).unwrap_err().is_validation());
            assert!(service.set_budget(" ", 5.0).unwrap_err().is_validation());
            assert_eq!(service.remove_budget("Housing").unwrap(), 1000.0);
            assert!(service.remove_budget("Housing").unwrap_err().is_not_found());
        }

        let data = gateway.load(&password).unwrap();
        assert_eq!(data.budgets.len(), 1);
        assert_eq!(data.budgets.get("Food"), Some(&200.0));
    }
}
