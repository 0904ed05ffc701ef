//! Read-time reconciliation of budget items against transactions.
//!
//! Transactions are grouped once by category, then every item looks up its
//! category total. Items sharing a category each receive the full total.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{BudgetItem, Category, EngineError, ReconciledItem, ResultEngine, Transaction};

/// Sum transaction amounts per category.
pub fn totals_by_category<'a, I>(transactions: I) -> ResultEngine<HashMap<Uuid, i64>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: HashMap<Uuid, i64> = HashMap::new();
    for tx in transactions {
        let total = totals.entry(tx.category_id).or_insert(0);
        *total = total.checked_add(tx.amount_minor).ok_or_else(|| {
            EngineError::InvalidAmount(format!(
                "total overflow for category {}",
                tx.category_id
            ))
        })?;
    }
    Ok(totals)
}

/// Compute the actual amount of every item from the period's transactions.
///
/// The caller is responsible for restricting `transactions` to the budget
/// period. Items whose category has no transaction report `0`.
pub fn reconcile(
    items: Vec<(BudgetItem, Category)>,
    transactions: &[Transaction],
) -> ResultEngine<Vec<ReconciledItem>> {
    let totals = totals_by_category(transactions)?;
    Ok(items
        .into_iter()
        .map(|(item, category)| ReconciledItem {
            id: item.id,
            budget_id: item.budget_id,
            planned_minor: item.planned_minor,
            actual_minor: totals.get(&item.category_id).copied().unwrap_or(0),
            category,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::CategoryKind;

    fn category(title: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind: CategoryKind::Expense,
        }
    }

    fn tx(category_id: Uuid, amount_minor: i64) -> Transaction {
        let date = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        Transaction {
            id: Uuid::new_v4(),
            amount_minor,
            description: None,
            date,
            user_id: Uuid::new_v4(),
            category_id,
            kind: CategoryKind::Expense,
            created_at: date,
        }
    }

    fn item(category: &Category, budget_id: Uuid, planned_minor: i64) -> (BudgetItem, Category) {
        (
            BudgetItem::new(planned_minor, Uuid::new_v4(), category.id, budget_id),
            category.clone(),
        )
    }

    #[test]
    fn sums_only_matching_category() {
        let budget_id = Uuid::new_v4();
        let groceries = category("Groceries");
        let rent = category("Rent");
        let txs = vec![tx(groceries.id, 100), tx(groceries.id, 50), tx(rent.id, 9999)];

        let items = reconcile(vec![item(&groceries, budget_id, 500)], &txs).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].actual_minor, 150);
        assert_eq!(items[0].planned_minor, 500);
        assert_eq!(items[0].category, groceries);
    }

    #[test]
    fn item_without_transactions_stays_at_zero() {
        let budget_id = Uuid::new_v4();
        let groceries = category("Groceries");
        let pharmacy = category("Pharmacy");
        let txs = vec![tx(groceries.id, 100)];

        let items = reconcile(
            vec![item(&groceries, budget_id, 500), item(&pharmacy, budget_id, 80)],
            &txs,
        )
        .unwrap();

        let pharmacy_item = items
            .iter()
            .find(|i| i.category.id == pharmacy.id)
            .unwrap();
        assert_eq!(pharmacy_item.actual_minor, 0);
    }

    #[test]
    fn duplicate_category_items_each_get_full_total() {
        let budget_id = Uuid::new_v4();
        let groceries = category("Groceries");
        let txs = vec![tx(groceries.id, 70), tx(groceries.id, 30)];

        let items = reconcile(
            vec![item(&groceries, budget_id, 50), item(&groceries, budget_id, 60)],
            &txs,
        )
        .unwrap();

        assert!(items.iter().all(|i| i.actual_minor == 100));
    }

    #[test]
    fn signs_are_kept_as_stored() {
        let salary = category("Salary");
        let txs = vec![tx(salary.id, 3000), tx(salary.id, -500)];
        let totals = totals_by_category(&txs).unwrap();
        assert_eq!(totals[&salary.id], 2500);
    }

    #[test]
    fn overflow_is_reported() {
        let groceries = category("Groceries");
        let txs = vec![tx(groceries.id, i64::MAX), tx(groceries.id, 1)];
        assert!(matches!(
            totals_by_category(&txs),
            Err(EngineError::InvalidAmount(_))
        ));
    }
}
