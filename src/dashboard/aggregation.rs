//! Transaction aggregation for the summary block and category chart.

use std::collections::HashMap;

use crate::transaction::{Category, Transaction, TransactionType};

/// The three aggregate totals displayed in the summary block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct Summary {
    /// The sum of amounts of all expense transactions.
    pub total_expense: f64,
    /// The sum of amounts of all income transactions.
    pub total_income: f64,
    /// Total income minus total expenses.
    pub net_balance: f64,
}

/// Computes the summary totals over `transactions`.
///
/// The transaction type decides which total an amount counts towards,
/// regardless of the amount's sign. An empty slice yields all zeros.
pub(super) fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_expense = 0.0;
    let mut total_income = 0.0;

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Expense => total_expense += transaction.amount,
            TransactionType::Income => total_income += transaction.amount,
        }
    }

    Summary {
        total_expense,
        total_income,
        net_balance: total_income - total_expense,
    }
}

/// Aggregates transaction amounts by category.
///
/// Expenses and income both contribute to a category's sum.
///
/// # Returns
/// HashMap mapping each category to the sum of its transaction amounts.
pub(super) fn by_category(transactions: &[Transaction]) -> HashMap<Category, f64> {
    let mut totals = HashMap::new();

    for transaction in transactions {
        *totals.entry(transaction.category).or_insert(0.0) += transaction.amount;
    }

    totals
}

/// Converts the category totals into labels and values for charting.
///
/// Categories appear in their fixed display order; categories with no
/// transactions are skipped.
pub(super) fn category_label_and_value_pairs(
    totals: &HashMap<Category, f64>,
) -> (Vec<String>, Vec<f64>) {
    let mut labels = Vec::new();
    let mut values = Vec::new();

    for category in Category::ALL {
        if let Some(total) = totals.get(&category) {
            labels.push(category.to_string());
            values.push(*total);
        }
    }

    (labels, values)
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::transaction::{Category, Transaction, TransactionType};

    use super::{Summary, by_category, category_label_and_value_pairs, summarize};

    fn create_test_transaction(
        id: i64,
        amount: f64,
        transaction_type: TransactionType,
        category: Category,
        date: Date,
    ) -> Transaction {
        Transaction {
            id,
            amount,
            transaction_type,
            category,
            description: String::new(),
            date,
        }
    }

    #[test]
    fn summarize_handles_empty_input() {
        let result = summarize(&[]);

        assert_eq!(
            result,
            Summary {
                total_expense: 0.0,
                total_income: 0.0,
                net_balance: 0.0
            }
        );
    }

    #[test]
    fn summarize_splits_totals_by_type() {
        let transactions = vec![
            create_test_transaction(
                1,
                50.0,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 01 - 01),
            ),
            create_test_transaction(
                2,
                200.0,
                TransactionType::Income,
                Category::Food,
                date!(2024 - 01 - 02),
            ),
        ];

        let result = summarize(&transactions);

        assert_eq!(result.total_expense, 50.0);
        assert_eq!(result.total_income, 200.0);
        assert_eq!(result.net_balance, 150.0);
    }

    #[test]
    fn summarize_uses_the_type_field_not_the_sign() {
        let transactions = vec![
            create_test_transaction(
                1,
                -25.0,
                TransactionType::Expense,
                Category::Utilities,
                date!(2024 - 03 - 01),
            ),
            create_test_transaction(
                2,
                100.0,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 03 - 02),
            ),
        ];

        let result = summarize(&transactions);

        assert_eq!(result.total_expense, 75.0);
        assert_eq!(result.total_income, 0.0);
        assert_eq!(result.net_balance, -75.0);
    }

    #[test]
    fn net_balance_is_income_minus_expense_exactly() {
        let transactions = vec![
            create_test_transaction(
                1,
                0.1,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 01 - 01),
            ),
            create_test_transaction(
                2,
                0.2,
                TransactionType::Income,
                Category::Food,
                date!(2024 - 01 - 01),
            ),
        ];

        let result = summarize(&transactions);

        assert_eq!(result.net_balance, result.total_income - result.total_expense);
    }

    #[test]
    fn by_category_groups_regardless_of_type() {
        let transactions = vec![
            create_test_transaction(
                1,
                50.0,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 01 - 01),
            ),
            create_test_transaction(
                2,
                200.0,
                TransactionType::Income,
                Category::Food,
                date!(2024 - 01 - 02),
            ),
            create_test_transaction(
                3,
                15.5,
                TransactionType::Expense,
                Category::Transportation,
                date!(2024 - 01 - 03),
            ),
        ];

        let result = by_category(&transactions);

        assert_eq!(result.len(), 2);
        assert_eq!(result[&Category::Food], 250.0);
        assert_eq!(result[&Category::Transportation], 15.5);
    }

    #[test]
    fn by_category_totals_sum_to_total_amount() {
        let transactions = vec![
            create_test_transaction(
                1,
                50.0,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 01 - 01),
            ),
            create_test_transaction(
                2,
                200.0,
                TransactionType::Income,
                Category::Entertainment,
                date!(2024 - 01 - 02),
            ),
            create_test_transaction(
                3,
                -12.5,
                TransactionType::Expense,
                Category::Utilities,
                date!(2024 - 01 - 03),
            ),
        ];

        let category_sum: f64 = by_category(&transactions).values().sum();
        let amount_sum: f64 = transactions.iter().map(|t| t.amount).sum();

        assert_eq!(category_sum, amount_sum);
    }

    #[test]
    fn by_category_handles_empty_input() {
        let result = by_category(&[]);
        assert!(result.is_empty());
    }

    #[test]
    fn label_and_value_pairs_follow_display_order() {
        let transactions = vec![
            create_test_transaction(
                1,
                30.0,
                TransactionType::Expense,
                Category::Utilities,
                date!(2024 - 01 - 01),
            ),
            create_test_transaction(
                2,
                50.0,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 01 - 02),
            ),
        ];

        let (labels, values) = category_label_and_value_pairs(&by_category(&transactions));

        assert_eq!(labels, vec!["Food", "Utilities"]);
        assert_eq!(values, vec![50.0, 30.0]);
    }
}
