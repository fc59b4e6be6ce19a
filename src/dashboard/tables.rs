//! The table view that lists every transaction.

use maud::{Markup, html};

use crate::{
    html::{
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_EVEN_STYLE, TABLE_ROW_ODD_STYLE,
        format_currency,
    },
    transaction::Transaction,
};

/// The table column headers, in their fixed display order.
const COLUMNS: [&str; 6] = ["ID", "Amount", "Type", "Category", "Description", "Date"];

/// Renders the full transaction set as a table, one row per transaction.
pub(super) fn transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        div class="overflow-x-auto bg-gray-800 rounded-lg shadow-md p-4"
        {
            table class="min-w-full divide-y divide-gray-600"
            {
                thead
                {
                    tr
                    {
                        @for column in COLUMNS {
                            th class=(TABLE_HEADER_STYLE) { (column) }
                        }
                    }
                }

                tbody
                {
                    @for (index, transaction) in transactions.iter().enumerate() {
                        tr class=(if index % 2 == 0 { TABLE_ROW_EVEN_STYLE } else { TABLE_ROW_ODD_STYLE })
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.id) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
                            td class=(TABLE_CELL_STYLE) { (transaction.transaction_type) }
                            td class=(TABLE_CELL_STYLE) { (transaction.category) }
                            td class=(TABLE_CELL_STYLE) { (transaction.description) }
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                        }
                    }
                }
            }
        }
    }
}
