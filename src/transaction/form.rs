use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
    transaction::core::{Category, TransactionType},
};

/// The form for submitting a new transaction.
///
/// `default_date` pre-fills the date input, typically with today's date in
/// the server's configured timezone. The date is otherwise unconstrained.
pub fn transaction_form(default_date: Date) -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
        {
            fieldset class="mb-4"
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    div class="flex items-center gap-2"
                    {
                        input
                            name="type"
                            id="transaction-type-expense"
                            type="radio"
                            value=(TransactionType::Expense)
                            checked
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for="transaction-type-expense"
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Expense"
                        }
                    }

                    div class="flex items-center gap-2"
                    {
                        input
                            name="type"
                            id="transaction-type-income"
                            type="radio"
                            value=(TransactionType::Income)
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for="transaction-type-income"
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Income"
                        }
                    }
                }
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in Category::ALL {
                        @if category == Category::Food {
                            option value=(category) selected { (category) }
                        } @else {
                            option value=(category) { (category) }
                        }
                    }
                }
            }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description (Optional)"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(default_date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}
