//! The summary block showing the three aggregate totals.

use maud::{Markup, html};

use crate::{dashboard::aggregation::Summary, html::format_currency};

/// Renders the summary as three labeled currency lines.
pub(super) fn summary_view(summary: &Summary) -> Markup {
    html! {
        div class="text-white text-lg mb-6"
        {
            p class="mb-2" { "Total Expenses: " (format_currency(summary.total_expense)) }
            p class="mb-2" { "Total Income: " (format_currency(summary.total_income)) }
            p class="mb-2" { "Net Balance: " (format_currency(summary.net_balance)) }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dashboard::aggregation::Summary;

    use super::summary_view;

    #[test]
    fn renders_three_currency_lines() {
        let summary = Summary {
            total_expense: 50.0,
            total_income: 200.0,
            net_balance: 150.0,
        };

        let html = summary_view(&summary).into_string();

        assert!(html.contains("Total Expenses: $50.00"), "got: {html}");
        assert!(html.contains("Total Income: $200.00"), "got: {html}");
        assert!(html.contains("Net Balance: $150.00"), "got: {html}");
    }

    #[test]
    fn renders_zeros_for_default_summary() {
        let html = summary_view(&Summary::default()).into_string();

        assert_eq!(html.matches("$0.00").count(), 3, "got: {html}");
    }
}
