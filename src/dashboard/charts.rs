//! Chart generation and rendering for the category breakdown.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with a corresponding HTML container and JavaScript
//! initialization code.

use std::collections::HashMap;

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::category_label_and_value_pairs, html::HeadElement,
    transaction::Category,
};

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a chart.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[380px] rounded-lg bg-gray-900 p-4"
        {}
    )
}

/// Generates JavaScript initialization code for the charts on the page.
///
/// Creates a script that initializes ECharts instances with the dark theme
/// (the page is always dark) and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom, 'dark');
                    chart.setOption({});

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Builds the bar chart of summed amounts per category.
pub(super) fn category_chart(category_totals: &HashMap<Category, f64>) -> Chart {
    let (labels, values) = category_label_and_value_pairs(category_totals);

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Amount").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
