//! Chart generation and rendering for the dashboard.
//!
//! This module creates ECharts pie charts for the report:
//! - **Income Sources**: income totals per category
//! - **Expense Categories**: expense totals per category
//! - **Income Allocation**: how income was split between expenses and savings
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.
//! A chart with nothing to show is replaced by a placeholder message.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Color, JsFunction, Label, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    dashboard::aggregation::{Allocation, CategoryTotal, Report},
    html::{HeadElement, format_currency},
};

const EXPENSES_COLOR: &str = "#ff9999";
const SAVINGS_COLOR: &str = "#66b3ff";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string, or `None` when there is no
    /// data to plot.
    pub options: Option<String>,
    /// The message shown in place of the chart when there is no data.
    pub placeholder: &'static str,
}

/// Build the three dashboard pie charts from `report`.
pub(super) fn build_dashboard_charts(report: &Report) -> [DashboardChart; 3] {
    [
        DashboardChart {
            id: "income-sources-chart",
            options: (!report.income_by_category.is_empty())
                .then(|| category_chart("Income Sources", &report.income_by_category).to_string()),
            placeholder: "No Income Data",
        },
        DashboardChart {
            id: "expense-categories-chart",
            options: (!report.expense_by_category.is_empty()).then(|| {
                category_chart("Expense Categories", &report.expense_by_category).to_string()
            }),
            placeholder: "No Expense Data",
        },
        DashboardChart {
            id: "income-allocation-chart",
            options: report
                .allocation
                .map(|allocation| allocation_chart(&allocation).to_string()),
            placeholder: "No Income Data",
        },
    ]
}

/// Renders the HTML containers for dashboard charts.
///
/// Charts without options get a placeholder message instead of an ECharts
/// container.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 lg:grid-cols-3 gap-4"
            {
                @for chart in charts {
                    @if chart.options.is_some() {
                        div
                            id=(chart.id)
                            class="min-h-[380px] rounded dark:bg-gray-100"
                        {}
                    } @else {
                        div
                            id=(chart.id)
                            data-placeholder="true"
                            class="min-h-[380px] rounded flex items-center justify-center
                                bg-white dark:bg-gray-800 text-gray-500 dark:text-gray-400"
                        {
                            (chart.placeholder)
                        }
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing. Charts without options are skipped.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .filter_map(|chart| chart.options.as_ref().map(|options| (chart.id, options)))
        .map(|(id, options)| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                id, options
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

fn category_chart(title: &str, totals: &[CategoryTotal]) -> Chart {
    let data = totals
        .iter()
        .map(|total| (to_chart_value(total.total), total.category.as_str()))
        .collect::<Vec<_>>();

    pie_chart(title).series(
        Pie::new()
            .name(title)
            .radius("60%")
            .label(percentage_label())
            .data(data),
    )
}

fn allocation_chart(allocation: &Allocation) -> Chart {
    let expenses_label = format!(
        "Expenses ({})",
        format_currency(allocation.displayed_expense)
    );
    let savings_label = format!("Savings ({})", format_currency(allocation.savings));

    pie_chart("Income Allocation")
        .color(vec![Color::from(EXPENSES_COLOR), Color::from(SAVINGS_COLOR)])
        .series(
            Pie::new()
                .name("Income Allocation")
                .radius("60%")
                .label(percentage_label())
                .data(vec![
                    (
                        to_chart_value(allocation.displayed_expense),
                        expenses_label.as_str(),
                    ),
                    (to_chart_value(allocation.savings), savings_label.as_str()),
                ]),
        )
}

fn pie_chart(title: &str) -> Chart {
    Chart::new()
        .title(Title::new().text(title).left("center"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().left("center").top("bottom"))
}

fn to_chart_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Labels each slice with its share of the pie to one decimal place.
fn percentage_label() -> Label {
    Label::new().show(true).formatter(JsFunction::new_with_args(
        "params",
        "return params.name + ': ' + params.percent.toFixed(1) + '%';",
    ))
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
        .trigger(Trigger::Item)
        .value_formatter(currency_formatter())
}

#[cfg(test)]
mod tests {
    use maud::html;
    use rust_decimal::Decimal;
    use scraper::{Html, Selector};

    use super::{build_dashboard_charts, charts_script, charts_view};
    use crate::{
        dashboard::aggregation::{Report, summarize},
        html::HeadElement,
        transaction::{NewTransaction, TransactionStore, TransactionType},
    };

    fn report_for(entries: &[(TransactionType, &str, i64)]) -> Report {
        let mut store = TransactionStore::new();
        for (type_, category, value) in entries {
            store
                .add(NewTransaction::new(*type_, category, Decimal::from(*value)))
                .expect("could not add test transaction");
        }

        summarize(store.list())
    }

    fn script_text(element: HeadElement) -> String {
        match element {
            HeadElement::ScriptSource(script) => script.into_string(),
            _ => panic!("want a script source head element"),
        }
    }

    #[test]
    fn allocation_chart_uses_labels_and_colors() {
        let report = report_for(&[
            (TransactionType::Income, "Salary", 1000),
            (TransactionType::Income, "Gifts", 200),
            (TransactionType::Expense, "Rent", 500),
            (TransactionType::Expense, "Groceries", 300),
        ]);

        let [_, _, allocation] = build_dashboard_charts(&report);
        let options = allocation.options.expect("allocation chart missing");

        assert!(options.contains("Expenses ($800.00)"));
        assert!(options.contains("Savings ($400.00)"));
        assert!(options.contains("#ff9999"));
        assert!(options.contains("#66b3ff"));
        assert!(options.contains("Income Allocation"));
    }

    #[test]
    fn category_charts_list_every_category() {
        let report = report_for(&[
            (TransactionType::Income, "Salary", 1000),
            (TransactionType::Expense, "Rent", 500),
            (TransactionType::Expense, "Fuel", 30),
        ]);

        let [income, expense, _] = build_dashboard_charts(&report);
        let income = income.options.expect("income chart missing");
        let expense = expense.options.expect("expense chart missing");

        assert!(income.contains("Income Sources"));
        assert!(income.contains("Salary"));
        assert!(expense.contains("Expense Categories"));
        assert!(expense.contains("Rent"));
        assert!(expense.contains("Fuel"));
    }

    #[test]
    fn charts_without_data_show_placeholders() {
        let report = report_for(&[(TransactionType::Expense, "Rent", 500)]);

        let charts = build_dashboard_charts(&report);
        let markup = html! { (charts_view(&charts)) };
        let html = Html::parse_fragment(&markup.into_string());

        let placeholders = html
            .select(&Selector::parse("[data-placeholder]").unwrap())
            .map(|element| element.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();

        assert_eq!(placeholders, ["No Income Data", "No Income Data"]);
        assert!(
            html.select(&Selector::parse("#expense-categories-chart").unwrap())
                .next()
                .is_some()
        );
    }

    #[test]
    fn script_initializes_only_charts_with_data() {
        let report = report_for(&[(TransactionType::Income, "Salary", 1000)]);
        let charts = build_dashboard_charts(&report);

        let script = script_text(charts_script(&charts));

        assert!(script.contains("income-sources-chart"));
        assert!(script.contains("income-allocation-chart"));
        assert!(!script.contains("expense-categories-chart"));
    }
}
