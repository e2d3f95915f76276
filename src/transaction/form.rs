//! The fields shared by the new and edit transaction forms.

use axum::extract::Query;
use maud::{Markup, html};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    endpoints,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::{MAX_AMOUNT, TransactionType},
};

pub struct TransactionFormDefaults<'a> {
    pub transaction_type: TransactionType,
    pub category: Option<&'a str>,
    pub amount: Option<Decimal>,
    pub autofocus_amount: bool,
}

impl Default for TransactionFormDefaults<'_> {
    fn default() -> Self {
        Self {
            transaction_type: TransactionType::Income,
            category: None,
            amount: None,
            autofocus_amount: false,
        }
    }
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{:.2}", amount));

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for transaction_type in [TransactionType::Income, TransactionType::Expense] {
                    @let id = format!("transaction-type-{}", transaction_type.form_value());

                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id=(id)
                            type="radio"
                            value=(transaction_type.form_value())
                            checked[transaction_type == defaults.transaction_type]
                            required
                            tabindex="0"
                            hx-get=(endpoints::CATEGORY_OPTIONS)
                            hx-trigger="change"
                            hx-target="#category"
                            hx-swap="outerHTML"
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for=(id)
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            (transaction_type)
                        }
                    }
                }
            }
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            (category_select(defaults.transaction_type, defaults.category))
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.01"
                    min="0.01"
                    max=(MAX_AMOUNT)
                    required
                    value=[amount_str.as_deref()]
                    autofocus[defaults.autofocus_amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

/// The category drop-down for `transaction_type`.
///
/// If `selected` is not one of the type's categories, the first category is
/// selected.
pub fn category_select(transaction_type: TransactionType, selected: Option<&str>) -> Markup {
    let categories = transaction_type.categories();
    let selected = selected
        .filter(|category| categories.contains(category))
        .or(categories.first().copied());

    html! {
        select
            name="category"
            id="category"
            required
            class=(FORM_TEXT_INPUT_STYLE)
        {
            @for category in categories {
                option value=(category) selected[Some(*category) == selected] { (category) }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryOptionsQuery {
    #[serde(rename = "type_")]
    transaction_type: TransactionType,
}

/// Returns the category drop-down for the transaction type in the query string.
///
/// The transaction forms request this whenever the selected type changes.
pub async fn get_category_options(Query(query): Query<CategoryOptionsQuery>) -> Markup {
    category_select(query.transaction_type, None)
}
