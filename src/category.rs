//! The fixed category vocabularies for income and expenses.

/// The categories an income transaction may use, in display order.
pub const INCOME_CATEGORIES: [&str; 11] = [
    "Salary",
    "Business/Profession",
    "Interest",
    "Dividends",
    "Capital Gains",
    "Rental",
    "Other Asset Income",
    "Refunds/Reimbursements",
    "Gifts",
    "Transfers In",
    "Other/One time",
];

/// The categories an expense transaction may use, in display order.
pub const EXPENSE_CATEGORIES: [&str; 19] = [
    "Rent",
    "Home Loan",
    "Vehicle loan",
    "Transport",
    "Outside Food",
    "Groceries",
    "Utilities",
    "Insurance",
    "Health",
    "Family & Education",
    "Lifestyle",
    "Travel",
    "Fuel",
    "Taxes",
    "Savings & Investments",
    "House help & Services",
    "One-time",
    "Transfers Out",
    "Other/One time",
];
