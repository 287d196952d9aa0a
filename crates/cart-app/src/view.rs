//! Table and label rendering for the storefront.

use cart_core::{Cart, LineItem, Product, ProductCatalog};
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

impl From<&LineItem> for CartRow {
    fn from(line: &LineItem) -> Self {
        Self {
            item: line.product().name.clone(),
            quantity: line.quantity(),
            subtotal: line.subtotal().to_string(),
        }
    }
}

/// "Available Products" table
pub fn product_table(catalog: &ProductCatalog) -> String {
    let rows = catalog
        .list_products()
        .iter()
        .map(|p| ProductRow::from(p.as_ref()));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right());
    table.to_string()
}

/// "Your Cart" table; header only when the cart is empty
pub fn cart_table(cart: &Cart) -> String {
    let rows = cart.line_items().iter().map(CartRow::from);

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// The running total, e.g. `Total: ₹230`
pub fn total_label(cart: &Cart) -> String {
    format!("Total: {}", cart.total())
}

/// One-line label for a product in a selection list
pub fn product_choice(product: &Product) -> String {
    format!("{} ({})", product.name, product.price)
}

/// One-line label for a cart row in a selection list
pub fn cart_choice(line: &LineItem) -> String {
    format!(
        "{} × {} = {}",
        line.product().name,
        line.quantity(),
        line.subtotal()
    )
}
