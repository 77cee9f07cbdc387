use shared::domain::Product;

use crate::form::FormFields;

/// Listing rows in the exact order the service returned them. No client-side
/// sorting is applied.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    rows: Vec<Product>,
}

impl ResultsTable {
    /// Replaces the table with `products` and promotes the first row to the
    /// active record by writing it through the form. An empty listing still
    /// empties the table but leaves the form exactly as it was.
    pub fn render(&mut self, products: &[Product], form: &mut FormFields) {
        self.rows = products.to_vec();
        if let Some(first) = products.first() {
            form.write(first);
        }
    }

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }
}
