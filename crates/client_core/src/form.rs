use shared::domain::Product;

/// Governs whether the identifier field survives [`FormFields::clear`].
///
/// Clearing always blanks the ten non-identifier fields; the identifier is a
/// separate, named decision made once when the controller is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierClearPolicy {
    /// Blank the identifier together with every other field.
    #[default]
    Blank,
    /// Keep the identifier so the same record can be fetched again.
    Preserve,
}

/// The editable form: one string slot per product field.
///
/// `read` and `write` move whole records; `set`/`get` edit single slots by
/// wire name for adapters that bind individual widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    record: Product,
    policy: IdentifierClearPolicy,
}

impl FormFields {
    pub fn new(policy: IdentifierClearPolicy) -> Self {
        Self {
            record: Product::default(),
            policy,
        }
    }

    /// Gathers the current field values into a record. Untouched fields
    /// come back as empty strings, never as an absent value.
    pub fn read(&self) -> Product {
        self.record.clone()
    }

    /// Pushes every field of `product` into the form, overwriting whatever
    /// was there. Fields the payload omitted arrive as empty strings and
    /// overwrite too.
    pub fn write(&mut self, product: &Product) {
        self.record = product.clone();
    }

    /// Blanks the non-identifier fields; the identifier follows the
    /// configured policy.
    pub fn clear(&mut self) {
        let id = match self.policy {
            IdentifierClearPolicy::Blank => String::new(),
            IdentifierClearPolicy::Preserve => std::mem::take(&mut self.record.id),
        };
        self.record = Product {
            id,
            ..Product::default()
        };
    }

    /// Overwrites a single field by wire name. Returns false for names the
    /// record does not carry.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.record.field_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.record.field(field)
    }
}
