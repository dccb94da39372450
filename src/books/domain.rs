pub mod model;

// Book is keyed by isbn; every other field is opaque to the service.
pub(crate) trait Book {
    fn isbn(&self) -> &str;

    fn has_blank_isbn(&self) -> bool {
        self.isbn().trim().is_empty()
    }
}
