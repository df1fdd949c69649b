/// Adds certificates of one template to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCartItem {
    pub certificate_slug: String,
    pub title: String,
    /// Clamped to at least one; absent means one.
    pub quantity: Option<i64>,
    pub summary: Option<String>,
    /// Opaque rendered preview, stored and forwarded as is.
    pub preview_image: Option<String>,
}

impl AddCartItem {
    pub fn single(certificate_slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            certificate_slug: certificate_slug.into(),
            title: title.into(),
            quantity: None,
            summary: None,
            preview_image: None,
        }
    }
}
