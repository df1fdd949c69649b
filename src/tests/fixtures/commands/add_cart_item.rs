// Shared test fixture for the AddCartItem command, seeded from
// json/add_cart_item.json.

use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddCartItemDto {
    pub certificate_slug: String,
    pub title: String,
    pub quantity: Option<i64>,
    pub summary: Option<String>,
    pub preview_image: Option<String>,
}

pub struct AddCartItemBuilder {
    inner: AddCartItem,
}

impl Default for AddCartItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddCartItemBuilder {
    pub fn new() -> Self {
        let dto: AddCartItemDto =
            serde_json::from_str(include_str!("json/add_cart_item.json")).unwrap();

        Self {
            inner: AddCartItem {
                certificate_slug: dto.certificate_slug,
                title: dto.title,
                quantity: dto.quantity,
                summary: dto.summary,
                preview_image: dto.preview_image,
            },
        }
    }

    pub fn certificate_slug(mut self, v: impl Into<String>) -> Self {
        self.inner.certificate_slug = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn quantity(mut self, v: Option<i64>) -> Self {
        self.inner.quantity = v;
        self
    }

    pub fn summary(mut self, v: Option<&str>) -> Self {
        self.inner.summary = v.map(str::to_string);
        self
    }

    pub fn preview_image(mut self, v: Option<&str>) -> Self {
        self.inner.preview_image = v.map(str::to_string);
        self
    }

    pub fn build(self) -> AddCartItem {
        self.inner
    }
}

#[cfg(test)]
mod add_cart_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddCartItemBuilder::default().build();
        assert_eq!(built.certificate_slug, "batismo");
        assert_eq!(built.title, "Certificado de Batismo");
        assert_eq!(built.quantity, Some(1));
        assert_eq!(built.summary.as_deref(), Some("Mariana Costa"));
        assert!(built.preview_image.is_some());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AddCartItemBuilder::new()
            .certificate_slug("casamento")
            .title("Certificado de Casamento")
            .quantity(Some(3))
            .summary(Some("João & Maria"))
            .preview_image(None)
            .build();

        assert_eq!(custom.certificate_slug, "casamento");
        assert_eq!(custom.title, "Certificado de Casamento");
        assert_eq!(custom.quantity, Some(3));
        assert_eq!(custom.summary.as_deref(), Some("João & Maria"));
        assert_eq!(custom.preview_image, None);
    }
}
