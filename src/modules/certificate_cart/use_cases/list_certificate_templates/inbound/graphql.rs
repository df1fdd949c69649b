use async_graphql::{Object, SimpleObject};

use crate::modules::certificate_cart::use_cases::list_certificate_templates::handler::{
    CertificateTemplateListing, list_certificate_templates,
};

#[derive(SimpleObject, Clone)]
pub struct GqlCertificateTemplate {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub preview: String,
    pub unit_price_cents: u64,
}

impl From<CertificateTemplateListing> for GqlCertificateTemplate {
    fn from(l: CertificateTemplateListing) -> Self {
        Self {
            slug: l.template.slug.to_string(),
            title: l.template.title.to_string(),
            description: l.template.description.to_string(),
            preview: l.template.preview.to_string(),
            unit_price_cents: l.single_unit.unit_in_cents,
        }
    }
}

#[derive(Default)]
pub struct CertificateTemplatesQuery;

#[Object]
impl CertificateTemplatesQuery {
    async fn certificate_templates(&self) -> Vec<GqlCertificateTemplate> {
        list_certificate_templates()
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
