use crate::modules::certificate_cart::core::catalog::{
    CERTIFICATE_TEMPLATES, CertificateTemplate, find_template,
};
use crate::modules::certificate_cart::core::pricing::{PricingSummary, calculate_certificate_pricing};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateTemplateListing {
    #[serde(flatten)]
    pub template: CertificateTemplate,
    /// Quote for a single certificate, before any volume discount.
    pub single_unit: PricingSummary,
}

fn listing(template: &CertificateTemplate) -> CertificateTemplateListing {
    CertificateTemplateListing {
        template: *template,
        single_unit: calculate_certificate_pricing(1),
    }
}

pub fn list_certificate_templates() -> Vec<CertificateTemplateListing> {
    CERTIFICATE_TEMPLATES.iter().map(listing).collect()
}

pub fn get_certificate_template(slug: &str) -> Option<CertificateTemplateListing> {
    find_template(slug).map(listing)
}
