use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CertificateTemplate {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
}

const fn template(
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    preview: &'static str,
) -> CertificateTemplate {
    CertificateTemplate {
        slug,
        title,
        description,
        preview,
    }
}

pub const CERTIFICATE_TEMPLATES: &[CertificateTemplate] = &[
    template(
        "batismo",
        "Certificado de Batismo",
        "Modelo com campos para dados do batizando, data e assinaturas.",
        "/certificado_batismo.jpg",
    ),
    template(
        "ebd",
        "Certificado EBD",
        "Modelo inspirado na Escola Bíblica Dominical com trimestre, classe e assinaturas.",
        "/certificado_ebd_trimestre.jpg",
    ),
    template(
        "ebd-anual",
        "Certificado EBD Anual",
        "Registro anual para promoção de turma na Escola Bíblica Dominical.",
        "/certificado_ebd_anual.jpg",
    ),
    template(
        "discipulado",
        "Certificado de Discipulado",
        "Modelo dourado para cursos e treinamentos de discipulado.",
        "/certificado_discipulado.jpg",
    ),
    template(
        "apresentacao-menina",
        "Apresentação de Crianças (Menina)",
        "Certificado especial para apresentação feminina.",
        "/certificado_menina.jpg",
    ),
    template(
        "apresentacao-menino",
        "Apresentação de Crianças (Menino)",
        "Variante masculina do certificado de apresentação infantil.",
        "/certificado_menino.jpg",
    ),
    template(
        "casamento",
        "Certificado de Casamento",
        "Modelo floral inspirado no layout tradicional de casamento cristão.",
        "/certificado_casamento.jpg",
    ),
    template(
        "honra-merito-assembleia",
        "Certificado de Honra ao Mérito (Assembleia)",
        "Modelo de homenagem com logos e assinaturas para serviços prestados.",
        "/certificado_discipulado.jpg",
    ),
    template(
        "ordenacao-pastoral",
        "Certificado de Ordenação Pastoral",
        "Registro de ordenação ao ministério pastoral com dados completos.",
        "/certificado_ordenacao.jpg",
    ),
    template(
        "ordenacao-presbitero",
        "Certificado de Ordenação Presbítero",
        "Certificado para ordenação ao presbitério.",
        "/certificado_prebitero.jpg",
    ),
    template(
        "ordenacao-diacono",
        "Certificado de Ordenação Diácono",
        "Certificado para ordenação diaconal.",
        "/certificado_diacono.jpg",
    ),
    template(
        "ordenacao-evangelista",
        "Certificado de Ordenação Evangelista",
        "Certificado para ordenação ao ministério evangelista.",
        "/certificado_evangelista.jpg",
    ),
    template(
        "ordenacao-missionario",
        "Certificado de Ordenação Ministério Missionário",
        "Certificado para ordenação ao ministério missionário.",
        "/certificado_missionario.jpg",
    ),
    template(
        "dizimista-fiel",
        "Certificado de Dizimista Fiel",
        "Reconhecimento de fidelidade nos dízimos, com nome, data e versículo.",
        "/certificado_dizimista.jpg",
    ),
    template(
        "encontro-casais",
        "Certificado de Encontro de Casais",
        "Certificado para encontros de casais, com dados do casal e assinaturas.",
        "/certificado_casais.jpg",
    ),
    template(
        "participacao-celula",
        "Certificado de Participação em Célula",
        "Registro da participação em células ou pequenos grupos.",
        "/certificado_discipulado.jpg",
    ),
];

pub fn find_template(slug: &str) -> Option<&'static CertificateTemplate> {
    CERTIFICATE_TEMPLATES.iter().find(|t| t.slug == slug)
}

#[cfg(test)]
mod catalog_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn it_should_have_unique_slugs() {
        let slugs: HashSet<_> = CERTIFICATE_TEMPLATES.iter().map(|t| t.slug).collect();
        assert_eq!(slugs.len(), CERTIFICATE_TEMPLATES.len());
    }

    #[rstest]
    #[case("batismo", Some("Certificado de Batismo"))]
    #[case("casamento", Some("Certificado de Casamento"))]
    #[case("unknown", None)]
    fn it_should_find_templates_by_slug(#[case] slug: &str, #[case] title: Option<&str>) {
        assert_eq!(find_template(slug).map(|t| t.title), title);
    }
}
