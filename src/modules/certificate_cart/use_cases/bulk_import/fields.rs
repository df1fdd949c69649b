// Labels for spreadsheet columns shown by the bulk import form.

use serde::Serialize;

struct FieldMetadata {
    key: &'static str,
    label: &'static str,
    example: &'static str,
    required: bool,
}

const fn field(key: &'static str, label: &'static str, example: &'static str) -> FieldMetadata {
    FieldMetadata {
        key,
        label,
        example,
        required: false,
    }
}

const FIELD_LIBRARY: &[FieldMetadata] = &[
    field("ano", "Ano", "2025"),
    field("bairro", "Bairro", "Centro"),
    field("cep", "CEP", "12345-000"),
    field("cidade", "Cidade", "Sao Paulo"),
    field("cidadeNascimento", "Cidade de nascimento", "Recife"),
    field("cidadeResidencia", "Cidade de residencia", "Fortaleza"),
    field("classe", "Classe", "Adultos"),
    field("classeAtual", "Classe atual", "Intermediarios"),
    field("congregacao", "Congregação", "Congregação Central"),
    field("data", "Data", "2025-12-01"),
    field("dataApresentacao", "Data da apresentacao", "2025-03-10"),
    field("dataBatismo", "Data do batismo", "2025-04-15"),
    field("dataCasamento", "Data do casamento", "2025-06-20"),
    field("dataConclusao", "Data de conclusao", "2025-12-05"),
    field("dataFim", "Data de termino", "2025-08-15"),
    field("dataInicio", "Data de inicio", "2025-06-01"),
    field("dataNascimento", "Data de nascimento", "2000-01-15"),
    field("dataOrdenacao", "Data da ordenacao", "2025-09-25"),
    field("dataRegistro", "Data de registro", "2025-01-05"),
    field("estado", "Estado", "SP"),
    field("estadoNascimento", "Estado de nascimento", "PE"),
    field("estadoResidencia", "Estado de residencia", "CE"),
    field("igreja", "Igreja", "Assembleia Central"),
    field("igrejaCerimonia", "Igreja da cerimonia", "Igreja Central"),
    field("igrejaOrdenadora", "Igreja ordenadora", "ADI Matriz"),
    field("liderCelula", "Lider de celula", "Marcos Lima"),
    field("localBatismo", "Local do batismo", "Rio local"),
    field("localNascimento", "Local de nascimento", "Hospital Vida"),
    field("ministro", "Ministro celebrante", "Pr. Carlos"),
    field("nomeAluno", "Nome do aluno", "Lucas Silva"),
    field("nomeBatizando", "Nome do batizando", "Mariana Costa"),
    field("nomeCrianca", "Nome da crianca", "Ana Clara"),
    field("nomeEsposa", "Nome da esposa", "Camila Rocha"),
    field("nomeEsposo", "Nome do esposo", "Rafael Rocha"),
    FieldMetadata {
        required: true,
        ..field("nomeHomenageado", "Nome do homenageado", "Pr. Joao Silva")
    },
    field("nomeMae", "Nome da mae", "Juliana Costa"),
    field("nomeMembro", "Nome do membro", "Joao Pereira"),
    field("nomeNoiva", "Nome da noiva", "Isabela Nunes"),
    field("nomeNoivo", "Nome do noivo", "Gabriel Ribeiro"),
    field("nomeOrdenando", "Nome do ordenando", "Paulo Dias"),
    field("nomePai", "Nome do pai", "Carlos Costa"),
    field("nomeParticipante", "Nome do participante", "Livia Santos"),
    field("nomePastor", "Nome do pastor", "Pr. Elias"),
    field("nomeSecretario", "Nome do secretario(a)", "Maria Lopes"),
    field("observacao", "Observacao", "Participou de todas as aulas"),
    field("observacoes", "Observacoes", "Concluiu com excelencia"),
    field("oficiante", "Oficiante", "Ev. Roberto"),
    field("pastor", "Pastor responsavel", "Pr. Daniel"),
    field("pastorOrdenante", "Pastor ordenante", "Pr. Adilson"),
    field("professor", "Professor(a)", "Irma Sandra"),
    field("proximaClasse", "Proxima classe", "Juvenis"),
    field("secretario", "Secretario(a)", "Irma Paula"),
    field("sexo", "Sexo", "Feminino"),
    field("superintendente", "Superintendente", "Irmao Marcos"),
    field("trimestre", "Trimestre", "2o"),
    field("uf", "UF", "SP"),
    field("versiculo", "Versiculo", "Mateus 28:19"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportField {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Splits camelCase and snake_case keys into words and capitalises the first
/// letter: `dataNascimento` becomes "Data Nascimento".
pub fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
            spaced.push(ch);
        } else if ch == '_' {
            spaced.push(' ');
        } else {
            spaced.push(ch);
        }
    }

    let words: Vec<&str> = spaced.split_whitespace().collect();
    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn resolve_bulk_fields<S: AsRef<str>>(keys: &[S]) -> Vec<BulkImportField> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            match FIELD_LIBRARY.iter().find(|meta| meta.key == key) {
                Some(meta) => BulkImportField {
                    key: key.to_string(),
                    label: meta.label.to_string(),
                    example: Some(meta.example.to_string()),
                    required: meta.required.then_some(true),
                },
                None => BulkImportField {
                    key: key.to_string(),
                    label: humanize_key(key),
                    example: None,
                    required: None,
                },
            }
        })
        .collect()
}
