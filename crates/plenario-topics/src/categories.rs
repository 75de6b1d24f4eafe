//! The fixed thematic category table.
//!
//! Twelve buckets covering the recurring themes of Chamber proposals. The
//! table is static and read-only; declaration order doubles as the tie-break
//! order when two categories score equally.

/// A thematic bucket: display metadata plus the keyword list scanned by the
/// classifier. Higher `weight` means the category's keywords are more
/// specific and score higher per match.
#[derive(Debug)]
pub struct TopicCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub keywords: &'static [&'static str],
    pub weight: u32,
}

pub const TOPIC_CATEGORIES: &[TopicCategory] = &[
    TopicCategory {
        id: "saude",
        name: "Saúde",
        description: "Propostas relacionadas à saúde pública, medicamentos, hospitais",
        color: "red",
        keywords: &[
            "saúde",
            "hospital",
            "medicamento",
            "vacina",
            "sistema único de saúde",
            "sus",
            "médico",
            "enfermeiro",
            "doença",
            "tratamento",
            "prevenção",
            "epidemia",
            "pandemia",
            "covid",
            "vacinação",
            "farmácia",
            "laboratório",
            "exame",
            "consulta",
            "emergência",
            "uti",
            "leito",
            "transplante",
            "doação de órgãos",
        ],
        weight: 10,
    },
    TopicCategory {
        id: "educacao",
        name: "Educação",
        description: "Propostas sobre ensino, escolas, universidades, bolsas",
        color: "blue",
        keywords: &[
            "educação",
            "escola",
            "universidade",
            "faculdade",
            "professor",
            "aluno",
            "ensino",
            "aprendizado",
            "bolsa",
            "fies",
            "prouni",
            "enem",
            "vestibular",
            "graduação",
            "pós-graduação",
            "mestrado",
            "doutorado",
            "escolaridade",
            "alfabetização",
            "literatura",
            "matemática",
            "ciência",
            "tecnologia",
            "biblioteca",
            "laboratório escolar",
            "merenda escolar",
        ],
        weight: 10,
    },
    TopicCategory {
        id: "economia",
        name: "Economia",
        description: "Propostas sobre impostos, orçamento, desenvolvimento econômico",
        color: "green",
        keywords: &[
            "economia",
            "imposto",
            "tributo",
            "orçamento",
            "receita",
            "despesa",
            "pib",
            "inflação",
            "juros",
            "taxa",
            "tarifa",
            "subsídio",
            "incentivo",
            "investimento",
            "empresa",
            "negócio",
            "comércio",
            "indústria",
            "produção",
            "exportação",
            "importação",
            "dólar",
            "real",
            "moeda",
            "banco",
            "crédito",
            "financiamento",
            "empréstimo",
            "dívida",
            "déficit",
            "superávit",
        ],
        weight: 9,
    },
    TopicCategory {
        id: "seguranca",
        name: "Segurança Pública",
        description: "Propostas sobre polícia, crime, justiça, penas",
        color: "purple",
        keywords: &[
            "segurança",
            "polícia",
            "crime",
            "violência",
            "assalto",
            "homicídio",
            "tráfico",
            "drogas",
            "prisão",
            "pena",
            "justiça",
            "investigação",
            "proteção",
            "vigilância",
            "monitoramento",
            "armamento",
            "desarmamento",
            "violência doméstica",
            "feminicídio",
            "racismo",
            "discriminação",
            "direitos humanos",
            "defesa civil",
            "bombeiros",
        ],
        weight: 9,
    },
    TopicCategory {
        id: "meio-ambiente",
        name: "Meio Ambiente",
        description: "Propostas sobre sustentabilidade, preservação, mudanças climáticas",
        color: "emerald",
        keywords: &[
            "meio ambiente",
            "sustentabilidade",
            "preservação",
            "conservação",
            "floresta",
            "amazônia",
            "biodiversidade",
            "espécie",
            "extinção",
            "poluição",
            "resíduo",
            "lixo",
            "reciclagem",
            "energia renovável",
            "solar",
            "eólica",
            "hidrelétrica",
            "petróleo",
            "gás",
            "mineração",
            "mudança climática",
            "aquecimento global",
            "carbono",
            "emissão",
            "água",
            "rio",
            "mar",
            "oceano",
            "terra",
            "solo",
            "ar",
        ],
        weight: 8,
    },
    TopicCategory {
        id: "trabalho",
        name: "Trabalho e Previdência",
        description: "Propostas sobre emprego, aposentadoria, direitos trabalhistas",
        color: "orange",
        keywords: &[
            "trabalho",
            "emprego",
            "previdência",
            "aposentadoria",
            "inss",
            "funcionário",
            "empregado",
            "patrão",
            "empregador",
            "salário",
            "benefício",
            "auxílio",
            "pensão",
            "direito trabalhista",
            "clt",
            "sindicato",
            "greve",
            "demissão",
            "contratação",
            "estágio",
            "jornada de trabalho",
            "hora extra",
            "feriado",
            "férias",
            "13º salário",
        ],
        weight: 8,
    },
    TopicCategory {
        id: "infraestrutura",
        name: "Infraestrutura",
        description: "Propostas sobre transporte, obras, desenvolvimento urbano",
        color: "slate",
        keywords: &[
            "infraestrutura",
            "transporte",
            "rodovia",
            "estrada",
            "ponte",
            "túnel",
            "metro",
            "ônibus",
            "trem",
            "avião",
            "porto",
            "aeroporto",
            "obra",
            "construção",
            "reforma",
            "manutenção",
            "urbanização",
            "saneamento",
            "esgoto",
            "água potável",
            "energia elétrica",
            "internet",
            "telecomunicação",
            "mobilidade urbana",
            "trânsito",
        ],
        weight: 7,
    },
    TopicCategory {
        id: "tecnologia",
        name: "Tecnologia e Inovação",
        description: "Propostas sobre tecnologia, inovação, digitalização",
        color: "cyan",
        keywords: &[
            "tecnologia",
            "inovação",
            "digital",
            "internet",
            "computador",
            "software",
            "hardware",
            "inteligência artificial",
            "ia",
            "robótica",
            "automação",
            "startup",
            "empreendedorismo",
            "pesquisa",
            "desenvolvimento",
            "patente",
            "propriedade intelectual",
            "cibernética",
            "blockchain",
            "cryptocurrency",
            "bitcoin",
            "fintech",
            "govtech",
            "e-gov",
        ],
        weight: 7,
    },
    TopicCategory {
        id: "relacoes-internacionais",
        name: "Relações Internacionais",
        description: "Propostas sobre diplomacia, acordos internacionais, cooperação",
        color: "indigo",
        keywords: &[
            "relações internacionais",
            "diplomacia",
            "diplomático",
            "embaixada",
            "consulado",
            "acordo internacional",
            "tratado",
            "cooperação internacional",
            "organização internacional",
            "onu",
            "oms",
            "unesco",
            "fao",
            "oit",
            "parlamento",
            "grupo parlamentar",
            "assembleia parlamentar",
            "comissão parlamentar",
            "delegação",
            "missão diplomática",
            "cooperação bilateral",
            "cooperação multilateral",
            "comércio internacional",
        ],
        weight: 8,
    },
    TopicCategory {
        id: "cultura",
        name: "Cultura e Esporte",
        description: "Propostas sobre artes, esportes, patrimônio cultural",
        color: "pink",
        keywords: &[
            "cultura",
            "arte",
            "música",
            "teatro",
            "cinema",
            "literatura",
            "museu",
            "biblioteca",
            "patrimônio",
            "histórico",
            "tradição",
            "folclore",
            "carnaval",
            "festival",
            "esporte",
            "futebol",
            "olimpíada",
            "atleta",
            "competição",
            "treinamento",
            "academia",
            "ginásio",
            "estádio",
            "quadra",
            "piscina",
            "dança",
            "fotografia",
            "escultura",
        ],
        weight: 6,
    },
    TopicCategory {
        id: "agricultura",
        name: "Agricultura e Agropecuária",
        description: "Propostas sobre agricultura, pecuária, desenvolvimento rural",
        color: "lime",
        keywords: &[
            "agricultura",
            "agropecuária",
            "fazenda",
            "roça",
            "plantação",
            "colheita",
            "semente",
            "adubo",
            "pesticida",
            "trator",
            "máquina",
            "gado",
            "boi",
            "vaca",
            "porco",
            "galinha",
            "peixe",
            "piscicultura",
            "apicultura",
            "mel",
            "leite",
            "carne",
            "grão",
            "soja",
            "milho",
            "arroz",
            "feijão",
            "café",
            "cana-de-açúcar",
            "laranja",
            "uva",
        ],
        weight: 6,
    },
    TopicCategory {
        id: "direitos-sociais",
        name: "Direitos Sociais",
        description: "Propostas sobre igualdade, inclusão, assistência social",
        color: "rose",
        keywords: &[
            "direitos",
            "igualdade",
            "inclusão",
            "assistência social",
            "bolsa família",
            "pobreza",
            "miséria",
            "fome",
            "moradia",
            "habitação",
            "casa",
            "mulher",
            "feminismo",
            "gênero",
            "lgbt",
            "lgbtq+",
            "negro",
            "indígena",
            "quilombola",
            "pessoa com deficiência",
            "idoso",
            "criança",
            "adolescente",
            "juventude",
            "migrante",
            "refugiado",
            "discriminação",
        ],
        weight: 8,
    },
];

/// Look up a category by its id.
pub fn category_by_id(id: &str) -> Option<&'static TopicCategory> {
    TOPIC_CATEGORIES.iter().find(|c| c.id == id)
}
