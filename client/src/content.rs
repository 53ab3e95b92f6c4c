//! Static marketing copy rendered by the page sections.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "Gregório Paisagista";
pub const PAGE_TITLE: &str = "Gregório Paisagista — Jardins Verticais, Projetos Paisagísticos, Irrigação e Implantação";
pub const PAGE_DESCRIPTION: &str = "Jardins Verticais Vertigarden, projetos paisagísticos, irrigação automatizada e implantação de jardins no Vale do Aço e em todo o Brasil.";

pub const SERVICE_VIDEO: &str = "/images/videojardimertigarden.mp4";

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "#servicos", label: "Serviços" },
    NavItem { href: "#projetos", label: "Projetos" },
    NavItem { href: "#sobre", label: "Sobre" },
    NavItem { href: "#depoimentos", label: "Depoimentos" },
    NavItem { href: "#contato", label: "Contato" },
];

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "10+", label: "Anos de Experiência", detail: "Atuando no mercado" },
    Stat { number: "100+", label: "Projetos Entregues", detail: "Com excelência" },
    Stat { number: "500+", label: "Clientes Satisfeitos", detail: "Em todo Brasil" },
    Stat { number: "24h", label: "Tempo de Resposta", detail: "WhatsApp" },
];

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub title: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub has_video: bool,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    /// WhatsApp template sent from this card.
    pub cta_message: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Jardins Verticais Vertigarden",
        badge: "Sistema Exclusivo",
        description: "Paredes vivas com o sistema patenteado Vertigarden, exclusivo no Vale do Aço.",
        image: "/images/vertigarden.png",
        has_video: true,
        features: &[
            "Sistema patenteado com alta durabilidade",
            "Drenagem e irrigação integradas",
            "Acabamento premium para áreas internas e externas",
        ],
        cta: "Quero meu jardim vertical",
        cta_message: "Quero um Jardim Vertical Vertigarden.",
    },
    Service {
        title: "Projetos Paisagísticos",
        badge: "Conceito Autoral",
        description: "Projetos que harmonizam arquitetura, clima e solo e valorizam o imóvel.",
        image: "/images/paisagismo2.jpg",
        has_video: false,
        features: &[
            "Conceito, anteprojeto e executivo",
            "Estudos de insolação, clima e espécies",
            "Sustentabilidade integrada",
        ],
        cta: "Quero um projeto sob medida",
        cta_message: "Tenho um projeto para discutir.",
    },
    Service {
        title: "Irrigação Automatizada",
        badge: "Tecnologia",
        description: "Sistemas de irrigação por gotejamento e aspersão com automação e economia de água.",
        image: "/images/paisagismo.jpg",
        has_video: false,
        features: &["Dimensionamento por setor", "Automação com sensores", "Manutenção preventiva"],
        cta: "Quero irrigação automatizada",
        cta_message: "Gostaria de irrigação automatizada.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub images: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Jardim Vertical Vertigarden",
        category: "Jardins Verticais",
        location: "Belo Horizonte, MG",
        images: &["/images/vertigarden.png", "/images/vertigarden2.png", "/images/paisagismo.jpg"],
    },
    Project {
        title: "Projeto Paisagístico Residencial",
        category: "Paisagismo",
        location: "Vale do Aço, MG",
        images: &["/images/paisagismo2.jpg", "/images/paisagismo.jpg", "/images/vertigarden.png"],
    },
    Project {
        title: "Jardim de Inverno",
        category: "Interiores",
        location: "São Paulo, SP",
        images: &["/images/paisagismo.jpg", "/images/vertigarden2.png", "/images/paisagismo2.jpg"],
    },
    Project {
        title: "Paisagismo Sustentável",
        category: "Sustentabilidade",
        location: "Rio de Janeiro, RJ",
        images: &["/images/vertigarden.png", "/images/paisagismo.jpg", "/images/vertigarden2.png"],
    },
    Project {
        title: "Sistema de Irrigação",
        category: "Tecnologia",
        location: "Minas Gerais",
        images: &["/images/paisagismo2.jpg", "/images/vertigarden.png", "/images/paisagismo.jpg"],
    },
    Project {
        title: "Jardim Contemporâneo",
        category: "Design",
        location: "Brasil",
        images: &["/images/vertigarden2.png", "/images/paisagismo2.jpg", "/images/vertigarden.png"],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub description: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Jardins Verticais", percentage: 98, description: "Implantação vertical com sistemas Vertigarden" },
    Skill { name: "Projetos Paisagísticos", percentage: 95, description: "Conceitos autorais entre arquitetura e natureza" },
    Skill { name: "Irrigação Inteligente", percentage: 92, description: "Automação e uso eficiente de água" },
    Skill { name: "Solo e Nutrição", percentage: 90, description: "Preparo de solo e manejo de nutrientes" },
];

#[derive(Clone, Copy, Debug)]
pub struct Award {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Newest first.
pub const AWARDS: &[Award] = &[
    Award { year: "2024", title: "Melhor Projeto Paisagístico", description: "Prêmio de Excelência em Arquitetura" },
    Award { year: "2023", title: "Parceiro Vertigarden", description: "Certificação de Qualidade" },
    Award { year: "2022", title: "Inovação em Sustentabilidade", description: "Reconhecimento Nacional" },
];

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { quote: "Resultado impecável. O jardim elevou o projeto a outro nível.", author: "Cliente Residencial, BH", rating: 5 },
    Testimonial {
        quote: "Execução precisa e manutenção simples. Viramos fãs dos jardins verticais.",
        author: "Escritório Corporativo, Vale do Aço",
        rating: 5,
    },
    Testimonial { quote: "Equipe cuidadosa, projeto autoral e sustentável. Recomendo.", author: "Arquiteta Parceira", rating: 5 },
];

/// `★` repeated `rating` times.
pub fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}
