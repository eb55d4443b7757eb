use crate::prefs::Language;

pub const EMAIL: &str = "tsossellac@gmail.com";
pub const PORTFOLIO_PDF: &str = "/Thales_Sossella_UXUI_Junior_2026.pdf";
pub const BEHANCE_URL: &str = "https://www.behance.net/thalessossellaa";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/thalessossella-uxuidesigner/";
pub const INSTAGRAM_URL: &str =
    "https://www.instagram.com/sossellagallery/?utm_source=qr&igsh=MmFpOHJrNWJ6NTd6";

pub const LOADING_PHRASES: &[&str] = &[
    "Initializing Environment...",
    "Loading WebGL Textures...",
    "Compiling Assets...",
    "Calibrating Design System...",
    "Polishing Pixels...",
    "Ready.",
];

pub const TOOLS: &[&str] = &[
    "Figma",
    "Smart Animate",
    "Miro",
    "Maze",
    "ProtoPie",
    "Adobe CC",
    "User Research",
    "Design Systems",
    "Wireframing",
    "Usability Testing",
];

pub const SKILL_PILLS: &[&str] = &["UI Design", "UX Research", "Interaction", "Strategy"];

#[derive(PartialEq)]
pub struct Nav {
    pub about: &'static str,
    pub services: &'static str,
    pub work: &'static str,
    pub faq: &'static str,
    pub cta: &'static str,
    pub download: &'static str,
}

#[derive(PartialEq)]
pub struct Hero {
    pub role: &'static str,
    pub title_part1: &'static str,
    pub title_part2: &'static str,
    pub title_part2_italic: &'static str,
    pub title_part3: &'static str,
    pub desc: &'static str,
    pub btn: &'static str,
    pub scroll: &'static str,
}

#[derive(PartialEq)]
pub struct Stats {
    pub exp: &'static str,
    pub screens: &'static str,
    pub focus: &'static str,
}

#[derive(PartialEq)]
pub struct About {
    pub label: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub section1_title: &'static str,
    pub section1_desc: &'static str,
    pub section2_title: &'static str,
    pub section2_desc: &'static str,
    pub stats: Stats,
}

#[derive(PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(PartialEq)]
pub struct Services {
    pub label: &'static str,
    pub title: &'static str,
    pub stack_label: &'static str,
    pub list: &'static [Service],
}

#[derive(PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub img: &'static str,
    pub color: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(PartialEq)]
pub struct Projects {
    pub label: &'static str,
    pub title: &'static str,
    pub view_more: &'static str,
    pub btn_behance: &'static str,
    pub btn_case: &'static str,
    pub list: &'static [Project],
}

#[derive(PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(PartialEq)]
pub struct Process {
    pub title: &'static str,
    pub title_italic: &'static str,
    pub steps: &'static [ProcessStep],
}

#[derive(PartialEq)]
pub struct FaqItem {
    pub q: &'static str,
    pub a: &'static str,
}

#[derive(PartialEq)]
pub struct Faq {
    pub label: &'static str,
    pub title: &'static str,
    pub title_italic: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(PartialEq)]
pub struct Contact {
    pub label: &'static str,
    pub title: &'static str,
    pub title_break: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub location: &'static str,
    pub socials: &'static str,
    pub credits: &'static str,
}

/// Both languages share this one shape, so adding a field to one table
/// without the other is a compile error rather than a missing string at
/// runtime.
#[derive(PartialEq)]
pub struct Content {
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub services: Services,
    pub projects: Projects,
    pub process: Process,
    pub faq: Faq,
    pub contact: Contact,
}

pub fn for_language(language: Language) -> &'static Content {
    match language {
        Language::En => &EN,
        Language::Pt => &PT,
    }
}

pub static EN: Content = Content {
    nav: Nav {
        about: "About",
        services: "Services",
        work: "Work",
        faq: "Q&A",
        cta: "Let's Talk",
        download: "Download Portfolio",
    },
    hero: Hero {
        role: "UX/UI Designer",
        title_part1: "Great Design",
        title_part2: "Solves",
        title_part2_italic: "Real",
        title_part3: "Problems",
        desc: "I transform complex problems into intuitive, pixel-perfect interfaces. Focused on User Experience, Design Systems, and Brand Storytelling.",
        btn: "View Case Studies",
        scroll: "Scroll",
    },
    about: About {
        label: "The Designer",
        title: "About",
        quote: "Design is not just making things pretty. It's about solving problems for real people.",
        section1_title: "User-Centered Approach",
        section1_desc: "My process starts with empathy. I dive deep into user needs through research and testing before placing a single pixel. I believe data should drive design decisions.",
        section2_title: "Scalable Systems",
        section2_desc: "I specialize in building robust Design Systems in Figma. I create atomic components and documentation that bridge the gap between creative vision and developer implementation.",
        stats: Stats {
            exp: "Years Exp.",
            screens: "Screens Designed",
            focus: "User Focus",
        },
    },
    services: Services {
        label: "Capabilities",
        title: "What I do",
        stack_label: "My Design Stack",
        list: &[
            Service {
                id: "01",
                title: "UI Design",
                desc: "Creating impactful visual interfaces, focused on typography, grids, and consistent color systems.",
            },
            Service {
                id: "02",
                title: "UX Research",
                desc: "Usability tests, user journeys, and information architecture to ground decisions.",
            },
            Service {
                id: "03",
                title: "Interaction Design",
                desc: "Designing intuitive behaviors and meaningful transitions that guide users through complex flows with clarity and ease.",
            },
            Service {
                id: "04",
                title: "Design Systems",
                desc: "Building scalable component libraries and comprehensive documentation to ensure visual consistency and efficient product evolution.",
            },
        ],
    },
    projects: Projects {
        label: "Selected Work",
        title: "Projects",
        view_more: "Curious for more?",
        btn_behance: "Visit Behance",
        btn_case: "View Case",
        list: &[
            Project {
                id: "01",
                title: "Lake House Real Estate",
                category: "Web Design · UX/UI",
                description: "Designing a premium real estate website focused on high-end lake properties. Optimized property discovery with advanced filters and a visual-first search experience to increase engagement and lead generation.",
                link: BEHANCE_URL,
                img: "/lake house real state.png",
                color: "#2a4d69",
                tags: &["UI Design", "Real Estate", "Web"],
            },
            Project {
                id: "02",
                title: "Digital Certificate LP",
                category: "Landing Page · CRO",
                description: "Creating a conversion-focused landing page to acquire partners for digital certificate sales. Applied UX and CRO principles to simplify form completion and boost qualified lead capture.",
                link: BEHANCE_URL,
                img: "/capaPAGE.png",
                color: "#00c853",
                tags: &["Landing Page", "Conversion", "Sales"],
            },
            Project {
                id: "03",
                title: "Sparkle App",
                category: "App Design · Visual Identity",
                description: "Redesigning a photo-sharing experience focused on visual quality and editorial-style publishing. Improved content discovery and user engagement through a clean dark UI and publication-oriented interactions.",
                link: BEHANCE_URL,
                img: "/capa sparkle app.png",
                color: "#6200ea",
                tags: &["Mobile App", "Social", "Dark Mode"],
            },
        ],
    },
    process: Process {
        title: "How I",
        title_italic: "Work.",
        steps: &[
            ProcessStep {
                title: "Discovery",
                desc: "Deep dive into the problem. User interviews, data analysis, and benchmarking to understand the 'why'.",
                tags: &["User Interviews", "Benchmarking"],
            },
            ProcessStep {
                title: "Strategy",
                desc: "Information architecture and wireframing. Defining the logical structure and flows.",
                tags: &["User Flows", "Sitemaps"],
            },
            ProcessStep {
                title: "Visual Design",
                desc: "Transforming strategy into interface. Creating modern, accessible visual systems.",
                tags: &["High Fidelity", "Prototyping"],
            },
            ProcessStep {
                title: "Delivery",
                desc: "Detailed handoff and documentation. Working side-by-side with developers.",
                tags: &["Dev Handoff", "QA Testing"],
            },
        ],
    },
    faq: Faq {
        label: "Insights",
        title: "Common",
        title_italic: "Questions.",
        items: &[
            FaqItem {
                q: "Do you also do development?",
                a: "No. While I have Front-end knowledge (React/CSS) to ensure technical feasibility, I do not act as a developer. My focus is on delivering the best UX/UI solution for your development team to implement.",
            },
            FaqItem {
                q: "What is the average project timeline?",
                a: "It depends on the scope. A standard Landing Page typically takes 1-2 weeks. A full App redesign or a complex Dashboard can take anywhere from 4 to 8 weeks. I prioritize quality and research over rushing.",
            },
            FaqItem {
                q: "Do you design Logos/Branding?",
                a: "No. My focus is entirely on digital product design (websites, apps, and systems). I work on applying your existing brand identity to the interface, but I do not offer logo creation or full branding services.",
            },
            FaqItem {
                q: "How do you handoff to developers?",
                a: "I provide a comprehensive Figma file with a clear Design System, assets export, and a walkthrough video explaining the flows and interactions. I also remain available during implementation for QA.",
            },
        ],
    },
    contact: Contact {
        label: "What's Next?",
        title: "Let's work",
        title_break: "together.",
        copy: "Click to copy",
        copied: "Email copied!",
        copy_failed: "Copy failed — select it manually",
        location: "Location",
        socials: "Socials",
        credits: "Designed & Developed by Thales Sossella.\nBuilt with Rust, Yew & Trunk.",
    },
};

pub static PT: Content = Content {
    nav: Nav {
        about: "Sobre",
        services: "Serviços",
        work: "Projetos",
        faq: "FAQ",
        cta: "Vamos Conversar",
        download: "Baixar Portfólio",
    },
    hero: Hero {
        role: "UX/UI Designer",
        title_part1: "Design de Verdade",
        title_part2: "Resolve",
        title_part2_italic: "Problemas",
        title_part3: "Reais",
        desc: "Transformo problemas complexos em interfaces intuitivas e pixel-perfect. Focado em Experiência do Usuário, Design Systems e Storytelling de Marca.",
        btn: "Ver Case Studies",
        scroll: "Role",
    },
    about: About {
        label: "O Designer",
        title: "Sobre",
        quote: "Design não é apenas deixar bonito. É sobre resolver problemas para pessoas reais.",
        section1_title: "Abordagem Centrada no Usuário",
        section1_desc: "Meu processo começa com empatia. Mergulho nas necessidades do usuário através de pesquisa e testes antes de colocar um único pixel. Acredito que dados devem guiar decisões de design.",
        section2_title: "Sistemas Escaláveis",
        section2_desc: "Especialista em construir Design Systems robustos no Figma. Crio componentes atômicos e documentação que unem a visão criativa à implementação, garantindo consistência.",
        stats: Stats {
            exp: "Anos de Exp.",
            screens: "Telas Desenhadas",
            focus: "Foco no Usuário",
        },
    },
    services: Services {
        label: "Capacidades",
        title: "O que faço",
        stack_label: "Minhas Ferramentas",
        list: &[
            Service {
                id: "01",
                title: "UI Design",
                desc: "Criação de interfaces visuais impactantes, com foco em tipografia, grids e sistemas de cores consistentes.",
            },
            Service {
                id: "02",
                title: "UX Research",
                desc: "Testes de usabilidade, jornadas do usuário e arquitetura da informação para basear decisões.",
            },
            Service {
                id: "03",
                title: "Interaction Design",
                desc: "Projetar comportamentos intuitivos e transições significativas que guiam os usuários por fluxos complexos com clareza e facilidade.",
            },
            Service {
                id: "04",
                title: "Design Systems",
                desc: "Construção de bibliotecas de componentes escaláveis e documentação abrangente para garantir consistência visual e evolução eficiente do produto.",
            },
        ],
    },
    projects: Projects {
        label: "Trabalhos Selecionados",
        title: "Projetos",
        view_more: "Curioso por mais?",
        btn_behance: "Visitar Behance",
        btn_case: "Ver Case",
        list: &[
            Project {
                id: "01",
                title: "Lake House Real Estate",
                category: "Web Design · UX/UI",
                description: "Design de um site imobiliário premium focado em propriedades de lago de alto padrão. Otimização da descoberta de imóveis com filtros avançados e experiência visual para aumentar leads.",
                link: BEHANCE_URL,
                img: "/lake house real state.png",
                color: "#2a4d69",
                tags: &["UI Design", "Real Estate", "Web"],
            },
            Project {
                id: "02",
                title: "LP Certificado Digital",
                category: "Landing Page · CRO",
                description: "Criação de Landing Page focada em conversão para aquisição de parceiros. Aplicação de princípios de UX e CRO para simplificar formulários e capturar leads qualificados.",
                link: BEHANCE_URL,
                img: "/capaPAGE.png",
                color: "#00c853",
                tags: &["Landing Page", "Conversion", "Sales"],
            },
            Project {
                id: "03",
                title: "Sparkle App",
                category: "App Design · Identidade Visual",
                description: "Redesign de app de fotos focado em qualidade visual e estilo editorial. Melhoria na descoberta de conteúdo e engajamento através de uma UI dark limpa e interações fluidas.",
                link: BEHANCE_URL,
                img: "/capa sparkle app.png",
                color: "#6200ea",
                tags: &["Mobile App", "Social", "Dark Mode"],
            },
        ],
    },
    process: Process {
        title: "Como eu",
        title_italic: "Trabalho.",
        steps: &[
            ProcessStep {
                title: "Descoberta",
                desc: "Mergulho profundo no problema. Entrevistas, análise de dados e benchmarking para entender o 'porquê'.",
                tags: &["Entrevistas", "Benchmarking"],
            },
            ProcessStep {
                title: "Estratégia",
                desc: "Arquitetura da informação e wireframing. Definindo a estrutura lógica e fluxos de navegação.",
                tags: &["User Flows", "Sitemaps"],
            },
            ProcessStep {
                title: "Visual Design",
                desc: "Transformando estratégia em interface. Criando sistemas visuais modernos e acessíveis.",
                tags: &["Alta Fidelidade", "Prototipagem"],
            },
            ProcessStep {
                title: "Entrega",
                desc: "Handoff detalhado e documentação. Trabalho lado a lado com devs para garantir fidelidade.",
                tags: &["Dev Handoff", "QA Testing"],
            },
        ],
    },
    faq: Faq {
        label: "Insights",
        title: "Perguntas",
        title_italic: "Comuns.",
        items: &[
            FaqItem {
                q: "Você também programa?",
                a: "Não. Embora eu tenha conhecimento em Front-end (React/CSS) para garantir a viabilidade técnica, eu não atuo como desenvolvedor. Meu foco é entregar a melhor solução de UX/UI para que seu time de desenvolvimento implemente.",
            },
            FaqItem {
                q: "Qual o prazo médio de um projeto?",
                a: "Depende do escopo. Uma Landing Page padrão leva 1-2 semanas. Um App completo ou Dashboard complexo pode levar de 4 a 8 semanas. Priorizo qualidade e pesquisa ao invés da pressa.",
            },
            FaqItem {
                q: "Você cria Logos/Branding?",
                a: "Não. Meu foco é inteiramente no design de produtos digitais (sites e apps). Eu trabalho aplicando a identidade visual existente da sua marca na interface, mas não ofereço serviços de criação de logos ou branding do zero.",
            },
            FaqItem {
                q: "Como é a entrega para os devs?",
                a: "Entrego um arquivo Figma completo com Design System claro, exportação de assets e vídeo explicativo dos fluxos. Também fico disponível durante a implementação para QA (Garantia de Qualidade).",
            },
        ],
    },
    contact: Contact {
        label: "O que vem agora?",
        title: "Vamos trabalhar",
        title_break: "juntos.",
        copy: "Clique para copiar",
        copied: "Email copiado!",
        copy_failed: "Falha ao copiar — selecione manualmente",
        location: "Localização",
        socials: "Redes",
        credits: "Design e Desenvolvimento por Thales Sossella.\nFeito com Rust, Yew & Trunk.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_resolve_to_distinct_tables() {
        assert!(!std::ptr::eq(
            for_language(Language::En),
            for_language(Language::Pt)
        ));
    }

    // Guards against a new language variant silently shipping shorter lists
    // than the others.
    #[test]
    fn language_tables_have_matching_list_lengths() {
        let en = &EN;
        let pt = &PT;
        assert_eq!(en.services.list.len(), pt.services.list.len());
        assert_eq!(en.projects.list.len(), pt.projects.list.len());
        assert_eq!(en.process.steps.len(), pt.process.steps.len());
        assert_eq!(en.faq.items.len(), pt.faq.items.len());
    }

    #[test]
    fn project_entries_share_ids_and_assets_across_languages() {
        for (en, pt) in EN.projects.list.iter().zip(PT.projects.list) {
            assert_eq!(en.id, pt.id);
            assert_eq!(en.img, pt.img);
            assert_eq!(en.color, pt.color);
            assert_eq!(en.link, pt.link);
        }
    }

    #[test]
    fn loading_phrases_cover_every_threshold() {
        // One phrase per 20-count threshold plus the terminal one.
        assert_eq!(LOADING_PHRASES.len(), 6);
    }
}
