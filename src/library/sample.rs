//! Built-in sample documents.
//!
//! `STARTUP` is loaded into the shell's store unless seeding is disabled.
//! `DEMO` is the larger set listed by `biblio demo`; ids there are fixed.

use crate::core::DocumentStore;
use crate::domain::{Document, DocumentId};

/// A sample entry without an id
#[derive(Debug, Clone, Copy)]
pub struct SeedDocument {
    pub title: &'static str,
    pub author: &'static str,
    pub year: i32,
    pub file_type: &'static str,
    pub file_path: &'static str,
}

impl SeedDocument {
    const fn new(
        title: &'static str,
        author: &'static str,
        year: i32,
        file_type: &'static str,
        file_path: &'static str,
    ) -> Self {
        Self {
            title,
            author,
            year,
            file_type,
            file_path,
        }
    }

    /// Build a document with an explicit id, bypassing the store
    pub fn to_document(&self, id: DocumentId) -> Document {
        Document::new(id, self.title, self.author, self.year, self.file_type, self.file_path)
    }
}

/// Entries added to a new shell session
pub const STARTUP: &[SeedDocument] = &[
    SeedDocument::new("Introdução a Redes", "Ana Paula", 2020, "pdf", "/docs/redes/intro.pdf"),
    SeedDocument::new("O Poder do Hábito", "Charles Duhigg", 2012, "epub", "/docs/autoajuda/habito.epub"),
    SeedDocument::new("Manual de Git e GitHub", "Carlos Lima", 2021, "pdf", "/docs/prog/git_manual.pdf"),
    SeedDocument::new("A Arte da Guerra", "Sun Tzu", 1900, "txt", "/docs/historia/guerra.txt"),
    SeedDocument::new("A Linguagem Python", "Guido van Rossum", 1991, "epub", "/docs/prog/python_linguagem.epub"),
];

/// Demonstration catalog, several entries sharing year and author
pub const DEMO: &[SeedDocument] = &[
    SeedDocument::new("A Era da Inteligência Artificial", "Maria Silva", 2023, "pdf", "/docs/ia/era_ia.pdf"),
    SeedDocument::new("Fundamentos de Estruturas de Dados", "João Santos", 2019, "epub", "/docs/cs/estruturas.epub"),
    SeedDocument::new("Guia Completo de Python", "Ana Paula", 2021, "pdf", "/docs/prog/python_guia.pdf"),
    SeedDocument::new("O Universo e suas Galáxias", "Carlos Almeida", 2018, "mobi", "/docs/astronomia/universo.mobi"),
    SeedDocument::new("História da Arte Moderna", "Laura Costa", 2015, "docx", "/docs/arte/moderna.docx"),
    SeedDocument::new("Introdução à Economia", "Pedro Souza", 2020, "pdf", "/docs/economia/intro_eco.pdf"),
    SeedDocument::new("Aventuras no Mundo Digital", "Julia Lima", 2022, "epub", "/docs/ficcao/aventuras_digital.epub"),
    SeedDocument::new("Receitas Culinárias Brasileiras", "Fernanda Braga", 2017, "txt", "/docs/culinaria/receitas.txt"),
    SeedDocument::new("Decifrando Algoritmos Complexos", "Maria Silva", 2023, "pdf", "/docs/ia/algoritmos_comp.pdf"),
    SeedDocument::new("Psicologia Cognitiva", "Lucas Pereira", 2016, "azw", "/docs/psicologia/cognitiva.azw"),
    SeedDocument::new("Desenvolvimento Web com Flask", "Ana Paula", 2021, "pdf", "/docs/prog/flask_web.pdf"),
    SeedDocument::new("Física Quântica para Leigos", "Marcos Nunes", 2019, "epub", "/docs/fisica/quantica.epub"),
    SeedDocument::new("Biologia Marinha: Ecossistemas", "Mariana Gomes", 2022, "docx", "/docs/biologia/marinha.docx"),
    SeedDocument::new("Geografia Política Atual", "Roberto Carlos", 2018, "pdf", "/docs/geografia/politica.pdf"),
    SeedDocument::new("Engenharia de Software Ágil", "João Santos", 2019, "epub", "/docs/cs/agil.epub"),
    SeedDocument::new("Técnicas de Escrita Criativa", "Larissa Faria", 2020, "txt", "/docs/escrita/criativa.txt"),
    SeedDocument::new("Marketing Digital Estratégico", "Gabriela Neves", 2023, "pdf", "/docs/marketing/digital.pdf"),
    SeedDocument::new("O Essencial do Machine Learning", "Maria Silva", 2023, "epub", "/docs/ia/machine_learning.epub"),
    SeedDocument::new("Direito Constitucional Brasileiro", "Ricardo Souza", 2017, "pdf", "/docs/direito/const.pdf"),
    SeedDocument::new("Química Orgânica Avançada", "Beatriz Castro", 2021, "mobi", "/docs/quimica/organica.mobi"),
    SeedDocument::new("Inteligência Emocional e Liderança", "Fernando Alves", 2022, "azw", "/docs/psicologia/emocional.azw"),
    SeedDocument::new("Criptografia e Segurança da Informação", "Carlos Almeida", 2018, "pdf", "/docs/seguranca/cripto.pdf"),
    SeedDocument::new("Planejamento Financeiro Pessoal", "Patricia Mendes", 2020, "docx", "/docs/financas/pessoal.docx"),
    SeedDocument::new("Gestão de Projetos PMBOK", "Pedro Souza", 2020, "pdf", "/docs/gestao/pmbok.pdf"),
    SeedDocument::new("Introdução à Robótica", "João Santos", 2023, "epub", "/docs/robotica/intro_robo.epub"),
    SeedDocument::new("Design Gráfico Moderno", "Julia Lima", 2022, "pdf", "/docs/design/grafico.pdf"),
    SeedDocument::new("Blockchain e Criptomoedas", "Gustavo Rios", 2021, "txt", "/docs/blockchain/cripto.txt"),
    SeedDocument::new("Microbiologia e Saúde Pública", "Carolina Viana", 2019, "azw", "/docs/saude/microbiologia.azw"),
    SeedDocument::new("Metodologias Ágeis em TI", "João Santos", 2019, "pdf", "/docs/cs/metodologias.pdf"),
    SeedDocument::new("Lógica de Programação com JavaScript", "Ana Paula", 2021, "epub", "/docs/prog/js_logica.epub"),
    SeedDocument::new("Filosofia Contemporânea", "André Borges", 2016, "pdf", "/docs/filosofia/contemporanea.pdf"),
    SeedDocument::new("Geologia dos Solos", "Eduarda Pires", 2022, "docx", "/docs/geologia/solos.docx"),
    SeedDocument::new("Neurociência e Aprendizagem", "Lucas Pereira", 2016, "mobi", "/docs/psicologia/neuro_aprend.mobi"),
    SeedDocument::new("Inteligência Artificial Aplicada", "Maria Silva", 2023, "pdf", "/docs/ia/ia_aplicada.pdf"),
    SeedDocument::new("Direito Penal: Parte Geral", "Ricardo Souza", 2017, "epub", "/docs/direito/penal.epub"),
];

/// Add every entry to the store through the normal create path
pub fn seed(store: &mut DocumentStore, entries: &[SeedDocument]) {
    for entry in entries {
        store.create(entry.title, entry.author, entry.year, entry.file_type, entry.file_path);
    }
}

/// The demo catalog with ids 1..=35
pub fn demo_documents() -> Vec<Document> {
    DEMO.iter()
        .zip(1..)
        .map(|(entry, id)| entry.to_document(id))
        .collect()
}
