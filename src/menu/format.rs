//! Console texts and record formatting for the menu.

use crate::catalog::Book;

pub const MENU_TEXT: &str = "\
========================== DESAFIO LITERALURA ==========================

Menu de Opções:

[1] Buscar livros pelo título
[2] Buscar livro por nome do autor
[3] Listar livros já registrados
[4] Listar livros em determinado idioma
[5] Listar autores VIVOS em um determinado ano
[6] Listar autores NASCIDOS em determinado ano
[7] Listar autores por ano de sua morte
[8] Listar todos os autores já registrados
[9] Top 10 livros mais baixados!!!
[0] Sair

=========================================================================
Escolha uma opção:";

pub const LANGUAGE_PROMPT: &str = "\
Digite o idioma pretendido:
Português (pt)
Alemão (de)
Espanhol (es)
Francês (fr)
Inglês (en)
Japonês (ja)";

pub const TITLE_PROMPT: &str = "Digite o título do livro: ";
pub const AUTHOR_PROMPT: &str = "Digite o nome do autor: ";
pub const YEAR_PROMPT: &str = "Digite o ano: ";

pub const GOODBYE: &str = "Encerrando a LiterAlura!";
pub const EMPTY_QUERY: &str = "Nenhum termo de busca informado.";
pub const EMPTY_RESPONSE: &str = "Resposta da API está vazia.";
pub const TITLE_NOT_FOUND: &str = "Não foi possível encontrar o livro buscado.";
pub const AUTHOR_NOT_FOUND: &str = "Nenhum livro encontrado para o autor informado.";
pub const BOOKS_SAVED: &str = "Livros salvos com sucesso!";
pub const TITLE_SEARCH_FAILED: &str = "Erro ao buscar livros";
pub const AUTHOR_SEARCH_FAILED: &str = "Erro ao buscar livros por autor";
pub const CATALOG_FAILED: &str = "Erro ao consultar o catálogo";

pub const NO_BOOKS: &str = "Nenhum livro registrado.";
pub const NO_BOOKS_IN_LANGUAGE: &str = "Nenhum livro encontrado no idioma especificado.";
pub const NO_AUTHORS_ALIVE: &str = "Nenhum autor vivo encontrado no ano informado.";
pub const NO_AUTHORS_BORN: &str = "Nenhum autor nascido no ano informado.";
pub const NO_AUTHORS: &str = "Nenhum autor registrado.";
pub const AUTHORS_HEADER: &str = "Autores registrados:";
pub const NO_TOP_BOOKS: &str = "Não há livros cadastrados.";
pub const TOP_BOOKS_HEADER: &str = "Top 10 livros mais baixados:";

#[must_use]
pub fn no_authors_died(year: i32) -> String {
    format!("Nenhum autor encontrado que morreu no ano de {year}")
}

#[must_use]
pub fn authors_alive_header(year: i32) -> String {
    format!("Lista de autores vivos no ano de {year}:\n")
}

#[must_use]
pub fn authors_born_header(year: i32) -> String {
    format!("Lista de autores nascidos no ano de {year}:\n")
}

#[must_use]
pub fn authors_died_header(year: i32) -> String {
    format!("Lista de autores que morreram no ano de {year}:\n")
}

/// One line of the most-downloaded report.
#[must_use]
pub fn top_book_line(book: &Book) -> String {
    format!("Título: {}, Downloads: {}", book.title, book.download_count)
}
