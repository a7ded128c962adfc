//! Menu options and parsing of console input.

use thiserror::Error;

/// Invalid console input. Recovered locally by reprompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The menu choice is not an integer.
    #[error("Opção inválida! Por favor, digite um número.")]
    NotANumber {
        /// The raw input line.
        input: String,
    },

    /// The menu choice is an integer outside 0..=9.
    #[error("Opção inválida! Por favor, digite um número válido.")]
    UnknownOption {
        /// The parsed value.
        value: i64,
    },

    /// A year prompt received something other than an integer.
    #[error("Ano inválido! Por favor, digite um número inteiro.")]
    InvalidYear {
        /// The raw input line.
        input: String,
    },
}

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    SearchByTitle,
    SearchByAuthor,
    ListBooks,
    ListBooksByLanguage,
    AuthorsAliveInYear,
    AuthorsBornInYear,
    AuthorsDiedInYear,
    ListAuthors,
    Top10Downloads,
}

impl MenuOption {
    /// Parses one input line into a menu option.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotANumber`] for non-integer input and
    /// [`InputError::UnknownOption`] for integers without a menu entry.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| InputError::NotANumber {
                input: input.to_string(),
            })?;
        Self::try_from(value)
    }
}

impl TryFrom<i64> for MenuOption {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Exit),
            1 => Ok(Self::SearchByTitle),
            2 => Ok(Self::SearchByAuthor),
            3 => Ok(Self::ListBooks),
            4 => Ok(Self::ListBooksByLanguage),
            5 => Ok(Self::AuthorsAliveInYear),
            6 => Ok(Self::AuthorsBornInYear),
            7 => Ok(Self::AuthorsDiedInYear),
            8 => Ok(Self::ListAuthors),
            9 => Ok(Self::Top10Downloads),
            _ => Err(InputError::UnknownOption { value }),
        }
    }
}

/// Parses a year typed at a year prompt.
///
/// # Errors
///
/// Returns [`InputError::InvalidYear`] when the input is not an integer.
pub fn parse_year(input: &str) -> Result<i32, InputError> {
    input.trim().parse().map_err(|_| InputError::InvalidYear {
        input: input.to_string(),
    })
}
