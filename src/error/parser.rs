use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("failed to parse {language} source code")]
    ParseFailed { language: String },
}

impl ParserError {
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(language: impl Into<String>) -> Self {
        Self::ParseFailed {
            language: language.into(),
        }
    }
}
