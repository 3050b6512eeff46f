//! Parsing of the whitespace-separated test case input
//!
//! The input is a test case count `T` followed by `T` groups of four integers
//! `a c m k`. Tokens may be split across lines arbitrarily and anything after
//! the last group is ignored.

use std::io::Read;
use std::path::Path;

use miette::{NamedSource, SourceSpan};

use crate::core::Parameters;
use crate::error::{InputParseError, LcgError};

/// Cursor over the integer tokens of one named input
pub struct TokenStream<'a> {
    name: String,
    source: &'a str,
    position: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(name: impl Into<String>, source: &'a str) -> Self {
        Self {
            name: name.into(),
            source,
            position: 0,
        }
    }

    /// Read the next token as a signed integer
    ///
    /// `what` names the expected value in the error label.
    pub fn next_integer(&mut self, what: &str) -> Result<i64, LcgError> {
        let Some((start, token)) = self.next_token() else {
            return Err(self.error(
                format!("expected {what}, found end of input"),
                SourceSpan::new(self.source.len().into(), 0),
            ));
        };

        token.parse::<i64>().map_err(|_| {
            self.error(
                format!("expected {what}, found `{token}`"),
                SourceSpan::new(start.into(), token.len()),
            )
        })
    }

    /// Read one `a c m k` group
    pub fn read_parameters(&mut self) -> Result<Parameters, LcgError> {
        let a = self.next_integer("multiplier `a`")?;
        let c = self.next_integer("increment `c`")?;
        let m = self.next_integer("modulus `m`")?;
        let k = self.next_integer("seed `k`")?;
        Ok(Parameters::new(a, c, m, k))
    }

    pub fn read_case_count(&mut self) -> Result<usize, LcgError> {
        let count = self.next_integer("test case count")?;
        usize::try_from(count).map_err(|_| LcgError::NegativeCaseCount { count })
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let rest = &self.source[self.position..];
        let start = self.position + rest.find(|ch: char| !ch.is_whitespace())?;
        let len = self.source[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.source.len() - start);

        self.position = start + len;
        Some((start, &self.source[start..start + len]))
    }

    fn error(&self, message: String, span: SourceSpan) -> LcgError {
        LcgError::InputParse(Box::new(InputParseError {
            input: self.name.clone(),
            message,
            source_code: NamedSource::new(self.name.clone(), self.source.to_string()),
            span,
        }))
    }
}

/// Parse a complete input: the case count, then that many parameter groups
pub fn parse_cases(name: &str, source: &str) -> Result<Vec<Parameters>, LcgError> {
    let mut tokens = TokenStream::new(name, source);
    let count = tokens.read_case_count()?;

    (0..count).map(|_| tokens.read_parameters()).collect()
}

pub fn read_cases<R: Read>(name: &str, mut reader: R) -> Result<Vec<Parameters>, LcgError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_cases(name, &content)
}

pub fn read_cases_from_file(path: &Path) -> Result<Vec<Parameters>, LcgError> {
    let content = std::fs::read_to_string(path).map_err(|e| LcgError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_cases(&path.display().to_string(), &content)
}
