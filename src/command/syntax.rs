//! Declaratie van commandovlaggen en het ontleden van een commandoregel.
//!
//! Het ontleden gebeurt in twee stappen, net als bij de host: [`Syntax::parse`]
//! controleert alleen de structuur (bekende vlaggen, precies één waarde per
//! vlag) en bewaart de ruwe tekst. De conversie naar het gedeclareerde type
//! gebeurt pas bij het opvragen via [`ArgDatabase`].

use std::fmt;

use super::coerce;
use super::error::ArgumentError;

/// Gedeclareerd type van een vlagwaarde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    Double,
    Unsigned,
    Boolean,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Double => "double",
            Self::Unsigned => "unsigned",
            Self::Boolean => "boolean",
        })
    }
}

/// Een vlag met korte en lange naam, beide inclusief streepje.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub short: &'static str,
    pub long: &'static str,
    pub kind: ArgType,
}

impl FlagSpec {
    /// Lange naam zonder streepje, voor foutmeldingen.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.long.trim_start_matches('-')
    }

    #[must_use]
    pub fn matches(&self, flag: &str) -> bool {
        flag == self.short || flag == self.long
    }
}

/// Vlaggentabel van een commando.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syntax {
    flags: Vec<FlagSpec>,
}

impl Syntax {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_flag(mut self, short: &'static str, long: &'static str, kind: ArgType) -> Self {
        self.flags.push(FlagSpec { short, long, kind });
        self
    }

    #[must_use]
    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    #[must_use]
    pub fn find(&self, flag: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|spec| spec.matches(flag))
    }

    /// Controleert de argumenten tegen de vlaggentabel.
    ///
    /// Het token na een vlag is altijd de waarde, zodat `-p -1.5` een negatieve
    /// pitch is en geen tweede vlag.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ArgDatabase, ArgumentError> {
        let mut entries: Vec<(FlagSpec, String)> = Vec::new();
        let mut tokens = args.iter().map(AsRef::as_ref);

        while let Some(token) = tokens.next() {
            if !token.starts_with('-') {
                return Err(ArgumentError::UnexpectedArgument {
                    token: token.to_owned(),
                });
            }

            let spec = *self.find(token).ok_or_else(|| ArgumentError::UnknownFlag {
                flag: token.to_owned(),
            })?;

            if entries.iter().any(|(seen, _)| *seen == spec) {
                return Err(ArgumentError::DuplicateFlag {
                    flag: token.to_owned(),
                });
            }

            let value = tokens.next().ok_or_else(|| ArgumentError::MissingValue {
                flag: token.to_owned(),
            })?;
            entries.push((spec, value.to_owned()));
        }

        Ok(ArgDatabase { entries })
    }
}

/// Ontlede vlaggen met hun ruwe waarde.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgDatabase {
    entries: Vec<(FlagSpec, String)>,
}

impl ArgDatabase {
    #[must_use]
    pub fn is_flag_set(&self, flag: &str) -> bool {
        self.raw(flag).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn raw(&self, flag: &str) -> Option<(&FlagSpec, &str)> {
        self.entries
            .iter()
            .find(|(spec, _)| spec.matches(flag))
            .map(|(spec, value)| (spec, value.as_str()))
    }

    pub fn flag_double(&self, flag: &str) -> Result<Option<f64>, ArgumentError> {
        self.raw(flag)
            .map(|(spec, value)| coerce::coerce_double(spec, value))
            .transpose()
    }

    pub fn flag_unsigned(&self, flag: &str) -> Result<Option<u32>, ArgumentError> {
        self.raw(flag)
            .map(|(spec, value)| coerce::coerce_unsigned(spec, value))
            .transpose()
    }

    pub fn flag_boolean(&self, flag: &str) -> Result<Option<bool>, ArgumentError> {
        self.raw(flag)
            .map(|(spec, value)| coerce::coerce_boolean(spec, value))
            .transpose()
    }
}

/// Splitst een commandoregel in tokens.
///
/// Witruimte scheidt tokens, enkele of dubbele aanhalingstekens groeperen.
/// Een afsluitende `;` (zoals in een journal-script) wordt genegeerd.
pub fn tokenize(line: &str) -> Result<Vec<String>, ArgumentError> {
    let line = line.trim();
    let line = line.strip_suffix(';').unwrap_or(line);

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(ArgumentError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::{ArgType, Syntax, tokenize};
    use crate::command::error::ArgumentError;

    fn sample_syntax() -> Syntax {
        Syntax::new()
            .with_flag("-p", "-pitch", ArgType::Double)
            .with_flag("-ncv", "-numCVs", ArgType::Unsigned)
            .with_flag("-ud", "-upsideDown", ArgType::Boolean)
    }

    #[test]
    fn tokenize_handles_quotes_and_trailing_semicolon() {
        let tokens = tokenize("  helixToolCmd -p \"1.5\" -ud 'true' ;").expect("tokens");
        assert_eq!(tokens, vec!["helixToolCmd", "-p", "1.5", "-ud", "true"]);
    }

    #[test]
    fn tokenize_keeps_empty_quoted_token() {
        let tokens = tokenize("cmd -p ''").expect("tokens");
        assert_eq!(tokens, vec!["cmd", "-p", ""]);
    }

    #[test]
    fn tokenize_rejects_unterminated_quote() {
        assert_eq!(tokenize("cmd -p \"1.5"), Err(ArgumentError::UnterminatedQuote));
    }

    #[test]
    fn short_and_long_names_resolve_to_same_flag() {
        let syntax = sample_syntax();
        let db = syntax.parse(&["-pitch", "0.5", "-ncv", "12"]).expect("parse");
        assert!(db.is_flag_set("-p"));
        assert!(db.is_flag_set("-numCVs"));
        assert!(!db.is_flag_set("-ud"));
        assert_eq!(db.flag_double("-p"), Ok(Some(0.5)));
        assert_eq!(db.flag_unsigned("-numCVs"), Ok(Some(12)));
        assert_eq!(db.flag_boolean("-ud"), Ok(None));
    }

    #[test]
    fn negative_value_after_flag_is_a_value() {
        let db = sample_syntax().parse(&["-p", "-1.5"]).expect("parse");
        assert_eq!(db.flag_double("-pitch"), Ok(Some(-1.5)));
    }

    #[test]
    fn structural_errors_are_reported() {
        let syntax = sample_syntax();
        assert_eq!(
            syntax.parse(&["-q", "1"]),
            Err(ArgumentError::UnknownFlag { flag: "-q".into() })
        );
        assert_eq!(
            syntax.parse(&["1.0"]),
            Err(ArgumentError::UnexpectedArgument { token: "1.0".into() })
        );
        assert_eq!(
            syntax.parse(&["-p"]),
            Err(ArgumentError::MissingValue { flag: "-p".into() })
        );
        assert_eq!(
            syntax.parse(&["-p", "1", "-pitch", "2"]),
            Err(ArgumentError::DuplicateFlag { flag: "-pitch".into() })
        );
    }

    #[test]
    fn conversion_errors_name_the_flag() {
        let db = sample_syntax().parse(&["-ncv", "many"]).expect("parse");
        match db.flag_unsigned("-ncv") {
            Err(ArgumentError::InvalidValue { flag, value, expected }) => {
                assert_eq!(flag, "numCVs");
                assert_eq!(value, "many");
                assert_eq!(expected, ArgType::Unsigned);
            }
            other => panic!("verwacht InvalidValue, kreeg {other:?}"),
        }
    }
}
