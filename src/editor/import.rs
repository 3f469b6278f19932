//! Import statement fragments.
//!
//! New imports are produced the same way a user would type them: the
//! statement `import <org>/<package>;` is rendered as text and run through a
//! [`FragmentParser`] to obtain the [`ImportRef`] added to the document.

use thiserror::Error;

use crate::model::ImportRef;

/// Reasons an import fragment cannot be turned into an [`ImportRef`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportParseError {
    #[error("expected `import` keyword")]
    MissingKeyword,
    #[error("expected `<org>/<package>` in `{0}`")]
    MissingOrgSeparator(String),
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),
    #[error("missing `;` after import")]
    MissingTerminator,
    #[error("unexpected input after import: `{0}`")]
    TrailingInput(String),
}

/// Parses a top-level source fragment into an import declaration.
pub trait FragmentParser {
    fn parse_import(&self, fragment: &str) -> Result<ImportRef, ImportParseError>;
}

/// Render the source text of an import declaration.
pub fn import_statement(org: &str, package: &str) -> String {
    format!("import {}/{};", org, package)
}

/// Default parser for `import org/pkg;` and `import org/a.b.c;` fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportStatementParser;

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_identifier(s: &str) -> Result<&str, ImportParseError> {
    if is_identifier(s) {
        Ok(s)
    } else {
        Err(ImportParseError::InvalidIdentifier(s.to_string()))
    }
}

impl FragmentParser for ImportStatementParser {
    fn parse_import(&self, fragment: &str) -> Result<ImportRef, ImportParseError> {
        let rest = fragment
            .trim()
            .strip_prefix("import")
            .filter(|r| r.starts_with(char::is_whitespace))
            .ok_or(ImportParseError::MissingKeyword)?;
        let (decl, trailing) = rest
            .split_once(';')
            .ok_or(ImportParseError::MissingTerminator)?;
        let trailing = trailing.trim();
        if !trailing.is_empty() {
            return Err(ImportParseError::TrailingInput(trailing.to_string()));
        }

        let decl = decl.trim();
        let (org, package) = decl
            .split_once('/')
            .ok_or_else(|| ImportParseError::MissingOrgSeparator(decl.to_string()))?;
        let org = check_identifier(org)?;
        let parts = package
            .split('.')
            .map(check_identifier)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ImportRef::new(org, &parts.join(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<ImportRef, ImportParseError> {
        ImportStatementParser.parse_import(s)
    }

    #[test]
    fn renders_statement() {
        assert_eq!(import_statement("wso2", "http"), "import wso2/http;");
    }

    #[test]
    fn parses_rendered_statement() {
        let stmt = format!("\n{}", import_statement("wso2", "http"));
        assert_eq!(parse(&stmt), Ok(ImportRef::new("wso2", "http")));
    }

    #[test]
    fn parses_multipart_package() {
        assert_eq!(
            parse("import ballerina/net.http;"),
            Ok(ImportRef::new("ballerina", "net.http"))
        );
    }

    #[test]
    fn rejects_malformed_fragments() {
        assert_eq!(parse("wso2/http;"), Err(ImportParseError::MissingKeyword));
        assert_eq!(parse("importwso2/http;"), Err(ImportParseError::MissingKeyword));
        assert_eq!(parse("import wso2/http"), Err(ImportParseError::MissingTerminator));
        assert_eq!(
            parse("import http;"),
            Err(ImportParseError::MissingOrgSeparator("http".to_string()))
        );
        assert_eq!(
            parse("import /http;"),
            Err(ImportParseError::InvalidIdentifier(String::new()))
        );
        assert_eq!(
            parse("import wso2/my-pkg;"),
            Err(ImportParseError::InvalidIdentifier("my-pkg".to_string()))
        );
        assert_eq!(
            parse("import wso2 /http;"),
            Err(ImportParseError::InvalidIdentifier("wso2 ".to_string()))
        );
        assert_eq!(
            parse("import wso2/ http;"),
            Err(ImportParseError::InvalidIdentifier(" http".to_string()))
        );
        assert_eq!(
            parse("import wso2/http; x"),
            Err(ImportParseError::TrailingInput("x".to_string()))
        );
    }
}
