//! Search clause building for environment and filter listings.
//!
//! Turns a free-text search string into a SQL WHERE-clause fragment plus its
//! bound parameters. Two match modes:
//! - Unquoted: fuzzy subsequence matching with wildcards between characters
//!   (case-insensitive)
//! - Quoted (`"..."` or `'...'`): literal substring match (case-sensitive)
//!
//! The clause is a boolean OR across the caller's columns. User text only
//! ever reaches the database through bind parameters, never spliced into the
//! clause, so no input can change the pattern's role as a literal.

use std::fmt;

use tracing::warn;

/// Neutral predicate returned for blank queries and empty column lists, so
/// callers can AND the clause into a larger statement without branching.
const MATCH_ALL: &str = "1=1";

/// Target SQL engine family, selecting the pattern syntax for exact matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `SQLite`: LIKE is case-insensitive by construction, so case-sensitive
    /// matching goes through GLOB.
    Sqlite,
    /// PostgreSQL: LIKE is case-sensitive by default.
    Postgres,
}

impl Dialect {
    /// Returns the dialect as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        }
    }

    /// Parses a dialect from a database driver string.
    ///
    /// Unrecognized values fall back to [`Dialect::Postgres`], i.e. plain
    /// case-sensitive LIKE. The fallback is deliberate compatibility
    /// behavior, not an error path; a warning is logged so a misconfigured
    /// driver name stays visible without failing the search.
    ///
    /// # Examples
    ///
    /// ```
    /// use envhub::search::Dialect;
    ///
    /// assert_eq!(Dialect::parse("sqlite"), Dialect::Sqlite);
    /// assert_eq!(Dialect::parse("postgresql"), Dialect::Postgres);
    /// assert_eq!(Dialect::parse("mysql"), Dialect::Postgres);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Self::Sqlite,
            "postgres" | "postgresql" => Self::Postgres,
            other => {
                warn!(
                    dialect = other,
                    "unrecognized SQL dialect, using postgres pattern syntax"
                );
                Self::Postgres
            },
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A search clause ready to embed into a larger WHERE condition.
///
/// `clause` is a boolean OR of per-column predicates with `?`-style
/// positional placeholders; `args` holds one bind value per placeholder, in
/// the same left-to-right order. A dialect with numbered placeholders (e.g.
/// `$1`) is the caller's responsibility to renumber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// SQL boolean fragment, e.g. `"LOWER(name) LIKE ? OR LOWER(api_url) LIKE ?"`.
    pub clause: String,
    /// Bind parameters for the clause's placeholders, in order.
    pub args: Vec<String>,
}

impl SearchQuery {
    /// The neutral always-true query.
    fn match_all() -> Self {
        Self {
            clause: MATCH_ALL.to_string(),
            args: Vec::new(),
        }
    }

    fn from_pattern(pattern: String, predicates: Vec<String>) -> Self {
        let count = predicates.len();
        Self {
            clause: predicates.join(" OR "),
            args: vec![pattern; count],
        }
    }
}

/// Builds a dialect-correct search clause over `columns`.
///
/// Unquoted queries match fuzzily: the lower-cased query characters must
/// appear in order, with arbitrary gaps, anywhere in the lower-cased column
/// value. Wrapping the query in matching double or single quotes requests a
/// case-sensitive literal substring match instead; quote detection is purely
/// structural (first and last character), with no nested-quote handling.
///
/// A blank query or an empty column list yields the neutral `1=1` clause
/// with no arguments.
///
/// # Security
///
/// `columns` are spliced into the clause as raw SQL identifiers and must be
/// trusted names, never user input. The query text itself is fully escaped
/// into LIKE/GLOB patterns and carried only by the returned args.
///
/// # Examples
///
/// ```
/// use envhub::search::{Dialect, build_search};
///
/// // Fuzzy: wildcard before, between, and after every character
/// let q = build_search("dck", Dialect::Postgres, &["name"]);
/// assert_eq!(q.clause, "LOWER(name) LIKE ?");
/// assert_eq!(q.args, vec!["%d%c%k%"]);
///
/// // Exact on sqlite goes through GLOB for case-sensitivity
/// let q = build_search("\"Foo\"", Dialect::Sqlite, &["name"]);
/// assert_eq!(q.clause, "name GLOB ?");
/// assert_eq!(q.args, vec!["*Foo*"]);
/// ```
#[must_use]
pub fn build_search(query: &str, dialect: Dialect, columns: &[&str]) -> SearchQuery {
    let query = query.trim();
    if query.is_empty() || columns.is_empty() {
        return SearchQuery::match_all();
    }

    strip_quotes(query).map_or_else(
        || build_fuzzy(query, columns),
        |raw| build_exact(raw, dialect, columns),
    )
}

/// Detects a quoted query and strips one surrounding quote pair.
///
/// Structural check only: length at least 2 and the first and last bytes are
/// the same quote character. Nothing inside the quotes is interpreted.
fn strip_quotes(query: &str) -> Option<&str> {
    let bytes = query.as_bytes();
    if bytes.len() >= 2
        && bytes[0] == bytes[bytes.len() - 1]
        && (bytes[0] == b'"' || bytes[0] == b'\'')
    {
        Some(&query[1..query.len() - 1])
    } else {
        None
    }
}

/// Builds the case-insensitive fuzzy clause: `LOWER(col) LIKE ?` per column.
fn build_fuzzy(query: &str, columns: &[&str]) -> SearchQuery {
    let predicates = columns
        .iter()
        .map(|col| format!("LOWER({col}) LIKE ?"))
        .collect();
    SearchQuery::from_pattern(fuzzy_pattern(query), predicates)
}

/// Builds the case-sensitive exact clause, branching on dialect.
fn build_exact(query: &str, dialect: Dialect, columns: &[&str]) -> SearchQuery {
    match dialect {
        Dialect::Sqlite => {
            let predicates = columns.iter().map(|col| format!("{col} GLOB ?")).collect();
            SearchQuery::from_pattern(glob_pattern(query), predicates)
        },
        Dialect::Postgres => {
            let predicates = columns.iter().map(|col| format!("{col} LIKE ?")).collect();
            SearchQuery::from_pattern(like_pattern(query), predicates)
        },
    }
}

/// Builds the fuzzy LIKE pattern: a wildcard before, between, and after every
/// character of the lower-cased query.
///
/// `"dck"` becomes `"%d%c%k%"`. LIKE metacharacters (`%`, `_`, `\`) are
/// backslash-escaped so they match literally: `"50%"` becomes `"%5%0%\%%"`.
fn fuzzy_pattern(query: &str) -> String {
    let lowered = query.to_lowercase();
    let mut pattern = String::with_capacity(lowered.len() * 3 + 1);
    pattern.push('%');
    for c in lowered.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
        pattern.push('%');
    }
    pattern
}

/// Builds a LIKE pattern for literal substring matching: metacharacters
/// escaped, the whole query wrapped in `%`.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Builds a GLOB pattern for literal substring matching.
///
/// GLOB has no escape character, so metacharacters are neutralized with
/// single-element character classes: `[` -> `[[]`, `*` -> `[*]`, `?` -> `[?]`.
fn glob_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('*');
    for c in query.chars() {
        match c {
            '[' => pattern.push_str("[[]"),
            '*' => pattern.push_str("[*]"),
            '?' => pattern.push_str("[?]"),
            _ => pattern.push(c),
        }
    }
    pattern.push('*');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const COLUMNS: &[&str] = &["name", "api_url"];

    #[test]
    fn test_empty_query_matches_all() {
        for dialect in [Dialect::Sqlite, Dialect::Postgres] {
            let result = build_search("", dialect, COLUMNS);
            assert_eq!(result.clause, "1=1");
            assert!(result.args.is_empty());
        }
    }

    #[test]
    fn test_blank_query_matches_all() {
        let result = build_search("   \t\n  ", Dialect::Sqlite, COLUMNS);
        assert_eq!(result.clause, "1=1");
        assert!(result.args.is_empty());
    }

    #[test]
    fn test_empty_columns_match_all() {
        let result = build_search("dck", Dialect::Postgres, &[]);
        assert_eq!(result.clause, "1=1");
        assert!(result.args.is_empty());
    }

    #[test]
    fn test_fuzzy_single_column() {
        let result = build_search("dck", Dialect::Postgres, &["name"]);
        assert_eq!(result.clause, "LOWER(name) LIKE ?");
        assert_eq!(result.args, vec!["%d%c%k%"]);
    }

    #[test]
    fn test_fuzzy_lowercases_query() {
        let result = build_search("DcK", Dialect::Sqlite, &["name"]);
        assert_eq!(result.args, vec!["%d%c%k%"]);
    }

    #[test]
    fn test_fuzzy_escapes_like_metacharacters() {
        let result = build_search("50%", Dialect::Postgres, &["c"]);
        assert_eq!(result.args, vec!["%5%0%\\%%"]);

        let result = build_search("a_b", Dialect::Postgres, &["c"]);
        assert_eq!(result.args, vec!["%a%\\_%b%"]);

        let result = build_search("a\\b", Dialect::Postgres, &["c"]);
        assert_eq!(result.args, vec!["%a%\\\\%b%"]);
    }

    #[test]
    fn test_fuzzy_same_for_both_dialects() {
        let sqlite = build_search("dck", Dialect::Sqlite, COLUMNS);
        let postgres = build_search("dck", Dialect::Postgres, COLUMNS);
        assert_eq!(sqlite, postgres);
    }

    #[test]
    fn test_fuzzy_multiple_columns_preserve_order() {
        let result = build_search("x", Dialect::Postgres, &["a", "b"]);
        assert_eq!(result.clause, "LOWER(a) LIKE ? OR LOWER(b) LIKE ?");
        assert_eq!(result.args, vec!["%x%", "%x%"]);
    }

    #[test]
    fn test_exact_sqlite_uses_glob() {
        let result = build_search("\"Foo\"", Dialect::Sqlite, &["name"]);
        assert_eq!(result.clause, "name GLOB ?");
        assert_eq!(result.args, vec!["*Foo*"]);
    }

    #[test]
    fn test_exact_sqlite_escapes_glob_metacharacters() {
        let result = build_search("\"a*b?c[d\"", Dialect::Sqlite, &["name"]);
        assert_eq!(result.args, vec!["*a[*]b[?]c[[]d*"]);
    }

    #[test]
    fn test_exact_postgres_uses_like_and_preserves_case() {
        let result = build_search("'Foo'", Dialect::Postgres, &["name"]);
        assert_eq!(result.clause, "name LIKE ?");
        assert_eq!(result.args, vec!["%Foo%"]);
    }

    #[test]
    fn test_exact_postgres_escapes_like_metacharacters() {
        let result = build_search("'50%_x\\'", Dialect::Postgres, &["name"]);
        assert_eq!(result.args, vec!["%50\\%\\_x\\\\%"]);
    }

    #[test]
    fn test_exact_single_quotes_on_sqlite() {
        let result = build_search("'Foo'", Dialect::Sqlite, &["name"]);
        assert_eq!(result.clause, "name GLOB ?");
        assert_eq!(result.args, vec!["*Foo*"]);
    }

    #[test]
    fn test_exact_multiple_columns() {
        let result = build_search("\"Foo\"", Dialect::Postgres, COLUMNS);
        assert_eq!(result.clause, "name LIKE ? OR api_url LIKE ?");
        assert_eq!(result.args, vec!["%Foo%", "%Foo%"]);
    }

    #[test]
    fn test_quotes_detected_after_trim() {
        let result = build_search("  'Foo'  ", Dialect::Postgres, &["name"]);
        assert_eq!(result.clause, "name LIKE ?");
        assert_eq!(result.args, vec!["%Foo%"]);
    }

    #[test]
    fn test_mismatched_quotes_fall_back_to_fuzzy() {
        let result = build_search("\"Foo'", Dialect::Postgres, &["name"]);
        assert_eq!(result.clause, "LOWER(name) LIKE ?");
        assert_eq!(result.args, vec!["%\"%f%o%o%'%"]);
    }

    #[test]
    fn test_lone_quote_is_fuzzy() {
        // Length 1: structural check needs at least two characters.
        let result = build_search("'", Dialect::Sqlite, &["name"]);
        assert_eq!(result.clause, "LOWER(name) LIKE ?");
        assert_eq!(result.args, vec!["%'%"]);
    }

    #[test]
    fn test_quoted_empty_string() {
        let result = build_search("\"\"", Dialect::Postgres, &["name"]);
        assert_eq!(result.clause, "name LIKE ?");
        assert_eq!(result.args, vec!["%%"]);

        let result = build_search("''", Dialect::Sqlite, &["name"]);
        assert_eq!(result.clause, "name GLOB ?");
        assert_eq!(result.args, vec!["**"]);
    }

    #[test]
    fn test_quotes_inside_query_are_literal() {
        let result = build_search("a\"b", Dialect::Postgres, &["name"]);
        assert_eq!(result.args, vec!["%a%\"%b%"]);
    }

    #[test]
    fn test_fuzzy_multibyte_characters() {
        let result = build_search("Żółw", Dialect::Postgres, &["name"]);
        assert_eq!(result.args, vec!["%ż%ó%ł%w%"]);
    }

    #[test]
    fn test_args_count_matches_or_terms() {
        let result = build_search("dck", Dialect::Sqlite, &["a", "b", "c"]);
        assert_eq!(result.args.len(), result.clause.matches(" OR ").count() + 1);
        assert_eq!(result.args.len(), result.clause.matches('?').count());
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build_search("50%_x", Dialect::Sqlite, COLUMNS);
        let second = build_search("50%_x", Dialect::Sqlite, COLUMNS);
        assert_eq!(first, second);
    }

    #[test_case("sqlite", Dialect::Sqlite; "sqlite")]
    #[test_case("SQLite", Dialect::Sqlite; "sqlite mixed case")]
    #[test_case("sqlite3", Dialect::Sqlite; "sqlite3 alias")]
    #[test_case("postgres", Dialect::Postgres; "postgres")]
    #[test_case("postgresql", Dialect::Postgres; "postgresql alias")]
    #[test_case("mysql", Dialect::Postgres; "unknown falls back")]
    #[test_case("", Dialect::Postgres; "empty falls back")]
    fn test_dialect_parse(input: &str, expected: Dialect) {
        assert_eq!(Dialect::parse(input), expected);
    }

    #[test]
    fn test_unknown_dialect_builds_like_postgres() {
        let fallback = build_search("'Foo'", Dialect::parse("mysql"), &["name"]);
        let postgres = build_search("'Foo'", Dialect::Postgres, &["name"]);
        assert_eq!(fallback, postgres);
    }

    #[test]
    fn test_dialect_display_roundtrips() {
        for dialect in [Dialect::Sqlite, Dialect::Postgres] {
            assert_eq!(Dialect::parse(dialect.as_str()), dialect);
            assert_eq!(dialect.to_string(), dialect.as_str());
        }
    }
}
