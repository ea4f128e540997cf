//! Package-identifier matching with `..` and `*` wildcards
//!
//! Architectural Principle: Service Layer - PackageMatcher owns the identifier grammar
//! - `..` stands for any number (including zero) of intermediate package segments
//! - `*` stands for one or more characters within a single segment part
//! - Matching is case-sensitive and segment-wise; no regex translation involved

/// A compiled package-identifier pattern
///
/// Both layer membership and rule descriptions depend on the exact semantics
/// here, so this is the only place they are defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMatcher {
    /// Original pattern string for display and debugging
    pattern: String,
    tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// `..` - any number of segments, including none
    AnySegments,
    /// A literal segment, matched verbatim
    Literal(String),
    /// A segment containing `*` wildcards
    Glob(String),
}

impl PackageMatcher {
    /// Compile a package-identifier pattern, e.g. `..driven.adapter..` or `com.acme.*`
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let mut tokens = Vec::new();

        for part in pattern.split('.') {
            if part.is_empty() {
                // Runs of dots collapse into a single any-segments wildcard
                if !matches!(tokens.last(), Some(Token::AnySegments)) {
                    tokens.push(Token::AnySegments);
                }
            } else if part.contains('*') {
                tokens.push(Token::Glob(part.to_string()));
            } else {
                tokens.push(Token::Literal(part.to_string()));
            }
        }

        Self { pattern, tokens }
    }

    /// Whether the given package name matches this pattern
    pub fn matches(&self, package: &str) -> bool {
        let segments: Vec<&str> =
            if package.is_empty() { Vec::new() } else { package.split('.').collect() };
        match_tokens(&self.tokens, &segments)
    }

    /// The original pattern string this matcher was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl std::fmt::Display for PackageMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn match_tokens(tokens: &[Token], segments: &[&str]) -> bool {
    match tokens.split_first() {
        None => segments.is_empty(),
        Some((Token::AnySegments, rest)) => {
            (0..=segments.len()).any(|skip| match_tokens(rest, &segments[skip..]))
        }
        Some((token, rest)) => match segments.split_first() {
            Some((segment, remaining)) => {
                segment_matches(token, segment) && match_tokens(rest, remaining)
            }
            None => false,
        },
    }
}

fn segment_matches(token: &Token, segment: &str) -> bool {
    match token {
        Token::Literal(literal) => literal == segment,
        Token::Glob(glob) => glob_matches(glob, segment),
        Token::AnySegments => unreachable!("handled by match_tokens"),
    }
}

/// Match a single segment against a glob part, `*` consuming one or more characters
fn glob_matches(glob: &str, segment: &str) -> bool {
    fn go(pattern: &[char], text: &[char]) -> bool {
        match pattern.split_first() {
            None => text.is_empty(),
            Some(('*', rest)) => (1..=text.len()).any(|taken| go(rest, &text[taken..])),
            Some((expected, rest)) => match text.split_first() {
                Some((actual, remaining)) => actual == expected && go(rest, remaining),
                None => false,
            },
        }
    }

    let pattern: Vec<char> = glob.chars().collect();
    let text: Vec<char> = segment.chars().collect();
    go(&pattern, &text)
}
