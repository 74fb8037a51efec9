/// Longest session id accepted by the store, in bytes.
pub const MAX_SESSION_ID_LEN: usize = 256;

/// Tokens shorter than this (in chars) are never keywords.
pub const MIN_KEYWORD_CHARS: usize = 2;

/// Number of trailing messages rendered into a context line.
pub const CONTEXT_LINE_MESSAGES: usize = 3;

/// Characters of each message kept in a context line.
pub const CONTEXT_LINE_SNIPPET_CHARS: usize = 50;
