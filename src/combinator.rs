//! Minimal parser combinator kernel over a byte-indexed input.
//!
//! A parser is any `Fn(Input<'src>) -> Parsed<'src, T>`: on success it
//! returns the remaining input alongside the parsed value, on failure a
//! [`ParseFailure`] carrying a message and the byte offset where parsing
//! stopped.
//!
//! # Alternation semantics
//!
//! Alternation is ordered and predictable rather than fully backtracking:
//! an alternative that fails at its start offset (having consumed nothing)
//! lets the next alternative run, while an alternative that fails after
//! consuming input fails the whole alternation. [`opt`] provides the
//! explicit lookahead escape hatch by turning a non-consuming failure into
//! `Ok(None)`.

/// Parse state: the full source bytes plus the current offset.
///
/// `Input` is `Copy`; combinators thread new values forward and keep old
/// ones as checkpoints, so there is no mutable cursor to unwind.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Input<'src> {
    bytes: &'src [u8],
    offset: usize,
}

impl<'src> Input<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            bytes: source.as_bytes(),
            offset: 0,
        }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// The next byte, if any input remains.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    /// A new `Input` advanced by `count` bytes (clamped to the end).
    pub(crate) fn advance(mut self, count: usize) -> Self {
        self.offset = usize::min(self.offset + count, self.bytes.len());
        self
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// All bytes from the current offset to the end of the source.
    pub(crate) fn remainder(&self) -> &'src [u8] {
        &self.bytes[self.offset..]
    }

    /// The bytes consumed between `self` and a later `end` state.
    pub(crate) fn span_to(&self, end: &Input<'src>) -> &'src [u8] {
        &self.bytes[self.offset..end.offset]
    }
}

/// A failed parse: what was expected (or went wrong) and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ParseFailure {
    pub(crate) message: String,
    pub(crate) offset: usize,
}

impl ParseFailure {
    pub(crate) fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

pub(crate) type Parsed<'src, T> = Result<(Input<'src>, T), ParseFailure>;

// =========================================================
// Primitives
// =========================================================

/// Matches one exact byte.
pub(crate) fn byte<'src>(expected: u8) -> impl Fn(Input<'src>) -> Parsed<'src, u8> {
    move |input| match input.peek() {
        Some(actual) if actual == expected => Ok((input.advance(1), actual)),
        _ => Err(ParseFailure::new(
            format!("expected `{}`", expected as char),
            input.offset(),
        )),
    }
}

/// Matches one byte satisfying `predicate`; `expected` names the byte
/// class in the failure message.
pub(crate) fn byte_if<'src>(
    predicate: impl Fn(u8) -> bool,
    expected: &'static str,
) -> impl Fn(Input<'src>) -> Parsed<'src, u8> {
    move |input| match input.peek() {
        Some(actual) if predicate(actual) => Ok((input.advance(1), actual)),
        _ => Err(ParseFailure::new(
            format!("expected {expected}"),
            input.offset(),
        )),
    }
}

/// Matches an exact string.
///
/// Atomic: on mismatch the failure is reported at the start offset with
/// nothing consumed, so a partially-matching literal never poisons an
/// enclosing alternation.
pub(crate) fn literal<'src>(expected: &'static str) -> impl Fn(Input<'src>) -> Parsed<'src, ()> {
    move |input| {
        if input.remainder().starts_with(expected.as_bytes()) {
            Ok((input.advance(expected.len()), ()))
        } else {
            Err(ParseFailure::new(
                format!("expected `{expected}`"),
                input.offset(),
            ))
        }
    }
}

// =========================================================
// Combinators
// =========================================================

/// Applies `transform` to the parsed value.
pub(crate) fn map<'src, T, U>(
    parser: impl Fn(Input<'src>) -> Parsed<'src, T>,
    transform: impl Fn(T) -> U,
) -> impl Fn(Input<'src>) -> Parsed<'src, U> {
    move |input| {
        let (rest, value) = parser(input)?;
        Ok((rest, transform(value)))
    }
}

/// Monadic bind specialized to validation: `binder` may reject the parsed
/// value with a message, which becomes a failure at the post-parse offset.
///
/// Because the failure offset sits after the consumed input, a rejection
/// here fails any enclosing alternation instead of silently falling
/// through to a later alternative.
pub(crate) fn and_then<'src, T, U>(
    parser: impl Fn(Input<'src>) -> Parsed<'src, T>,
    binder: impl Fn(T) -> Result<U, String>,
) -> impl Fn(Input<'src>) -> Parsed<'src, U> {
    move |input| {
        let (rest, value) = parser(input)?;
        match binder(value) {
            Ok(bound) => Ok((rest, bound)),
            Err(message) => Err(ParseFailure::new(message, rest.offset())),
        }
    }
}

/// Zero-or-one: a failure that consumed nothing becomes `Ok(None)`.
pub(crate) fn opt<'src, T>(
    parser: impl Fn(Input<'src>) -> Parsed<'src, T>,
) -> impl Fn(Input<'src>) -> Parsed<'src, Option<T>> {
    move |input| match parser(input) {
        Ok((rest, value)) => Ok((rest, Some(value))),
        Err(failure) if failure.offset > input.offset() => Err(failure),
        Err(_) => Ok((input, None)),
    }
}

/// Zero-or-more, stopping at the first non-consuming failure.
///
/// A success that consumed nothing also stops the loop, so a parser that
/// can match empty input cannot spin forever.
pub(crate) fn many0<'src, T>(
    parser: impl Fn(Input<'src>) -> Parsed<'src, T>,
) -> impl Fn(Input<'src>) -> Parsed<'src, Vec<T>> {
    move |mut input| {
        let mut items = Vec::new();
        loop {
            match parser(input) {
                Ok((rest, item)) => {
                    if rest.offset() == input.offset() {
                        break;
                    }
                    items.push(item);
                    input = rest;
                },
                Err(failure) if failure.offset > input.offset() => return Err(failure),
                Err(_) => break,
            }
        }
        Ok((input, items))
    }
}

/// One-or-more, stopping at the first non-consuming failure.
pub(crate) fn many1<'src, T>(
    parser: impl Fn(Input<'src>) -> Parsed<'src, T>,
) -> impl Fn(Input<'src>) -> Parsed<'src, Vec<T>> {
    move |input| {
        let (input, first) = parser(input)?;
        let (input, rest) = many0(&parser)(input)?;
        let mut items = vec![first];
        items.extend(rest);
        Ok((input, items))
    }
}

/// One-or-more `parser`, separated by `separator`.
///
/// The loop checkpoints before each separator: when the item after a
/// separator fails without consuming, the separator's consumption is
/// rolled back and the list ends. A separator may match empty input; the
/// items themselves must consume for the loop to continue.
pub(crate) fn sep_by1<'src, T, S>(
    parser: impl Fn(Input<'src>) -> Parsed<'src, T>,
    separator: impl Fn(Input<'src>) -> Parsed<'src, S>,
) -> impl Fn(Input<'src>) -> Parsed<'src, Vec<T>> {
    move |input| {
        let (mut input, first) = parser(input)?;
        let mut items = vec![first];
        loop {
            let checkpoint = input;
            let after_separator = match separator(checkpoint) {
                Ok((rest, _)) => rest,
                Err(failure) if failure.offset > checkpoint.offset() => return Err(failure),
                Err(_) => break,
            };
            match parser(after_separator) {
                Ok((rest, item)) => {
                    if rest.offset() == checkpoint.offset() {
                        break;
                    }
                    items.push(item);
                    input = rest;
                },
                Err(failure) if failure.offset > after_separator.offset() => return Err(failure),
                Err(_) => break,
            }
        }
        Ok((input, items))
    }
}

/// Zero-or-more `parser`, separated by `separator`.
pub(crate) fn sep_by<'src, T, S>(
    parser: impl Fn(Input<'src>) -> Parsed<'src, T>,
    separator: impl Fn(Input<'src>) -> Parsed<'src, S>,
) -> impl Fn(Input<'src>) -> Parsed<'src, Vec<T>> {
    move |input| match sep_by1(&parser, &separator)(input) {
        Ok(parsed) => Ok(parsed),
        Err(failure) if failure.offset > input.offset() => Err(failure),
        Err(_) => Ok((input, Vec::new())),
    }
}

// =========================================================
// Ordered alternation
// =========================================================

/// A tuple of alternative parsers sharing an output type.
///
/// Implemented for tuples of arity 2 through 8. Alternatives run in
/// declared order; see the module docs for the consumption rules.
pub(crate) trait Alt<'src, T> {
    fn choice(&self, input: Input<'src>) -> Parsed<'src, T>;
}

macro_rules! impl_alt {
    ($($parser:ident . $index:tt),+) => {
        impl<'src, T, $($parser),+> Alt<'src, T> for ($($parser,)+)
        where
            $($parser: Fn(Input<'src>) -> Parsed<'src, T>),+
        {
            fn choice(&self, input: Input<'src>) -> Parsed<'src, T> {
                let mut last_failure: Option<ParseFailure> = None;
                $(
                    match (self.$index)(input) {
                        Ok(parsed) => return Ok(parsed),
                        Err(failure) if failure.offset > input.offset() => {
                            return Err(failure);
                        },
                        Err(failure) => {
                            last_failure = Some(failure);
                        },
                    }
                )+
                Err(last_failure.unwrap_or_else(|| {
                    ParseFailure::new("no alternative matched", input.offset())
                }))
            }
        }
    };
}

impl_alt!(P0.0, P1.1);
impl_alt!(P0.0, P1.1, P2.2);
impl_alt!(P0.0, P1.1, P2.2, P3.3);
impl_alt!(P0.0, P1.1, P2.2, P3.3, P4.4);
impl_alt!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5);
impl_alt!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6);
impl_alt!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6, P7.7);

/// Tries each alternative in declared order.
pub(crate) fn one_of<'src, T, A>(alternatives: A) -> impl Fn(Input<'src>) -> Parsed<'src, T>
where
    A: Alt<'src, T>,
{
    move |input| alternatives.choice(input)
}
