#![no_main]

use arbitrary::Arbitrary;
use bracelint::rules::opening_brace;
use bracelint::{LintConfig, Linter, Rule, Token, TokenKind, TokenStream};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    tokens: Vec<(TokenKind, u8)>,
}

/// A plausible value for `kind`; `pick` chooses between a few variants.
fn value_for(kind: TokenKind, pick: u8) -> &'static str {
    match kind {
        TokenKind::LBrace => "{",
        TokenKind::RBrace => "}",
        TokenKind::LBrack => "[",
        TokenKind::RBrack => "]",
        TokenKind::LParen => "(",
        TokenKind::RParen => ")",
        TokenKind::Colon => ":",
        TokenKind::Comma => ",",
        TokenKind::Semicolon => ";",
        TokenKind::FatArrow => "=>",
        TokenKind::Equals => "=",
        TokenKind::Comment => "# c",
        TokenKind::Whitespace | TokenKind::Indent => ["", " ", "  ", "\t"][pick as usize % 4],
        TokenKind::Newline => ["\n", "\r\n"][pick as usize % 2],
        TokenKind::Class => "class",
        TokenKind::Define => "define",
        TokenKind::Inherits => "inherits",
        TokenKind::Name => "example",
        TokenKind::ClassRef => "Example",
        TokenKind::Variable => "$x",
        TokenKind::String => "'s'",
        TokenKind::Number => "1",
        TokenKind::Other => "~",
    }
}

fn build(input: &Input) -> TokenStream {
    input
        .tokens
        .iter()
        .enumerate()
        .map(|(i, (kind, pick))| Token::new(*kind, value_for(*kind, *pick), 1, i + 1))
        .collect()
}

/// Fix with `rule` alone, then make sure nothing is left for it to report.
fn fix_to_fixed_point(rule: Rule, stream: &mut TokenStream) {
    let linter = Linter::with_registry([rule].into_iter().collect(), LintConfig::new().with_fix(true));
    let report = linter.run(stream);
    assert!(stream.is_consistent());
    if report.failed_count() == 0 {
        assert!(rule.check(stream).is_empty(), "{}", report);
    }
}

fuzz_target!(|input: Input| {
    let mut stream = build(&input);
    let before = stream.to_source();

    let _ = Linter::new(LintConfig::new()).check(&stream);
    assert_eq!(stream.to_source(), before);

    fix_to_fixed_point(opening_brace::BEFORE, &mut stream);
    fix_to_fixed_point(opening_brace::AFTER, &mut stream);

    let mut all = build(&input);
    let _ = Linter::new(LintConfig::new().with_fix(true)).run(&mut all);
    assert!(all.is_consistent());
});
