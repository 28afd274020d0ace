#![no_main]

use bracelint::{LintConfig, lexer::lex, lint_source};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let stream = lex(s);
        assert!(stream.is_consistent());
        assert_eq!(stream.to_source(), s);

        for tok in stream.tokens() {
            assert!(tok.line() >= 1 && tok.column() >= 1);
        }

        let (report, fixed) = lint_source(s, &LintConfig::new().with_fix(true));
        let _ = report.len();
        assert!(lex(&fixed).is_consistent());
    }
});
