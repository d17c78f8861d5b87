use std::mem;

use crate::flag::Flag;

enum State {
    Normal,
    InQuotes,
    InDoubleQuotes,
}

/// One argument of a command line.
///
/// `text` is the exact slice that was consumed, quotes and backslashes
/// included. `completed` is set once unquoted, unescaped whitespace has
/// followed the argument; the last argument of a line that does not end in
/// such whitespace is still being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub text: String,
    pub completed: bool,
    pub flag: Flag,
}

impl Arg {
    pub fn new (text: String, completed: bool) -> Self {
        let flag = Flag::parse(&text);
        Self { text, completed, flag }
    }

    pub fn is_live (&self) -> bool {
        !self.completed
    }
}

pub fn parse (line: &str) -> Vec<Arg> {
    let mut args = Vec::new();
    let mut text = String::new();
    let mut state = State::Normal;
    let mut escaped = false;

    for ch in line.chars() {
        if escaped {
            escaped = false;
            text.push(ch);
            continue;
        }

        match state {
            _ if ch == '\\' => {
                escaped = true;
            }
            State::Normal => {
                match ch {
                    '\'' => {
                        state = State::InQuotes;
                    }
                    '"' => {
                        state = State::InDoubleQuotes;
                    }
                    ch if ch.is_whitespace() => {
                        if text.is_empty() { continue; }
                        log::trace!("closed arg {:?}", text);
                        args.push(Arg::new(mem::take(&mut text), true));
                        continue;
                    }
                    _ => {}
                }
            }
            State::InQuotes => {
                if ch == '\'' { state = State::Normal; }
            }
            State::InDoubleQuotes => {
                if ch == '"' { state = State::Normal; }
            }
        }

        text.push(ch);
    }

    if !text.is_empty() {
        log::trace!("open arg {:?}", text);
        args.push(Arg::new(text, false));
    }

    args
}

#[cfg(test)]
mod arg_tests {
    use super::*;

    fn texts (line: &str) -> Vec<(String, bool)> {
        parse(line).into_iter().map(|arg| (arg.text, arg.completed)).collect()
    }

    fn expect (pairs: &[(&str, bool)]) -> Vec<(String, bool)> {
        pairs.iter().map(|(text, completed)| (text.to_string(), *completed)).collect()
    }

    #[test]
    fn test_plain_words () {
        assert_eq!(texts("a b"), expect(&[("a", true), ("b", false)]));
        assert_eq!(texts("a  b"), expect(&[("a", true), ("b", false)]));
        assert_eq!(texts(" a b "), expect(&[("a", true), ("b", true)]));
        assert_eq!(texts(" a "), expect(&[("a", true)]));
        assert_eq!(texts(" a"), expect(&[("a", false)]));
    }

    #[test]
    fn test_blank_lines () {
        assert!(parse("").is_empty());
        assert!(parse("  ").is_empty());
        assert!(parse(" \t \n").is_empty());
    }

    #[test]
    fn test_escaped_spaces () {
        assert_eq!(texts(r"\ a\ b c\ "), expect(&[(r"\ a\ b", true), (r"c\ ", false)]));
    }

    #[test]
    fn test_escaped_quote_does_not_open () {
        assert_eq!(texts(r#"\"a b"#), expect(&[(r#"\"a"#, true), ("b", false)]));
    }

    #[test]
    fn test_mixed_quotes () {
        assert_eq!(
            texts(r#""\"'\''" '"'"#),
            expect(&[(r#""\"'\''""#, true), (r#"'"'"#, false)])
        );
    }

    #[test]
    fn test_quoted_region () {
        assert_eq!(texts(r#""a b""#), expect(&[(r#""a b""#, false)]));
        assert_eq!(texts(r#""a b" "#), expect(&[(r#""a b""#, true)]));
        assert_eq!(texts(r#""a b" c"#), expect(&[(r#""a b""#, true), ("c", false)]));
        assert_eq!(texts("'a b' c"), expect(&[("'a b'", true), ("c", false)]));
    }

    #[test]
    fn test_quote_continues_token () {
        assert_eq!(texts(r#""a b"c"#), expect(&[(r#""a b"c"#, false)]));
        assert_eq!(texts(r#""a b"c "#), expect(&[(r#""a b"c"#, true)]));
        assert_eq!(texts("x'a b'y z"), expect(&[("x'a b'y", true), ("z", false)]));
    }

    #[test]
    fn test_unterminated_quote () {
        assert_eq!(texts(r#""a "#), expect(&[(r#""a "#, false)]));
        assert_eq!(texts("b 'c d  "), expect(&[("b", true), ("'c d  ", false)]));
    }

    #[test]
    fn test_backslash_inside_single_quotes () {
        // the escaped quote never closes the region
        assert_eq!(texts(r"'a\' b"), expect(&[(r"'a\' b", false)]));
    }

    #[test]
    fn test_trailing_backslash () {
        assert_eq!(texts(r"a\"), expect(&[(r"a\", false)]));
        assert_eq!(texts(r"a \"), expect(&[("a", true), (r"\", false)]));
    }

    #[test]
    fn test_other_whitespace_separates () {
        assert_eq!(texts("a\tb\n"), expect(&[("a", true), ("b", true)]));
    }

    #[test]
    fn test_single_spaced_line_rebuilds () {
        for line in [r#"git commit -m "fix it" --amend"#, r"ls a\ b 'c d'", "x"] {
            let joined = parse(line).into_iter().map(|arg| arg.text).collect::<Vec<_>>().join(" ");
            assert_eq!(joined, line);
        }
    }

    #[test]
    fn test_args_carry_flags () {
        let args = parse("cmd --out=a.txt -v --- -= ");
        let flags: Vec<&Flag> = args.iter().map(|arg| &arg.flag).collect();

        assert_eq!(flags[0], &Flag::Bare("cmd".into()));
        assert_eq!((flags[1].name(), flags[1].value()), ("out", "a.txt"));
        assert_eq!((flags[2].dashes(), flags[2].name(), flags[2].has_value()), ("-", "v", false));
        assert!(flags[3].is_invalid());
        assert!(flags[4].is_invalid());
        assert!(args.iter().all(|arg| arg.completed));
    }

    #[test]
    fn test_live_arg () {
        let args = parse("cmd --ver");
        assert!(!args[0].is_live());
        assert!(args[1].is_live());
    }
}
