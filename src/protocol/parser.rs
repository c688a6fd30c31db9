//! Command line parsing
//!
//! Splits a line into words the way a POSIX shell would and maps the words
//! onto a [`Command`].

use crate::error::ProtocolError;
use crate::protocol::Command;

const NO_CLOSING_QUOTATION: &str = "No closing quotation";
const NO_ESCAPED_CHARACTER: &str = "No escaped character";

/// Splits `line` into words.
///
/// Spaces, tabs, carriage returns and newlines separate words; any other
/// character, including other Unicode whitespace, is part of a word. Single
/// quotes keep their contents literally. Inside double quotes a backslash only
/// escapes `"` and `\`; outside quotes it escapes any character. Quoted and
/// unquoted parts that touch form one word, and `''` produces an empty word.
///
/// Unbalanced quoting is reported as [`ProtocolError::Parse`]; the function
/// never panics on any input.
pub fn tokenize(line: &str) -> Result<Vec<String>, ProtocolError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(parse_error(NO_CLOSING_QUOTATION)),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(parse_error(NO_ESCAPED_CHARACTER)),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(parse_error(NO_CLOSING_QUOTATION)),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(ch) => current.push(ch),
                    None => return Err(parse_error(NO_ESCAPED_CHARACTER)),
                }
            }
            _ => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parses a raw input line into a [`Command`].
///
/// Missing required arguments are reported before anything runs, naming the
/// first argument that is missing.
pub fn parse_command(raw: &str) -> Result<Command, ProtocolError> {
    let tokens = tokenize(raw)?;
    let mut words = tokens.into_iter();

    let Some(cmd) = words.next() else {
        return Ok(Command::Empty);
    };
    let mut arg = |missing: &'static str| {
        words.next().ok_or_else(|| ProtocolError::Usage {
            command: cmd.clone(),
            missing,
        })
    };

    let command = match cmd.as_str() {
        "ls" => Command::Ls,
        "cd" => Command::Cd(arg("<name>")?),
        "chmod" => {
            let mode = arg("<mode>")?;
            let name = arg("<name>")?;
            Command::Chmod { mode, name }
        }
        "vfs-save" => Command::VfsSave(arg("<filename>")?),
        "date" => Command::Date,
        "who" => Command::Who,
        "uniq" => Command::Uniq,
        "exit" => Command::Exit,
        _ => Command::Unknown(cmd.clone()),
    };
    Ok(command)
}

fn parse_error(message: &str) -> ProtocolError {
    ProtocolError::Parse(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    #[test]
    fn test_tokenize_whitespace() {
        assert_eq!(words("  ls   -a\tfoo  "), ["ls", "-a", "foo"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_tokenize_only_splits_on_shell_whitespace() {
        assert_eq!(words("cd a\u{a0}b"), ["cd", "a\u{a0}b"]);
        assert_eq!(words("cd a\u{0b}b"), ["cd", "a\u{0b}b"]);
        assert_eq!(words("ls\r\n"), ["ls"]);
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(words(r#"cd "my folder""#), ["cd", "my folder"]);
        assert_eq!(words("cd 'a \"b\" c'"), ["cd", "a \"b\" c"]);
        assert_eq!(words(r#"say "a\"b" 'c\d'"#), ["say", "a\"b", "c\\d"]);
        assert_eq!(words(r#"x "a\nb""#), ["x", "a\\nb"]);
        assert_eq!(words("pre'fix'\"ed\" ''"), ["prefixed", ""]);
    }

    #[test]
    fn test_tokenize_escapes() {
        assert_eq!(words(r"cd my\ folder"), ["cd", "my folder"]);
        assert_eq!(words(r"a\'b"), ["a'b"]);
    }

    #[test]
    fn test_tokenize_errors() {
        assert_eq!(
            tokenize("cd \"unterminated"),
            Err(ProtocolError::Parse("No closing quotation".into()))
        );
        assert_eq!(
            tokenize("cd 'open"),
            Err(ProtocolError::Parse("No closing quotation".into()))
        );
        assert_eq!(
            tokenize("cd trailing\\"),
            Err(ProtocolError::Parse("No escaped character".into()))
        );
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("ls"), Ok(Command::Ls));
        assert_eq!(parse_command("date"), Ok(Command::Date));
        assert_eq!(parse_command("who"), Ok(Command::Who));
        assert_eq!(parse_command("uniq"), Ok(Command::Uniq));
        assert_eq!(parse_command("exit"), Ok(Command::Exit));
        assert_eq!(parse_command("   "), Ok(Command::Empty));
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(parse_command("cd folder1"), Ok(Command::Cd("folder1".into())));
        assert_eq!(parse_command("cd .."), Ok(Command::Cd("..".into())));
        assert_eq!(
            parse_command("chmod 644 file1.txt extra"),
            Ok(Command::Chmod {
                mode: "644".into(),
                name: "file1.txt".into()
            })
        );
        assert_eq!(
            parse_command("vfs-save 'out file.csv'"),
            Ok(Command::VfsSave("out file.csv".into()))
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(
            parse_command("cd"),
            Err(ProtocolError::Usage {
                command: "cd".into(),
                missing: "<name>"
            })
        );
        assert_eq!(
            parse_command("chmod"),
            Err(ProtocolError::Usage {
                command: "chmod".into(),
                missing: "<mode>"
            })
        );
        assert_eq!(
            parse_command("chmod 644"),
            Err(ProtocolError::Usage {
                command: "chmod".into(),
                missing: "<name>"
            })
        );
        assert_eq!(
            parse_command("vfs-save"),
            Err(ProtocolError::Usage {
                command: "vfs-save".into(),
                missing: "<filename>"
            })
        );
    }

    #[test]
    fn test_unknown_commands_are_case_sensitive() {
        assert_eq!(parse_command("LS"), Ok(Command::Unknown("LS".into())));
        assert_eq!(parse_command("mkdir x"), Ok(Command::Unknown("mkdir".into())));
    }
}
