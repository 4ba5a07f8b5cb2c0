//! Line-driven game loop
//!
//! Reads one guess per line until input ends, writing feedback after each.

use crate::core::{GameResult, GameSession};
use crate::output::{Style, welcome_message};
use std::io::{self, BufRead, Write};

/// Play a session to completion
///
/// Each line of `input` (without its `\n` or `\r\n`) is one guess. Bytes that
/// are not valid UTF-8 are replaced, so such a line is rejected as
/// non-alphabetic rather than aborting the game.
///
/// # Errors
///
/// Returns an I/O error if reading `input` or writing `out` fails.
///
/// # Examples
/// ```
/// use unscramble::commands::run_play;
/// use unscramble::core::{Dictionary, GameResult, GameSession, LetterPool};
/// use unscramble::output::Style;
///
/// let session = GameSession::new(LetterPool::new("listen").unwrap(), 3, Dictionary::new(["ten"]));
/// let mut out = Vec::new();
/// let result = run_play(session, "ten\n".as_bytes(), &mut out, Style::Plain).unwrap();
/// assert_eq!(result, GameResult::Completed(3));
/// ```
pub fn run_play<R: BufRead, W: Write>(
    mut session: GameSession,
    mut input: R,
    out: &mut W,
    style: Style,
) -> io::Result<GameResult> {
    writeln!(out, "{}", welcome_message(&session))?;
    out.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let guess = String::from_utf8_lossy(strip_line_ending(&buf));
        let outcome = session.submit_guess(&guess);
        writeln!(out, "{}", style.outcome(&outcome))?;
        out.flush()?;
    }

    let result = session.finalize();
    writeln!(out, "{}", style.result(result))?;
    out.flush()?;
    Ok(result)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, LetterPool};

    fn play(letters: &str, words: &[&str], input: &[u8]) -> (GameResult, String) {
        let session = GameSession::new(LetterPool::new(letters).unwrap(), 3, Dictionary::new(words));
        let mut out = Vec::new();
        let result = run_play(session, input, &mut out, Style::Plain).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn strips_line_endings() {
        assert_eq!(strip_line_ending(b"cat\n"), b"cat");
        assert_eq!(strip_line_ending(b"cat\r\n"), b"cat");
        assert_eq!(strip_line_ending(b"cat"), b"cat");
        assert_eq!(strip_line_ending(b"\n"), b"");
    }

    #[test]
    fn empty_input_means_no_guesses() {
        let (result, transcript) = play("listen", &["ten"], b"");
        assert_eq!(result, GameResult::NoGuesses);
        assert!(transcript.ends_with("No words guessed!\n"));
    }

    #[test]
    fn last_line_without_newline_is_a_guess() {
        let (result, transcript) = play("listen", &["ten"], b"ten");
        assert_eq!(result, GameResult::Completed(3));
        assert!(transcript.contains("OK! Score so far is 3\n"));
    }

    #[test]
    fn crlf_input_is_accepted() {
        let (result, _) = play("listen", &["ten", "list"], b"ten\r\nlist\r\n");
        assert_eq!(result, GameResult::Completed(7));
    }

    #[test]
    fn invalid_utf8_is_rejected_not_fatal() {
        let (result, transcript) = play("listen", &["ten"], b"t\xffn\nten\n");
        assert_eq!(result, GameResult::Completed(3));
        assert!(transcript.contains("Word must contain only letters\n"));
    }

    #[test]
    fn blank_line_is_too_short() {
        let (_, transcript) = play("listen", &["ten"], b"\n");
        assert!(transcript.contains("Word too short - it must be at least 3 characters long\n"));
    }
}
