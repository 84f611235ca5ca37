//! RamFS Session
//!
//! Main entry point for the interactive namespace.
//! Ties together the tree and the command registry, one tree per session.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::RamFs;

pub const BANNER: &str = r#"
 _  .-')     ('-.     _   .-')                .-')
( \( -O )   ( OO ).-.( '.( OO )_             ( OO ).
 ,------.   / . --. / ,--.   ,--.)  ,------.(_)---\_)
 |   /`. '  | \-.  \  |   `.'   |('-| _.---'/    _ |
 |  /  | |.-'-'  |  | |         |(OO|(_\    \  :` `.
 |  |_.' | \| |_.'  | |  |'.'|  |/  |  '--.  '..`''.)
 |  .  '.'  |  .-.  | |  |   |  |\_)|  .--' .-._)   \
 |  |\  \   |  | |  | |  |   |  |  \|  |_)  \       /
 `--' '--'  `--' `--' `--'   `--'   `--'     `-----'
"#;

/// Exit code for names the registry does not know.
pub const UNKNOWN_COMMAND_EXIT: i32 = 127;

/// Options for creating a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Print the banner when `run` starts
    pub banner: bool,
    /// Print the prompt before each line in `run`
    pub prompt: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { banner: true, prompt: true }
    }
}

/// One interactive namespace: a tree, its cursor and the commands acting on it.
pub struct Session {
    fs: RamFs,
    registry: CommandRegistry,
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            fs: RamFs::new(),
            registry: create_registry(),
            options,
        }
    }

    pub fn fs(&self) -> &RamFs {
        &self.fs
    }

    /// `--(RamFS)--[<cwd>]--# `
    pub fn prompt(&self) -> String {
        format!("--(RamFS)--[{}]--# ", self.fs.current_path())
    }

    /// Execute one input line.
    pub fn exec(&mut self, line: &str) -> CommandResult {
        let mut tokens = tokenize(line);
        if tokens.is_empty() {
            return CommandResult::default();
        }
        let name = tokens.remove(0);

        let Some(command) = self.registry.get(&name) else {
            info!("unknown command '{}'", name);
            return CommandResult::with_exit_code(
                "Unknown command\n".to_string(),
                String::new(),
                UNKNOWN_COMMAND_EXIT,
            );
        };

        debug!("dispatch {} {:?} in {}", name, tokens, self.fs.current_path());
        let result = command.execute(CommandContext::new(tokens, &mut self.fs));
        if result.exit_code != 0 {
            debug!("{} failed with {}: {}", name, result.exit_code, result.stderr.trim_end());
        }
        result
    }

    /// Execute a script line by line, concatenating output. Stops after
    /// `exit`; the exit code is that of the last command run.
    pub fn exec_script(&mut self, script: &str) -> CommandResult {
        let mut combined = CommandResult::default();
        for line in script.lines() {
            if tokenize(line).is_empty() {
                continue;
            }
            let result = self.exec(line);
            combined.stdout.push_str(&result.stdout);
            combined.stderr.push_str(&result.stderr);
            combined.exit_code = result.exit_code;
            if result.exit_requested {
                combined.exit_requested = true;
                break;
            }
        }
        combined
    }

    /// `exec_script` over raw bytes, e.g. a piped or on-disk script. Bytes
    /// that are not UTF-8 become U+FFFD instead of rejecting the script.
    pub fn exec_script_bytes(&mut self, script: &[u8]) -> CommandResult {
        self.exec_script(&String::from_utf8_lossy(script))
    }

    /// Read-eval loop until end of input or `exit`. Returns the exit code of
    /// the last command. Bytes that are not UTF-8 are replaced with U+FFFD,
    /// so a bad line fails as an ordinary command instead of ending the loop.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<i32>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.options.banner {
            writeln!(out, "{}", BANNER)?;
        }

        let mut exit_code = 0;
        let mut buf = Vec::new();
        loop {
            if self.options.prompt {
                write!(out, "{}", self.prompt())?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(['\n', '\r']);
            if tokenize(line).is_empty() {
                continue;
            }

            let result = self.exec(line);
            out.write_all(result.stdout.as_bytes())?;
            err.write_all(result.stderr.as_bytes())?;
            exit_code = result.exit_code;
            if result.exit_requested {
                break;
            }
        }
        out.flush()?;
        err.flush()?;
        Ok(exit_code)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

/// Split on single spaces, dropping the empty tokens left by runs of spaces.
fn tokenize(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet() -> Session {
        Session::new(SessionOptions { banner: false, prompt: false })
    }

    fn run_script(session: &mut Session, input: &str) -> (String, String, i32) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = session.run(Cursor::new(input), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            code,
        )
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("write f  hello   world"), vec!["write", "f", "hello", "world"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_prompt_tracks_cursor() {
        let mut session = quiet();
        assert_eq!(session.prompt(), "--(RamFS)--[/]--# ");
        session.exec("mkdir docs");
        session.exec("cd docs");
        assert_eq!(session.prompt(), "--(RamFS)--[/docs]--# ");
    }

    #[test]
    fn test_unknown_command() {
        let mut session = quiet();
        let result = session.exec("frobnicate x");
        assert_eq!(result.stdout, "Unknown command\n");
        assert_eq!(result.exit_code, UNKNOWN_COMMAND_EXIT);
    }

    #[test]
    fn test_blank_line_ignored() {
        let mut session = quiet();
        assert_eq!(session.exec("   "), CommandResult::default());
    }

    #[test]
    fn test_scenario_docs_notes() {
        let mut session = quiet();
        let (out, err, code) = run_script(
            &mut session,
            "mkdir docs\ncd docs\ntouch notes\nwrite notes hello\ncd ..\nread docs/notes\n",
        );
        assert_eq!(out, "hello\n");
        assert_eq!(err, "");
        assert_eq!(code, 0);
    }

    #[test]
    fn test_scenario_duplicate_mkdir() {
        let mut session = quiet();
        let result = session.exec_script("mkdir x\nmkdir x\nls .\n");
        assert_eq!(result.stdout, "x\n");
        assert_eq!(result.stderr, "mkdir: node already exists: 'x'\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_exit_stops_loop() {
        let mut session = quiet();
        let (out, _, code) = run_script(&mut session, "mkdir a\nexit\nmkdir b\n");
        assert_eq!(out, "Catchya Later:)\n");
        assert_eq!(code, 0);
        assert_eq!(session.fs().list(".").unwrap(), vec!["a"]);
    }

    #[test]
    fn test_interactive_output() {
        let mut session = Session::new(SessionOptions { banner: false, prompt: true });
        let (out, _, _) = run_script(&mut session, "mkdir d\ncd d\npwd\n");
        assert_eq!(
            out,
            "--(RamFS)--[/]--# --(RamFS)--[/]--# --(RamFS)--[/d]--# /d\n--(RamFS)--[/d]--# "
        );
    }

    #[test]
    fn test_banner() {
        let mut session = Session::new(SessionOptions { banner: true, prompt: false });
        let (out, _, _) = run_script(&mut session, "");
        assert!(out.starts_with(BANNER));
    }

    #[test]
    fn test_crlf_input() {
        let mut session = quiet();
        let (out, _, _) = run_script(&mut session, "touch f\r\nwrite f hi\r\nread f\r\n");
        assert_eq!(out, "hi\n");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut session = quiet();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let input: &[u8] = b"mkdir a\ntouch \xff\nmkdir b\nls\n";
        let code = session.run(input, &mut out, &mut err).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            session.fs().list(".").unwrap(),
            vec!["a", "b", "\u{FFFD}"]
        );
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n\u{FFFD}\n");
    }

    #[test]
    fn test_invalid_utf8_script_keeps_running() {
        let mut session = quiet();
        let result = session.exec_script_bytes(b"mkdir a\nread \xff\nmkdir b\nls\n");
        assert_eq!(result.stdout, "a\nb\n");
        assert!(result.stderr.starts_with("read: path component not found"));
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut session = quiet();
        let (out, _, _) = run_script(&mut session, "touch f\nwrite f hi\nread f");
        assert_eq!(out, "hi\n");
    }

    #[test]
    fn test_traversal_through_file_reported() {
        let mut session = quiet();
        let result = session.exec_script("mkdir a\ncd a\ntouch fileX\nmkdir b\ncd /\nls a/fileX/b\n");
        assert_eq!(result.stdout, "");
        assert_eq!(result.stderr, "ls: not a directory: 'a/fileX'\n");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut one = quiet();
        let mut two = quiet();
        one.exec("mkdir mine");
        assert_eq!(two.exec("ls").stdout, "");
        assert_eq!(one.exec("ls").stdout, "mine\n");
    }
}
