use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::consts::{DEFAULT_CODEC_PROGRAM, INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER};
use crate::core::Direction;
use crate::error::{ConversionError, UnexpectedError};

use super::CodecGateway;

/// Program plus argument templates for each direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CodecCommand {
    pub(crate) program: String,
    pub(crate) compile_args: Vec<String>,
    pub(crate) decompile_args: Vec<String>,
}

impl Default for CodecCommand {
    fn default() -> Self {
        let template = |verb: &str| {
            vec![
                verb.to_string(),
                INPUT_PLACEHOLDER.to_string(),
                OUTPUT_PLACEHOLDER.to_string(),
            ]
        };
        CodecCommand {
            program: DEFAULT_CODEC_PROGRAM.to_string(),
            compile_args: template("compile"),
            decompile_args: template("decompile"),
        }
    }
}

impl CodecCommand {
    fn template(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Compile => &self.compile_args,
            Direction::Decompile => &self.decompile_args,
        }
    }
}

/// Runs the codec as a child process, once per file
pub(crate) struct CommandCodec {
    command: CodecCommand,
}

impl CommandCodec {
    pub(crate) fn new(command: CodecCommand) -> Self {
        Self { command }
    }
}

/// Substitute `{input}` and `{output}` into an argument template
fn build_args(template: &[String], input: &Path, output_dir: &Path) -> Vec<OsString> {
    template
        .iter()
        .map(|arg| match arg.as_str() {
            INPUT_PLACEHOLDER => input.as_os_str().to_os_string(),
            OUTPUT_PLACEHOLDER => output_dir.as_os_str().to_os_string(),
            _ if arg.contains(INPUT_PLACEHOLDER) || arg.contains(OUTPUT_PLACEHOLDER) => arg
                .replace(INPUT_PLACEHOLDER, &input.to_string_lossy())
                .replace(OUTPUT_PLACEHOLDER, &output_dir.to_string_lossy())
                .into(),
            _ => arg.into(),
        })
        .collect()
}

/// Pick the most useful text out of a failed run
fn failure_message(stderr: &[u8], stdout: &[u8], code: i32) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    let stdout = String::from_utf8_lossy(stdout);
    if !stdout.trim().is_empty() {
        return stdout.trim().to_string();
    }
    format!("codec exited with status {code}")
}

impl CodecGateway for CommandCodec {
    fn name(&self) -> &str {
        &self.command.program
    }

    fn convert(
        &self,
        direction: Direction,
        input: &Path,
        output_dir: &Path,
    ) -> Result<(), ConversionError> {
        let program = &self.command.program;
        let args = build_args(self.command.template(direction), input, output_dir);
        log::debug!("running {program} {args:?}");

        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    UnexpectedError::NotFound {
                        program: program.clone(),
                    }
                } else {
                    UnexpectedError::Spawn {
                        program: program.clone(),
                        source: e,
                    }
                }
            })?;

        if output.status.success() {
            return Ok(());
        }

        match output.status.code() {
            Some(code) => Err(ConversionError::codec(failure_message(
                &output.stderr,
                &output.stdout,
                code,
            ))),
            None => Err(UnexpectedError::Terminated {
                program: program.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_templates() {
        let cmd = CodecCommand::default();
        assert_eq!(cmd.program, "dgrlin");
        assert_eq!(cmd.compile_args, vec!["compile", "{input}", "{output}"]);
        assert_eq!(cmd.decompile_args, vec!["decompile", "{input}", "{output}"]);
    }

    #[test]
    fn build_args_substitutes_placeholders() {
        let template = vec![
            "--in".to_string(),
            "{input}".to_string(),
            "--out={output}".to_string(),
        ];
        let args = build_args(&template, Path::new("data/a b.txt"), Path::new("out"));
        assert_eq!(
            args,
            vec![
                OsString::from("--in"),
                OsString::from("data/a b.txt"),
                OsString::from("--out=out"),
            ]
        );
    }

    #[test]
    fn failure_message_prefers_stderr() {
        assert_eq!(failure_message(b"  bad opcode\n", b"noise", 1), "bad opcode");
        assert_eq!(failure_message(b"", b"from stdout\n", 1), "from stdout");
        assert_eq!(failure_message(b" \n", b"", 4), "codec exited with status 4");
    }

    #[cfg(unix)]
    fn shell_codec(script: &str) -> CommandCodec {
        let args = vec![
            "-c".to_string(),
            script.to_string(),
            "sh".to_string(),
            "{input}".to_string(),
            "{output}".to_string(),
        ];
        CommandCodec::new(CodecCommand {
            program: "sh".to_string(),
            compile_args: args.clone(),
            decompile_args: args,
        })
    }

    #[cfg(unix)]
    #[test]
    fn success_on_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let codec = shell_codec(r#"touch "$2/done""#);
        codec
            .convert(Direction::Compile, Path::new("a.txt"), dir.path())
            .unwrap();
        assert!(dir.path().join("done").exists());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_codec_failure() {
        let codec = shell_codec(r#"printf 'Invalid opcode: %s\nsecond line\n' "$1" >&2; exit 1"#);
        let err = codec
            .convert(Direction::Decompile, Path::new("e00.lin"), Path::new("out"))
            .unwrap_err();
        match &err {
            ConversionError::Codec { message } => {
                assert_eq!(message, "Invalid opcode: e00.lin\nsecond line");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.summary(), "Invalid opcode: e00.lin");
    }

    #[cfg(unix)]
    #[test]
    fn killed_codec_is_unexpected() {
        let codec = shell_codec("kill -9 $$");
        let err = codec
            .convert(Direction::Compile, Path::new("a.txt"), Path::new("out"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Unexpected(UnexpectedError::Terminated { .. })
        ));
    }

    #[test]
    fn missing_program_is_unexpected() {
        let codec = CommandCodec::new(CodecCommand {
            program: "dgrtools-no-such-codec-program".to_string(),
            ..CodecCommand::default()
        });
        let err = codec
            .convert(Direction::Compile, Path::new("a.txt"), Path::new("out"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Unexpected(UnexpectedError::NotFound { .. })
        ));
    }
}
