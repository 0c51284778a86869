//! Shader compile and startup errors
//!
//! Compile errors are recoverable: they are produced by a save and shown to
//! the user, while the previously active program keeps rendering. Startup
//! errors abort the application before the first frame.

use std::fmt;

/// Which step of program construction failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileStage {
    Vertex,
    Fragment,
    Link,
    /// The driver refused to hand out a shader/program object
    Allocation,
}

impl fmt::Display for CompileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompileStage::Vertex => "vertex shader",
            CompileStage::Fragment => "fragment shader",
            CompileStage::Link => "program link",
            CompileStage::Allocation => "GPU allocation",
        };
        f.write_str(name)
    }
}

/// Compiler or linker diagnostic for a failed program build
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{stage} failed:\n{log}")]
pub struct CompileError {
    pub stage: CompileStage,
    pub log: String,
}

impl CompileError {
    pub fn new(stage: CompileStage, log: impl Into<String>) -> Self {
        Self {
            stage,
            log: log.into(),
        }
    }
}

/// Fatal errors raised while bringing up the renderer
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("no OpenGL context available (eframe must run with the glow renderer)")]
    NoGlContext,
    #[error("built-in fragment shader failed to compile")]
    DefaultShader(#[source] CompileError),
    #[error("could not allocate quad geometry: {0}")]
    Geometry(String),
}

/// One line of a driver info log, with the source line when it could be parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: Option<u32>,
    pub message: String,
}

/// Split a GL info log into diagnostics.
///
/// Understands the Mesa form `0:3(12): error: ...` and the NVIDIA form
/// `0(3) : error C0000: ...`. Lines in any other shape are kept verbatim
/// without a line number.
pub fn parse_diagnostics(log: &str) -> Vec<Diagnostic> {
    log.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| match parse_mesa(l).or_else(|| parse_nvidia(l)) {
            Some((line, message)) => Diagnostic {
                line: Some(line),
                message: message.to_string(),
            },
            None => Diagnostic {
                line: None,
                message: l.to_string(),
            },
        })
        .collect()
}

// 0:3(12): error: syntax error
fn parse_mesa(line: &str) -> Option<(u32, &str)> {
    let (_, rest) = line.split_once(':')?;
    let open = rest.find('(')?;
    let number = rest[..open].parse::<u32>().ok()?;
    let close = rest.find(')')?;
    let message = rest[close + 1..].trim_start_matches(':').trim();
    Some((number, message))
}

// 0(3) : error C0000: syntax error
fn parse_nvidia(line: &str) -> Option<(u32, &str)> {
    let open = line.find('(')?;
    line[..open].parse::<u32>().ok()?;
    let close = line.find(')')?;
    let number = line[open + 1..close].parse::<u32>().ok()?;
    let message = line[close + 1..].trim_start().trim_start_matches(':').trim();
    Some((number, message))
}

/// Format a compile error for the notification and debug panels
pub fn format_compile_error(err: &CompileError) -> String {
    let mut out = format!("Shader error ({})", err.stage);
    let diagnostics = parse_diagnostics(&err.log);
    if diagnostics.is_empty() {
        out.push_str("\n\nNo diagnostic output from the driver.");
        return out;
    }
    out.push('\n');
    for diag in diagnostics {
        out.push('\n');
        match diag.line {
            Some(line) => out.push_str(&format!("line {}: {}", line, diag.message)),
            None => out.push_str(&diag.message),
        }
    }
    out
}
