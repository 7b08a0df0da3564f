//! Runs embedded `PostgreSQL` lifecycle steps on behalf of the test suite.
//!
//! ```text
//! pg_worker <setup|start|stop> <payload.json>
//! ```
//!
//! The payload is a `pg_embedded_setup_unpriv` worker payload: cluster
//! settings plus environment overrides. When launched as root the worker
//! re-executes itself as `nobody`, because `initdb` and `postgres` refuse to
//! run with superuser privileges.

#[cfg(unix)]
use camino::{Utf8Path, Utf8PathBuf};
#[cfg(unix)]
use nix::unistd::{Uid, User, initgroups, setgid, setuid};
#[cfg(unix)]
use pg_embedded_setup_unpriv::ambient_dir_and_path;
#[cfg(unix)]
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
#[cfg(unix)]
use postgresql_embedded::{PostgreSQL, Status};
#[cfg(unix)]
use std::ffi::CString;
#[cfg(unix)]
use std::io::{self, Read};
#[cfg(unix)]
use std::process::Command;
#[cfg(unix)]
use std::{env, process};
#[cfg(unix)]
use thiserror::Error;

#[cfg(unix)]
const REEXEC_MARKER_ENV: &str = "PG_WORKER_REEXEC";
#[cfg(unix)]
const TRUSTED_PATH: &str = "/usr/sbin:/usr/bin:/sbin:/bin";
#[cfg(unix)]
const UNPRIVILEGED_USER: &str = "nobody";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(unix)]
#[derive(Debug, Error)]
enum WorkerError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read worker payload: {0}")]
    PayloadRead(#[source] BoxError),
    #[error("failed to parse worker payload: {0}")]
    PayloadParse(#[source] serde_json::Error),
    #[error("invalid cluster settings: {0}")]
    Settings(String),
    #[error("failed to build runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to drop privileges: {0}")]
    PrivilegeDrop(String),
    #[error("postgres {operation} failed: {message}")]
    Postgres {
        operation: &'static str,
        message: String,
    },
}

#[cfg(unix)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Setup,
    Start,
    Stop,
}

#[cfg(unix)]
impl Operation {
    fn parse(arg: &str) -> Result<Self, WorkerError> {
        match arg {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => Err(WorkerError::InvalidArgs(format!(
                "unknown pg_worker operation '{other}'; expected setup, start or stop"
            ))),
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    let args = collect_args()?;
    reexec_unprivileged_if_root(&args)?;
    let (operation, payload_path) = parse_args(args)?;
    run(operation, &payload_path)?;
    Ok(())
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker is only supported on Unix platforms".into())
}

#[cfg(unix)]
fn collect_args() -> Result<Vec<Utf8PathBuf>, WorkerError> {
    env::args_os()
        .map(|arg| {
            arg.into_string()
                .map(Utf8PathBuf::from)
                .map_err(|_| WorkerError::InvalidArgs("argument is not valid UTF-8".into()))
        })
        .collect()
}

#[cfg(unix)]
fn parse_args(args: Vec<Utf8PathBuf>) -> Result<(Operation, Utf8PathBuf), WorkerError> {
    let mut rest = args.into_iter().skip(1);
    let operation = rest
        .next()
        .ok_or_else(|| WorkerError::InvalidArgs("missing operation argument".into()))
        .and_then(|arg| Operation::parse(arg.as_str()))?;
    let payload_path = rest
        .next()
        .ok_or_else(|| WorkerError::InvalidArgs("missing payload path argument".into()))?;
    if let Some(extra) = rest.next() {
        return Err(WorkerError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok((operation, payload_path))
}

#[cfg(unix)]
fn run(operation: Operation, payload_path: &Utf8Path) -> Result<(), WorkerError> {
    let payload = load_payload(payload_path)?;
    drop_privileges_if_root(UNPRIVILEGED_USER)?;
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| WorkerError::Settings(err.to_string()))?;
    apply_environment(&payload.environment);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(WorkerError::Runtime)?;
    let mut postgres = PostgreSQL::new(settings);
    runtime.block_on(async {
        match operation {
            Operation::Setup => {
                postgres
                    .setup()
                    .await
                    .map_err(|err| postgres_error(operation, &err))?;
                ensure_started(&mut postgres, operation).await
            }
            Operation::Start => ensure_started(&mut postgres, operation).await,
            Operation::Stop => postgres
                .stop()
                .await
                .map_err(|err| postgres_error(operation, &err)),
        }
    })?;

    if operation != Operation::Stop {
        // The server must outlive this process.
        std::mem::forget(postgres);
    }
    Ok(())
}

#[cfg(unix)]
async fn ensure_started(postgres: &mut PostgreSQL, operation: Operation) -> Result<(), WorkerError> {
    if matches!(postgres.status(), Status::Started) {
        return Ok(());
    }
    postgres
        .start()
        .await
        .map_err(|err| postgres_error(operation, &err))
}

#[cfg(unix)]
fn postgres_error(operation: Operation, err: &impl std::fmt::Display) -> WorkerError {
    WorkerError::Postgres {
        operation: operation.as_str(),
        message: err.to_string(),
    }
}

#[cfg(unix)]
fn load_payload(path: &Utf8Path) -> Result<WorkerPayload, WorkerError> {
    let bytes = read_payload_file(path).map_err(WorkerError::PayloadRead)?;
    serde_json::from_slice(&bytes).map_err(WorkerError::PayloadParse)
}

#[cfg(unix)]
fn read_payload_file(path: &Utf8Path) -> Result<Vec<u8>, BoxError> {
    let (dir, relative) = ambient_dir_and_path(path)?;
    let mut file = dir.open(relative.as_std_path())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(unix)]
fn reexec_unprivileged_if_root(args: &[Utf8PathBuf]) -> Result<(), WorkerError> {
    if !Uid::effective().is_root() || env::var_os(REEXEC_MARKER_ENV).is_some() {
        return Ok(());
    }

    let exe = env::current_exe()
        .map_err(WorkerError::Runtime)?
        .into_os_string()
        .into_string()
        .map(Utf8PathBuf::from)
        .map_err(|_| WorkerError::Runtime(io::Error::other("executable path is not valid UTF-8")))?;
    let forwarded = args.get(1..).unwrap_or_default();

    let status = match Command::new("runuser")
        .args(["-u", UNPRIVILEGED_USER, "--"])
        .arg(exe.as_std_path())
        .args(forwarded.iter().map(|arg| arg.as_std_path()))
        .env(REEXEC_MARKER_ENV, "1")
        .env("PATH", TRUSTED_PATH)
        .status()
    {
        Ok(status) => status,
        Err(err) if err.kind() == io::ErrorKind::NotFound => run_via_su(&exe, forwarded)?,
        Err(err) => return Err(WorkerError::PrivilegeDrop(err.to_string())),
    };
    process::exit(status.code().unwrap_or(1));
}

#[cfg(unix)]
fn run_via_su(exe: &Utf8Path, forwarded: &[Utf8PathBuf]) -> Result<process::ExitStatus, WorkerError> {
    let command = std::iter::once(exe.as_str())
        .chain(forwarded.iter().map(|arg| arg.as_str()))
        .map(shell_escape)
        .fold(format!("{REEXEC_MARKER_ENV}=1 exec"), |mut line, part| {
            line.push(' ');
            line.push_str(&part);
            line
        });

    Command::new("/bin/su")
        .args(["-s", "/bin/sh", UNPRIVILEGED_USER, "-c"])
        .arg(command)
        .env("PATH", TRUSTED_PATH)
        .status()
        .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))
}

/// Single-quotes `value` for a POSIX shell.
#[cfg(unix)]
fn shell_escape(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

#[cfg(unix)]
fn drop_privileges_if_root(username: &str) -> Result<(), WorkerError> {
    if !Uid::effective().is_root() {
        return Ok(());
    }

    let user = User::from_name(username)
        .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?
        .ok_or_else(|| WorkerError::PrivilegeDrop(format!("user '{username}' not found")))?;
    let name = CString::new(user.name.clone())
        .map_err(|err| WorkerError::PrivilegeDrop(format!("invalid user name: {err}")))?;
    initgroups(&name, user.gid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
    setgid(user.gid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
    setuid(user.uid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;

    // SAFETY: no other threads exist yet; the runtime is built afterwards.
    unsafe {
        env::set_var("HOME", &user.dir);
        env::set_var("USER", &user.name);
        env::set_var("LOGNAME", &user.name);
    }
    Ok(())
}

#[cfg(unix)]
fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
    for (key, value) in environment {
        // SAFETY: no other threads exist yet; the runtime is built afterwards.
        unsafe {
            match value {
                Some(secret) => env::set_var(key, secret.expose()),
                None => env::remove_var(key),
            }
        }
    }
}
