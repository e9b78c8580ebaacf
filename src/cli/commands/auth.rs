use clap::{Arg, ArgAction, Command};

pub fn with_args(command: Command) -> Command {
    let command = with_session_args(command);
    with_edge_args(command)
}

fn with_session_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("session-secret")
                .long("session-secret")
                .help("HMAC key used to sign and verify session tokens")
                .env("LINKBIO_SESSION_SECRET")
                .conflicts_with("insecure-dev-secret"),
        )
        .arg(
            Arg::new("insecure-dev-secret")
                .long("insecure-dev-secret")
                .help("Sign session tokens with the built-in development key (forgeable, local use only)")
                .env("LINKBIO_INSECURE_DEV_SECRET")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("session-ttl-seconds")
                .long("session-ttl-seconds")
                .help("Session token TTL in seconds")
                .env("LINKBIO_SESSION_TTL_SECONDS")
                .default_value("604800")
                .value_parser(clap::value_parser!(i64).range(0..)),
        )
}

fn with_edge_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("frontend-base-url")
                .long("frontend-base-url")
                .help("Frontend origin allowed for credentialed CORS requests")
                .env("LINKBIO_FRONTEND_BASE_URL")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new("edge-auth-policy")
                .long("edge-auth-policy")
                .help("Token check for page redirects: optimistic (presence only) or strict (verify signature)")
                .env("LINKBIO_EDGE_AUTH_POLICY")
                .default_value("optimistic")
                .value_parser(["optimistic", "strict"]),
        )
        .arg(
            Arg::new("web-root")
                .long("web-root")
                .help("Directory with the built frontend, served as static files")
                .env("LINKBIO_WEB_ROOT"),
        )
}
