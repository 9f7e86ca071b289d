use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub(crate) enum RunOutcome {
    Serve(SocketAddr, subtrak::config::AppConfig),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    let cli = Cli::parse();

    if let Err(err) = std::fs::create_dir_all(&cli.data_dir) {
        eprintln!("error: failed to create data directory: {err}");
        return RunOutcome::Exit(2);
    }
    let data_dir = std::fs::canonicalize(&cli.data_dir)
        .unwrap_or_else(|err| panic!("failed to resolve data directory: {err}"));

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));

    RunOutcome::Serve(
        addr,
        subtrak::config::AppConfig {
            data_dir,
            app_name: cli.app_name,
            emailjs_service_id: cli.emailjs_service_id,
            emailjs_template_id: cli.emailjs_template_id,
            emailjs_public_key: cli.emailjs_public_key,
        },
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "subtrak",
    version,
    about = "Personal subscription expense tracker"
)]
struct Cli {
    #[arg(long)]
    data_dir: PathBuf,
    #[arg(long, default_value = "SubTrak")]
    app_name: String,
    #[arg(long, default_value_t = 3000)]
    port: u16,
    #[arg(long, env = "SUBTRAK_EMAILJS_SERVICE_ID")]
    emailjs_service_id: Option<String>,
    #[arg(long, env = "SUBTRAK_EMAILJS_TEMPLATE_ID")]
    emailjs_template_id: Option<String>,
    #[arg(long, env = "SUBTRAK_EMAILJS_PUBLIC_KEY")]
    emailjs_public_key: Option<String>,
}
