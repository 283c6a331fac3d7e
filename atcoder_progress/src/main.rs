mod cmd;
mod modules;

use crate::cmd::{
    category::{self, CategoryArgs},
    pie::{self, PieArgs},
    server::{self, ServerArgs},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, str::FromStr};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self, time::OffsetTime},
};

#[derive(Debug, Parser)]
#[command(name = "atcoder_progress")]
#[command(about = "Progress of AtCoder problems by contest category")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Category(CategoryArgs),
    Pie(PieArgs),
    Server(ServerArgs),
}

fn main() {
    dotenv().ok();

    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&log_level)
                .unwrap_or(LevelFilter::INFO)
                .into(),
        )
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(
            OffsetTime::local_rfc_3339().expect("couldn't determine the local time offset"),
        );
    // 標準出力はJSONの出力に使うので、ログは標準エラー出力に書き出す
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    match Cli::parse().command {
        Commands::Category(args) => runtime.block_on(category::run(args)),
        Commands::Pie(args) => runtime.block_on(pie::run(args)),
        Commands::Server(args) => runtime.block_on(server::run(args)),
    }
    .expect("command failed");
}
