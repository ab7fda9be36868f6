use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use reqwest::Url;
use tracing::info;

use gibm_client::Gibm;
use gibm_tafel::selection::{choose_class, choose_job, is_complete, selected_class};
use gibm_tafel::{Navigation, Resolver};

use crate::ascii::render;
use crate::state::FileStore;

mod ascii;
mod state;

#[derive(Parser)]
#[command(author, version, about, long_about)]
struct Args {
  #[arg(
    long,
    short,
    env = "GIBM_MIND_BASE_URL",
    default_value = "https://sandbox.gibm.ch/"
  )]
  base_url: Url,
  /// File the selection and the last viewed week are kept in
  #[arg(long, short, env = "GIBM_MIND_STATE", default_value = "gibm-mind.json")]
  state: PathBuf,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List all jobs
  Jobs,
  /// List the classes of a job
  Classes { job: String },
  /// Remember a job and one of its classes
  Select {
    #[arg(long, short)]
    job: String,
    #[arg(long, short)]
    class: String,
  },
  /// Show the last viewed week
  Show,
  NextWeek,
  PreviousWeek,
  NextQuartal,
  PreviousQuartal,
  /// Jump to the current week
  Today,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .init();

  let gibm = Gibm::new(args.base_url.clone());
  let mut store = FileStore::open(&args.state)?;

  let navigation = match args.command {
    Command::Jobs => {
      for job in gibm.jobs().await? {
        println!("{:>6}  {}", job.id, job.name);
      }
      return Ok(());
    }
    Command::Classes { job } => {
      for class in gibm.classes(&job).await? {
        println!("{:>6}  {} - {}", class.id, class.name, class.long_name);
      }
      return Ok(());
    }
    Command::Select { job, class } => {
      choose_job(&mut store, &job)?;
      choose_class(&mut store, &class)?;
      info!("Selected class {} of job {}", class, job);
      Navigation::Reload
    }
    Command::Show => Navigation::Reload,
    Command::NextWeek => Navigation::NextWeek,
    Command::PreviousWeek => Navigation::PreviousWeek,
    Command::NextQuartal => Navigation::NextQuartal,
    Command::PreviousQuartal => Navigation::PreviousQuartal,
    Command::Today => Navigation::Today,
  };

  let class_id = match selected_class(&store) {
    Some(class_id) if is_complete(&store) => class_id,
    _ => return Err(anyhow!("No class selected, run `select --job <id> --class <id>` first")),
  };

  let mut resolver = Resolver::new(gibm, store);
  let rendered = resolver.navigate(&class_id, navigation).await?;
  print!("{}", render(&rendered));

  Ok(())
}
