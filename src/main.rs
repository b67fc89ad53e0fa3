use tracing::{error, info, span, Level};

mod adapters;
mod bucket;
mod model;
mod util;

use model::bucket::BucketError;
use util::uri::Provider;

#[tokio::main]
async fn main() -> Result<(), BucketError> {
    let matches = clap::Command::new("bucketsample")
        .about("List the keys of a bucket and draw a random sample of them")
        .arg(
            clap::Arg::new("BUCKET")
                .help("s3://name, gs://name, or a bare S3 bucket name")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("prefix")
                .long("prefix")
                .default_value("")
                .help("only list keys starting with this prefix"),
        )
        .arg(
            clap::Arg::new("sample")
                .long("sample")
                .short('n')
                .value_parser(clap::value_parser!(usize))
                .help("print this many randomly chosen keys"),
        )
        .arg(
            clap::Arg::new("distinct")
                .long("distinct")
                .action(clap::ArgAction::SetTrue)
                .requires("sample")
                .help("sample without replacement"),
        )
        .arg(
            clap::Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    tracing_subscriber::fmt()
        .json()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let span = span!(Level::INFO, "main", context = "main");
    let _e = span.enter();

    let uri = matches.get_one::<String>("BUCKET").map(String::as_str).unwrap_or("");
    let prefix = matches.get_one::<String>("prefix").map(String::as_str).unwrap_or("");
    let (provider, name) = util::uri::parse_bucket_uri(uri)?;
    info!(bucket = name, prefix = prefix, provider = ?provider, "args");

    let client: Box<dyn adapters::ObjectAdapter> = match provider {
        Provider::AWS => {
            let config = aws_config::load_from_env().await;
            Box::new(adapters::s3::S3Adapter::new(aws_sdk_s3::Client::new(&config)))
        }
        Provider::GCS => {
            let config = google_cloud_storage::client::ClientConfig::default()
                .with_auth()
                .await
                .map_err(|err| BucketError::Config(err.to_string()))?;
            Box::new(google_cloud_storage::client::Client::new(config))
        }
    };

    let mut bucket = bucket::BucketFacade::new(client, name, verbose).with_prefix(prefix);
    bucket.connect().map_err(|err| {
        error!(error_message = %err, error_group = "connect");
        err
    })?;

    info!(
        bucket = bucket.name(),
        state = ?bucket.state(),
        objects = bucket.objects().len(),
        bytes = bucket.objects().iter().map(|o| o.size).sum::<i64>(),
        last_modified = ?bucket.objects().iter().map(|o| o.modified_time).max(),
        keys = bucket.keys().len(),
        "connected"
    );

    println!("{}", bucket.keys().len());

    if let Some(n) = matches.get_one::<usize>("sample") {
        let sample = if matches.get_flag("distinct") {
            bucket.sample_distinct(*n)
        } else {
            bucket.sample(*n)
        };

        for key in sample {
            println!("{}", key);
        }
    }

    Ok(())
}
