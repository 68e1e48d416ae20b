mod ingest;

use crate::ingest::HttpExtensions;
use clap::Parser;
use confirmo_core::credentials::RawCredential;
use confirmo_core::dispatcher::{Dispatcher, DispatcherConfig};
use confirmo_core::queue::{ReceiverChannel, SenderChannel};
use confirmo_core::recorder::BaseRecorder;
use confirmo_core::trigger::CreationTrigger;
use confirmo_sendgrid::SendGridTransport;
use confirmo_twilio::TwilioTransport;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
struct Args {
    #[clap(long, env = "CONFIRMO_EMAIL_CREDENTIAL")]
    email_credential: RawCredential,
    #[clap(long, env = "CONFIRMO_SMS_CREDENTIAL")]
    sms_credential: RawCredential,
    #[clap(long, env = "CONFIRMO_SENDER_ADDRESS")]
    sender_address: String,
    #[clap(long, env = "CONFIRMO_ORIGIN_NUMBER")]
    origin_number: String,
    #[clap(long, env = "CONFIRMO_HTTP_INGEST_BIND", default_value = "[::]:8001")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    debug!("Config: {:#?}", args);

    // Initialize channels
    let (records_tx, records_rx) = flume::unbounded();
    let records_tx: Arc<dyn SenderChannel> = Arc::new(records_tx);
    let records_rx: Arc<dyn ReceiverChannel> = Arc::new(records_rx);

    let client = reqwest::Client::new();

    let email = Arc::new(SendGridTransport::new(
        client.clone(),
        args.email_credential.resolve().unwrap(),
    ));
    let sms = Arc::new(TwilioTransport::new(
        client,
        args.sms_credential.resolve().unwrap(),
    ));

    let dispatcher = Arc::new(Dispatcher::new(
        email,
        sms,
        Arc::new(BaseRecorder::new()),
        DispatcherConfig {
            sender_address: args.sender_address,
            origin_number: args.origin_number,
        },
    ));

    // Main loop
    let trigger = CreationTrigger::new(records_rx, dispatcher);
    tokio::spawn(trigger.run());

    // Spawns the HTTP server and quits
    ingest::start(args.bind, HttpExtensions { sender: records_tx }).await;

    let _ = tokio::signal::ctrl_c().await;
}
