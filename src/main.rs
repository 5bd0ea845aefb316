#[macro_use]
extern crate serde;
extern crate serde_json;

use clap::Parser;
use tracing_batteries::{OpenTelemetry, Sentry, Session, prelude::*};

#[macro_use]
mod macros;

mod api;
mod models;
mod telemetry;
mod utils;

use actix_web::{App, HttpServer};
use telemetry::TracingLogger;

/// Rewrites directory-style request URIs to the origin's default document.
///
/// Intended to sit behind an edge-function trigger in front of an
/// object-storage-backed origin: requests for `/about/` (or extensionless
/// paths) are rewritten to resolve against the bucket's `index.html` objects
/// before the CDN forwards them upstream.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The port to listen for incoming requests on.
    #[arg(
        short,
        long,
        default_value_t = 8000,
        env = "FUNCTIONS_CUSTOMHANDLER_PORT"
    )]
    port: u16,

    /// The name of the service which will be reported to OpenTelemetry endpoints.
    #[arg(long, env = "SERVICE_NAME", default_value = "dirindex")]
    service_name: String,

    /// The Sentry DSN to use for error reporting.
    #[arg(long, env = "SENTRY_DSN")]
    sentry_dsn: Option<String>,

    /// The environment to report to Sentry.
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    sentry_environment: Option<String>,
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let session = Session::new(args.service_name, version!("v"))
        .with_battery(Sentry::new((
            args.sentry_dsn.unwrap_or_default(),
            sentry::ClientOptions {
                environment: args.sentry_environment.map(|v| v.into()),
                ..Default::default()
            },
        )))
        .with_battery(OpenTelemetry::new(""));

    info!("Starting server on :{}", args.port);
    let result = HttpServer::new(move || {
        App::new().wrap(TracingLogger).configure(api::configure)
    })
    .bind(format!("0.0.0.0:{}", args.port))?
    .run()
    .await
    .map_err(|err| {
        error!("The server exited unexpectedly: {}", err);
        sentry::capture_event(sentry::protocol::Event {
            message: Some(format!("Server Exited Unexpectedly: {}", err)),
            level: sentry::protocol::Level::Fatal,
            ..Default::default()
        });

        err
    });

    session.shutdown();
    result
}
