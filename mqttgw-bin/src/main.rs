#![deny(unsafe_code)]

use std::{process, time::Duration};

use structopt::StructOpt;

use mqttgw::conf::{options::Options, Settings};
use mqttgw::logger::logger_init;

#[tokio::main]
async fn main() {
    let opts = Options::from_args();

    //bind config
    let settings = Settings::raw_source(&opts)
        .and_then(|raw| Settings::bind(&raw, opts))
        .unwrap_or_else(|e| {
            eprintln!("configuration binding failed: {e}");
            process::exit(1);
        });

    //init log
    let _guard = logger_init(&settings.log).unwrap_or_else(|e| {
        eprintln!("logger init failed: {e}");
        process::exit(1);
    });

    //assemble the gateway, any failure here is fatal to startup
    let gateway = mqttgw::assemble_settings(settings).unwrap_or_else(|e| {
        log::error!("gateway assembly failed: {e}");
        process::exit(1);
    });

    gateway.logs();
    log::info!("gateway assembled, handing over to the bridge engine");

    tokio::signal::ctrl_c().await.expect("signal ctrl c");
    log::info!("shutting down");
    tokio::time::sleep(Duration::from_secs(1)).await;
}
