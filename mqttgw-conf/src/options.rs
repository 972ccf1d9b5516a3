use structopt::StructOpt;

/// Command-line options. Values given here override file configuration.
#[derive(StructOpt, Debug, Clone, Default)]
pub struct Options {
    /// Config filename
    #[structopt(name = "config", short = "f", long)]
    pub cfg_name: Option<String>,

    /// Demo device id, overrides `device.device_id`
    #[structopt(name = "device-id", long)]
    pub device_id: Option<String>,

    /// AMQP backend host, overrides `amqp.host`
    #[structopt(name = "amqp-host", long)]
    pub amqp_host: Option<String>,
}
