use log::LevelFilter;
use std::error::Error;
use wizard_status::config::ResolverOptions;
use wizard_status::{console_log_config, load_resolver};
use wizard_status::output::{print_host_subnets, print_network_values, print_step_statuses};
use wizard_status::processing::{
    get_bare_metal_discovery_initial_values, get_host_subnets, get_network_initial_values,
    is_adv_conf, InventoryHostname,
};
use wizard_status::snapshot::read_snapshot;

fn init_logging() {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        let console = console_log_config(LevelFilter::Info)
            .and_then(|config| log4rs::init_config(config).map_err(|err| err.into()));
        match console {
            Ok(_) => log::warn!("log4rs.yml not loaded ({e}), logging to console"),
            Err(err) => eprintln!("log4rs.yml not loaded ({e}), console logging failed: {err}"),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let snapshot_file = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("WIZARD_SNAPSHOT").ok())
        .ok_or("Usage: wizard-status <snapshot.json> (or set WIZARD_SNAPSHOT)")?;
    let steps_config = std::env::var("WIZARD_STEPS_CONFIG").ok();

    let snapshot = read_snapshot(&snapshot_file)?;
    let resolver = load_resolver(steps_config.as_deref(), ResolverOptions::default())?;
    let cluster = &snapshot.cluster;

    print_host_subnets(&get_host_subnets(cluster, &InventoryHostname));
    println!();
    print_network_values(
        &get_network_initial_values(cluster, &snapshot.defaults),
        is_adv_conf(cluster, &snapshot.defaults),
    );
    println!(
        "  extra disks for local storage: {}",
        get_bare_metal_discovery_initial_values(cluster).use_extra_disks_for_local_storage
    );
    println!();
    print_step_statuses(cluster, &resolver, &InventoryHostname);

    log::info!("#End main()");
    Ok(())
}
