use crate::api::network_dto::NetworkDto;
use crate::domain::network::Network;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads a WDM network (nodes, fibers, lightpaths) from a JSON file.
pub fn load_network(file_path: &str) -> Result<Network> {
    logger::init();
    log::info!("Logger initialized. Starting Network construction.");

    let root_dto: NetworkDto = parse_json_file::<NetworkDto>(file_path)?;
    log::info!("JSON file parsed successfully.");

    let network = Network::from_dto(root_dto)?;
    log::info!("Internal Network constructed successfully.");

    Ok(network)
}
