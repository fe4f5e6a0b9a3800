pub mod accessions;
pub mod resource_cache;
pub mod interaction_exec;
