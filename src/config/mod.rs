/// Configuration persistence
///
/// Two JSON files back the app:
/// - `config.json` in the app data dir: settings shared by every workspace
/// - `yapi.json` at each workspace root: per-project config and selection tree

pub mod global;
pub mod project;
