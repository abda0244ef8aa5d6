//! Names shared between the environment helpers and the parameter store

/// Environment variable pointing at the directory that contains `input_data/`
pub const DATA_DIR_VAR: &str = "CEC2005_DATA_DIR";

/// Sub-directory holding one folder per problem (`f01` .. `f25`)
pub const INPUT_DATA: &str = "input_data";

/// Optional manifest overriding file names and search bounds
pub const MANIFEST_FILE: &str = "meta_2005.json";

/// Folder name for a problem id, e.g. `f07`
pub fn problem_key(id: u32) -> String {
    format!("f{:02}", id)
}
